//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. All
//! playback figures come from `NowPlayingView`, so what is drawn is a pure
//! function of controller and playlist state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, NowPlayingView};
use crate::config::{ControlsSettings, UiSettings};
use crate::engine::AudioEngine;
use crate::picker::PickerState;

const CONTROLS: &[(&str, &str)] = &[
    ("o", "add files"),
    ("enter", "play"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("0-9", "jump"),
    ("q", "quit"),
];

/// Render the controls help text, incorporating the scrub step.
fn controls_text(seek_step_seconds: u64) -> String {
    let mut parts: Vec<String> = CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect();
    parts.insert(4, format!("[H/L] scrub -/+{}s", seek_step_seconds));
    parts.join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    // Prefer a usable minimum, but never spill outside `r`.
    let width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    let height = height.min(r.height.saturating_sub(2)).max(5).min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Start of a `height`-row window over `total` rows that keeps `selected` centered.
fn visible_window(total: usize, height: usize, selected: usize) -> usize {
    if total <= height || height == 0 {
        return 0;
    }
    let half = height / 2;
    let start = selected.saturating_sub(half);
    start.min(total - height)
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into `frame`.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    app: &App<E>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ripple ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let view = NowPlayingView::build(&app.controller, &app.playlist);

    // Now playing
    let status = match app.notice() {
        Some(notice) => format!("{}\n{} • {}", view.title, view.state, notice.text),
        None => format!("{}\n{} • Track {}", view.title, view.state, view.count),
    };
    let status_par = Paragraph::new(status)
        .block(Block::bordered().padding(left_pad()).title(" now playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Seek bar
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .ratio(view.ratio)
        .label(format!("{} / {}", view.elapsed, view.total));
    frame.render_widget(gauge, chunks[2]);

    // Playlist
    {
        let total = app.playlist.size();
        let list_height = chunks[3].height.saturating_sub(2) as usize;
        let current = app.playlist.cursor().unwrap_or(0);
        let start = visible_window(total, list_height, current);
        let end = (start + list_height.max(1)).min(total);

        let items: Vec<ListItem> = app.playlist.tracks()[start..end]
            .iter()
            .map(|t| ListItem::new(t.display_name()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(current - start));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    if let Some(picker) = app.picker.as_ref() {
        draw_picker(frame, picker, chunks[3]);
    }

    let footer = Paragraph::new(controls_text(controls_settings.seek_step_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

/// Overlay the file picker on top of `area`.
fn draw_picker(frame: &mut Frame, picker: &PickerState, area: Rect) {
    let popup = centered_rect_sized(area.width.saturating_sub(4), area.height + 4, area);
    frame.render_widget(Clear, popup);

    let total = picker.len();
    let height = popup.height.saturating_sub(2) as usize;
    let start = visible_window(total, height, picker.cursor());
    let end = (start + height.max(1)).min(total);

    let items: Vec<ListItem> = (start..end)
        .map(|i| {
            let mark = if picker.is_marked(i) { "[x] " } else { "[ ] " };
            if picker.allow_multiple() {
                ListItem::new(format!("{}{}", mark, picker.label(i)))
            } else {
                ListItem::new(picker.label(i))
            }
        })
        .collect();

    let title = if picker.is_empty() {
        format!(" no audio files in {} (esc closes) ", picker.root().display())
    } else if picker.allow_multiple() {
        format!(
            " pick files: space marks, enter adds ({} marked) ",
            picker.marked_count()
        )
    } else {
        " pick a file: enter adds ".to_string()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if total > 0 {
        state.select(Some(picker.cursor() - start));
    }
    frame.render_stateful_widget(list, popup, &mut state);
}
