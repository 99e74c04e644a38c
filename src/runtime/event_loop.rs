use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::engine::AudioEngine;
use crate::picker::PickerOutcome;
use crate::player::Command;
use crate::ui;

/// Longest the loop blocks on input, so ticks and completion stay timely.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Main terminal event loop: applies queued commands, runs the tick,
/// draws and turns key presses into commands. Returns `Ok(())` on quit.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.on_tick(Instant::now());
        app.run_pending();
        if app.should_quit() {
            return Ok(());
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        let wait = app
            .controller
            .time_to_next_tick(Instant::now())
            .map_or(INPUT_POLL, |d| d.min(INPUT_POLL));

        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key_event(key, app);
            }
        }
    }
}

fn handle_key_event<E: AudioEngine>(key: KeyEvent, app: &mut App<E>) {
    if let Some(picker) = app.picker.as_mut() {
        let outcome = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                picker.next();
                PickerOutcome::Pending
            }
            KeyCode::Char('k') | KeyCode::Up => {
                picker.prev();
                PickerOutcome::Pending
            }
            KeyCode::Char('g') | KeyCode::Home => {
                picker.first();
                PickerOutcome::Pending
            }
            KeyCode::Char('G') | KeyCode::End => {
                picker.last();
                PickerOutcome::Pending
            }
            KeyCode::Char(' ') => {
                picker.toggle_mark();
                PickerOutcome::Pending
            }
            KeyCode::Enter => picker.confirm(),
            KeyCode::Esc | KeyCode::Char('q') => picker.cancel(),
            _ => PickerOutcome::Pending,
        };
        app.finish_picker(outcome);
        return;
    }

    let step = app.seek_step_ms().min(i64::MAX as u64) as i64;
    let cmd = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('o') => Command::OpenPicker,
        KeyCode::Enter => Command::PlayCurrent,
        KeyCode::Char(' ') | KeyCode::Char('p') => Command::TogglePause,
        KeyCode::Char('l') => Command::Next,
        KeyCode::Char('h') => Command::Previous,
        KeyCode::Char('L') | KeyCode::Right => Command::SeekBy(step),
        KeyCode::Char('H') | KeyCode::Left => Command::SeekBy(-step),
        KeyCode::Char(c @ '0'..='9') => Command::SeekTenths(c as u8 - b'0'),
        KeyCode::Home => Command::SeekTo(0),
        _ => return,
    };
    app.push(cmd);
}
