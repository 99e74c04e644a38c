use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::engine::RodioEngine;
use crate::picker::FsPermissionGate;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);

    let engine = RodioEngine::new()?;
    let mut app = App::new(engine, Box::new(FsPermissionGate), &settings);

    // Paths on the command line count as an initial pick.
    let picked: Vec<String> = env::args().skip(1).collect();
    info!(count = picked.len(), "starting");
    app.add_uris(picked);
    app.run_pending();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    // Release the output handle before the terminal is handed back.
    app.controller.release();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutdown");
    run_result
}
