mod app;
mod config;
mod engine;
mod error;
mod picker;
mod player;
mod playlist;
mod runtime;
mod time;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
