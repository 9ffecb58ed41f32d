use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};

mod app;
mod config;
mod engine;
mod input;
mod render;
mod ticker;

use app::Game;
use config::{LOG_FILE, TICK_INTERVAL};
use ticker::Ticker;

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)
        .map_err(io::Error::other)?;

    info!("Starting Snekgrid");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Stopped Snekgrid");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let mut game = Game::new();
    let mut ticker = Ticker::new(TICK_INTERVAL);
    ticker.bind(|game: &mut Game| game.update());

    while ticker.is_running() {
        terminal.draw(|f| game.render(f))?;

        // Every press until the next tick is applied; the last direction wins
        if event::poll(ticker.time_until_due())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    game.handle_input(key);
                }
            }
        }

        ticker.fire_if_due(&mut game);

        if game.should_exit() {
            ticker.stop();
        }
    }

    Ok(())
}
