mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fortuna_nominatim::NominatimClient;
use ratatui::prelude::*;

pub use app::WheelApp;

use crate::error::FortunaError;
use crate::locate::GeoLocator;

pub async fn run(
    client: NominatimClient,
    locator: GeoLocator,
    seed_options: Vec<String>,
) -> Result<(), FortunaError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = WheelApp::new(client, locator, seed_options);

    // Run event loop
    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Print the final winner, if the app quit with one on screen
    if let Some(winner) = app.engine.winner() {
        println!("命運的選擇：{}", winner.text);
    }

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut WheelApp,
) -> Result<(), FortunaError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events with timeout to allow checking async completions
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        // Check for async completions
        app.poll_locate();
        app.poll_search();
        app.poll_settlement();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
