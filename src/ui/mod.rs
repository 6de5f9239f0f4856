pub mod app;
pub mod drawer;
pub mod render;
pub mod section_input;

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::application::section_service::SectionService;
use app::App;

/// Takes over the terminal and runs the UI until the user quits.
pub async fn run<S: SectionService>(service: S) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(service)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<S: SectionService>(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: App<S>) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    terminal.draw(|f| render::draw(f, &app))?;
    app.load().await;

    while !app.should_quit() {
        terminal.draw(|f| render::draw(f, &app))?;
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Ignore repeats and releases so typed characters are not doubled.
                if key.kind != KeyEventKind::Press { continue; }
                app.handle_key(key).await;
            }
        }
    }
    tracing::info!("quit");
    Ok(())
}
