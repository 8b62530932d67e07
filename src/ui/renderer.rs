//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{DeleteConfirmationDialog, ErrorDialog},
    Header, HelpPanel, StatusBar, TaskInput, TasksList,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;

/// Run the main TUI application
pub fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let mut app = App::new(&config);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so resizes repaint promptly
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app)?;
                }
                Event::Resize(_, _) => {
                    // Next draw picks up the new size
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());

    Header::render(f, chunks[0], app);
    TaskInput::render(f, chunks[1], app);
    TasksList::render(f, chunks[2], app);
    StatusBar::render(f, chunks[3], app);

    // Overlays: notice dialog has priority over the confirmation
    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    } else if app.delete_confirmation.is_some() {
        DeleteConfirmationDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
