//! Notice dialog component for rejection messages
//!
//! Used for the duplicate-title notice and the empty-title rejection. The
//! message is passive: dismissing it never changes the task list.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Notice dialog component
pub struct ErrorDialog;

impl ErrorDialog {
    /// Render the notice dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(error_msg) = &app.error_message {
            let error_area = LayoutManager::centered_rect_lines(60, 7, f.area());
            f.render_widget(Clear, error_area);
            let display_text = format!("{error_msg}\n\nPress Enter or Esc to dismiss");
            let error_paragraph = Paragraph::new(display_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Notice")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(error_paragraph, error_area);
        }
    }
}
