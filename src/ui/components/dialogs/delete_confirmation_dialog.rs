//! Delete confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use crate::constants::{DELETE_PREVIEW_MAX_CHARS, TITLE_CONFIRM_DELETE};

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(task_id) = app.delete_confirmation {
            if let Some(task) = app.store.get(task_id) {
                let confirm_area = LayoutManager::centered_rect(60, 25, f.area());
                f.render_widget(Clear, confirm_area);

                let task_preview = if task.title.chars().count() > DELETE_PREVIEW_MAX_CHARS {
                    let truncated: String =
                        task.title.chars().take(DELETE_PREVIEW_MAX_CHARS - 3).collect();
                    format!("{truncated}...")
                } else {
                    task.title.clone()
                };

                let confirm_text = format!(
                    "Delete task?\n\n\"{task_preview}\"\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
                );

                let confirm_paragraph = Paragraph::new(confirm_text)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!("{} {}", app.icons.warning(), TITLE_CONFIRM_DELETE))
                            .title_alignment(Alignment::Center),
                    )
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                f.render_widget(confirm_paragraph, confirm_area);
            }
        }
    }
}
