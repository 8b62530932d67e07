//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{
    HINT_CONFIRMING, HINT_CREATING, HINT_EDITING, HINT_NORMAL, HINT_NORMAL_NO_EDIT,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with hints for the current mode
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.delete_confirmation.is_some() {
            HINT_CONFIRMING
        } else if app.creating_task {
            HINT_CREATING
        } else if app.edit.is_editing() {
            HINT_EDITING
        } else if app.behavior.allow_inline_edit {
            HINT_NORMAL
        } else {
            HINT_NORMAL_NO_EDIT
        };

        let status_color = if app.delete_confirmation.is_some() {
            Color::Red
        } else if app.creating_task || app.edit.is_editing() {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
