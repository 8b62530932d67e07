//! New-task input component

use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{INPUT_PLACEHOLDER, INPUT_TITLE};

/// New-task input row, always visible below the header
pub struct TaskInput;

impl TaskInput {
    /// Render the input row: the buffer with a block cursor while active,
    /// a gray hint otherwise
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let (text, text_style, border_style) = if app.creating_task {
            (
                format!("{}█", app.new_task_title),
                Style::default().fg(Color::White),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (
                INPUT_PLACEHOLDER.to_string(),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        let input = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(INPUT_TITLE)
                    .border_style(border_style),
            )
            .style(text_style);

        f.render_widget(input, area);
    }
}
