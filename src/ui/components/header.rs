//! Header component with the task counter

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::App;

/// Header component
pub struct Header;

impl Header {
    /// Render the header: app name on the left side of the line, task count next to it
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let count = app.store.len();
        let counter_text = if count == 1 {
            "1 task".to_string()
        } else {
            format!("{count} tasks")
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} taskpad", app.icons.tasks_title()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(counter_text, Style::default().fg(Color::Gray)),
        ]);

        let header = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);

        f.render_widget(header, area);
    }
}
