//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, _app: &App) {
        let screen_width = f.area().width;
        let screen_height = f.area().height;

        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen_width, screen_height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
TASKPAD - Terminal To-Do List
=============================

NAVIGATION
----------
j/k or ↓/↑  Navigate tasks (down/up)
Esc         Cancel action or close dialogs

TASK MANAGEMENT
---------------
a           Add a new task
Space/Enter Toggle task completion
e           Edit the selected task in place
d           Delete the selected task
Ctrl+T      Toggle completion while editing

WHILE TYPING
------------
Enter       Submit (add task / save edit)
Esc         Cancel (discards the typed text)
Backspace   Delete the last character

GENERAL CONTROLS
----------------
?           Toggle this help panel
q / Ctrl+C  Quit application
";

        let help_paragraph = Paragraph::new(help_content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press '?', 'q' or Esc to close ")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        f.render_widget(help_paragraph, help_area);
    }
}
