//! Tasks list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::constants::EMPTY_LIST_MESSAGE;
use crate::tasks::Task;

/// Tasks list component
pub struct TasksList;

impl TasksList {
    /// Render the tasks list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Tasks ")
            .title_alignment(Alignment::Center);

        if app.store.is_empty() {
            let empty_list = List::new(vec![ListItem::new(Span::styled(
                EMPTY_LIST_MESSAGE,
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);

            f.render_widget(empty_list, area);
        } else {
            let items: Vec<ListItem> = app
                .store
                .tasks()
                .iter()
                .enumerate()
                .map(|(index, task)| Self::create_task_item(task, index, app))
                .collect();

            let tasks_list = List::new(items).block(block).highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );

            f.render_stateful_widget(tasks_list, area, &mut app.task_list_state.clone());
        }
    }

    /// Create a single task row
    fn create_task_item<'a>(task: &'a Task, index: usize, app: &'a App) -> ListItem<'a> {
        let is_selected = index == app.selected_task_index;

        let status_icon = if task.done {
            app.icons.task_done()
        } else {
            app.icons.task_pending()
        };
        let status_style = if task.done {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let mut line_spans = vec![Span::styled(format!("{status_icon} "), status_style)];

        // The row being edited shows its buffer with a cursor instead of the
        // stored title
        if let Some(buffer) = app.edit.buffer_for(task.id) {
            line_spans.push(Span::styled(
                format!("{buffer}█"),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            let title_style = if task.done {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            line_spans.push(Span::styled(task.title.as_str(), title_style));
        }

        let item_style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        ListItem::new(Line::from(line_spans)).style(item_style)
    }
}
