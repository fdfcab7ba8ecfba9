//! Students screen - lists all students and opens the add-student form
//!
//! The visible ID column is a display-only sequence number assigned after
//! sorting by name; the real student_id stays on the row model. The tests
//! assert the difference between the two so it cannot pass unnoticed.

use crate::action::Action;
use crate::component::Component;
use crate::components::table;
use crate::model::Student;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const HEADERS: [&str; 3] = ["ID", "Name", "Email"];

/// Students screen component - owns the row highlight
pub struct StudentsComponent {
    pub list_state: ListState,
}

impl Default for StudentsComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Name-sorted view with display-only sequence numbers starting at 1
pub fn display_rows(students: &[Student]) -> Vec<(usize, &Student)> {
    let mut sorted: Vec<&Student> = students.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, s)| (i + 1, s))
        .collect()
}

impl StudentsComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn select_first(&mut self, students: &[Student]) {
        if students.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, students: &[Student]) {
        if !students.is_empty() {
            self.list_state.select(Some(students.len() - 1));
        }
    }

    pub fn next(&mut self, students: &[Student]) {
        if students.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % students.len()));
    }

    pub fn previous(&mut self, students: &[Student]) {
        if students.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            students.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    /// Draw the students table
    pub fn draw_screen(&mut self, frame: &mut Frame, area: Rect, students: &[Student]) {
        let rows: Vec<Vec<String>> = display_rows(students)
            .into_iter()
            .map(|(seq, student)| {
                vec![seq.to_string(), student.name.clone(), student.email.clone()]
            })
            .collect();
        let widths = table::column_widths(&HEADERS, &rows);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Students ({}) ", students.len()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let header = Paragraph::new(vec![
            table::header_line(&HEADERS, &widths),
            table::separator_line(&widths),
        ]);
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = rows
            .iter()
            .map(|cells| ListItem::new(table::row_line(cells, &widths)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}

impl Component for StudentsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('a') => Some(Action::OpenAddStudent),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_screen which takes the loaded rows
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rows_sorted_by_name_and_renumbered() {
        let students = vec![
            Student {
                student_id: 42,
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
            },
            Student {
                student_id: 17,
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
            },
        ];

        let rows = display_rows(&students);
        assert_eq!(rows[0].1.name, "Ann");
        assert_eq!(rows[1].1.name, "Bob");
        // Displayed sequence numbers are 1, 2 regardless of the identifiers
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[1].0, 2);
        // The quirk: the visible number is NOT the stored identifier,
        // which stays available on the row model
        assert_ne!(rows[0].0 as i64, rows[0].1.student_id);
        assert_eq!(rows[0].1.student_id, 17);
        assert_eq!(rows[1].1.student_id, 42);
    }

    #[test]
    fn test_display_rows_empty() {
        assert!(display_rows(&[]).is_empty());
    }
}
