//! Register-student candidate picker
//!
//! Offers only students with no registration for the selected event; the
//! app computes that set (anti-join) before opening this dialog, so a
//! confirmed pick can be inserted directly.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::StudentPick;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Candidate picker dialog
pub struct RegisterDialog {
    /// Students not yet registered for the selected event
    pub candidates: Vec<StudentPick>,
    /// Picker highlight
    pub list_state: ListState,
    /// Title of the event being registered for
    pub event_title: String,
}

impl Default for RegisterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterDialog {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            list_state: ListState::default(),
            event_title: String::new(),
        }
    }

    /// Load the candidate set for a fresh open; the first row is highlighted
    pub fn set_candidates(&mut self, candidates: Vec<StudentPick>, event_title: &str) {
        self.candidates = candidates;
        self.event_title = event_title.to_string();
        self.list_state
            .select(if self.candidates.is_empty() { None } else { Some(0) });
    }

    pub fn selected(&self) -> Option<&StudentPick> {
        self.candidates.get(self.list_state.selected()?)
    }

    fn select_next(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((current + 1) % self.candidates.len()));
    }

    fn select_prev(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            self.candidates.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }
}

impl Component for RegisterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = (self.candidates.len() as u16 + 7).min(18);
        let popup_area = centered_popup(area, 50, height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Student for ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.event_title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                .title(" Register Student ")
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .candidates
            .iter()
            .map(|c| ListItem::new(Line::from(Span::raw(c.label()))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::RIGHT)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Register  "),
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Navigate  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks() -> Vec<StudentPick> {
        vec![
            StudentPick {
                student_id: 1,
                name: "Ann".to_string(),
            },
            StudentPick {
                student_id: 2,
                name: "Bob".to_string(),
            },
        ]
    }

    #[test]
    fn test_first_candidate_preselected() {
        let mut dialog = RegisterDialog::new();
        dialog.set_candidates(picks(), "Orientation");
        assert_eq!(dialog.selected().unwrap().name, "Ann");
    }

    #[test]
    fn test_selection_wraps() {
        let mut dialog = RegisterDialog::new();
        dialog.set_candidates(picks(), "Orientation");
        dialog.select_next();
        assert_eq!(dialog.selected().unwrap().name, "Bob");
        dialog.select_next();
        assert_eq!(dialog.selected().unwrap().name, "Ann");
        dialog.select_prev();
        assert_eq!(dialog.selected().unwrap().name, "Bob");
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        let mut dialog = RegisterDialog::new();
        dialog.set_candidates(Vec::new(), "Orientation");
        assert!(dialog.selected().is_none());
    }
}
