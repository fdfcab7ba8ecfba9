//! Yes/no confirmation dialog
//!
//! One component serves both confirmations in the app: quitting and
//! deleting a registration. The app decides what a confirm means from the
//! modal that is open.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Confirmation dialog; the question is passed in at draw time
pub struct ConfirmDialog;

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self
    }
}

impl ConfirmDialog {
    /// Draw the quit confirmation
    pub fn draw_quit(&self, frame: &mut Frame, area: Rect) {
        self.draw_question(frame, area, " Quit? ", "Are you sure you want to quit?");
    }

    /// Draw the delete-registration confirmation
    pub fn draw_delete(&self, frame: &mut Frame, area: Rect, student_name: &str) {
        self.draw_question(
            frame,
            area,
            " Confirm Delete ",
            &format!("Delete the registration for {}?", student_name),
        );
    }

    fn draw_question(&self, frame: &mut Frame, area: Rect, title: &str, question: &str) {
        let width = (question.len() as u16 + 6).clamp(40, area.width);
        let popup_area = centered_popup(area, width, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                question.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Yes  "),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("No, cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(title.to_string())
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmModal)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_quit(frame, area);
        Ok(())
    }
}
