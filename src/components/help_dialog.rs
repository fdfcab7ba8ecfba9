//! Help dialog showing all keyboard shortcuts

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

/// Key-binding overlay
#[derive(Default)]
pub struct HelpDialog;

fn binding(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:9}", key),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let lines = vec![
            Line::from(""),
            section("All screens"),
            binding("Tab", "Next screen"),
            binding("S-Tab", "Previous screen"),
            binding("j/k", "Move row highlight"),
            binding("g/G", "First / last row"),
            binding("r", "Reload from the database"),
            binding("q", "Quit (with confirmation)"),
            Line::from(""),
            section("Events"),
            binding("a", "Add event"),
            Line::from(""),
            section("Students"),
            binding("a", "Add student"),
            Line::from(""),
            section("Registrations"),
            binding("h/l", "Previous / next event"),
            binding("a", "Register a student"),
            binding("d", "Delete the highlighted registration"),
            binding("/", "Search registrations by student name"),
            Line::from(""),
            Line::from(Span::styled(
                " Esc/q/? closes this overlay",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let height = (lines.len() as u16 + 2).min(area.height);
        let popup_area = centered_popup(area, 52, height);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
