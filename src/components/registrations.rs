//! Registrations screen - per-event listing, register/delete, name search
//!
//! Owns the selected event, the search text, and the suggestion overlay as
//! explicit state. The table below shows either the selected event's
//! registrations or the latest global search results; whichever action ran
//! last wins.

use crate::action::Action;
use crate::component::Component;
use crate::components::table;
use crate::model::{EventChoice, RegistrationRow, StudentPick};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const HEADERS: [&str; 4] = ["Student ID", "Name", "Email", "Event Title"];

/// Registrations screen component
pub struct RegistrationsComponent {
    /// Index into the title-ordered event selector
    pub selected_event: usize,

    /// Row highlight for the registrations table
    pub list_state: ListState,

    /// Whether keystrokes edit the search text
    pub search_mode: bool,

    /// Current search text
    pub search_query: String,

    /// Suggestion overlay rows for the current search text
    pub suggestions: Vec<StudentPick>,

    /// Highlight inside the suggestion overlay
    pub suggestion_state: ListState,

    /// Whether the overlay is visible
    pub show_suggestions: bool,
}

impl Default for RegistrationsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationsComponent {
    pub fn new() -> Self {
        Self {
            selected_event: 0,
            list_state: ListState::default(),
            search_mode: false,
            search_query: String::new(),
            suggestions: Vec::new(),
            suggestion_state: ListState::default(),
            show_suggestions: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Event selector
    // ─────────────────────────────────────────────────────────────────────

    /// The selected event's id, or None when there are no events
    pub fn selected_event_id(&self, choices: &[EventChoice]) -> Option<i64> {
        choices.get(self.selected_event).map(|c| c.event_id)
    }

    pub fn next_event(&mut self, choices: &[EventChoice]) {
        if choices.is_empty() {
            return;
        }
        self.selected_event = (self.selected_event + 1) % choices.len();
    }

    pub fn prev_event(&mut self, choices: &[EventChoice]) {
        if choices.is_empty() {
            return;
        }
        self.selected_event = if self.selected_event == 0 {
            choices.len() - 1
        } else {
            self.selected_event - 1
        };
    }

    /// Keep the selector index valid after the choice list was reloaded
    pub fn clamp_event(&mut self, choices: &[EventChoice]) {
        if choices.is_empty() {
            self.selected_event = 0;
        } else if self.selected_event >= choices.len() {
            self.selected_event = choices.len() - 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Table rows
    // ─────────────────────────────────────────────────────────────────────

    pub fn selected_row<'a>(&self, rows: &'a [RegistrationRow]) -> Option<&'a RegistrationRow> {
        rows.get(self.list_state.selected()?)
    }

    pub fn select_first(&mut self, rows: &[RegistrationRow]) {
        if rows.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, rows: &[RegistrationRow]) {
        if !rows.is_empty() {
            self.list_state.select(Some(rows.len() - 1));
        }
    }

    pub fn next(&mut self, rows: &[RegistrationRow]) {
        if rows.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % rows.len()));
    }

    pub fn previous(&mut self, rows: &[RegistrationRow]) {
        if rows.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            rows.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search & suggestions
    // ─────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.hide_suggestions();
    }

    /// Replace the overlay content; empty input hides it
    pub fn set_suggestions(&mut self, suggestions: Vec<StudentPick>) {
        self.show_suggestions = !suggestions.is_empty();
        self.suggestions = suggestions;
        self.suggestion_state.select(None);
    }

    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.suggestions.clear();
        self.suggestion_state.select(None);
    }

    pub fn highlighted_suggestion(&self) -> Option<&StudentPick> {
        self.suggestions.get(self.suggestion_state.selected()?)
    }

    pub fn suggestion_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let next = match self.suggestion_state.selected() {
            Some(i) => (i + 1) % self.suggestions.len(),
            None => 0,
        };
        self.suggestion_state.select(Some(next));
    }

    pub fn suggestion_up(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let prev = match self.suggestion_state.selected() {
            Some(0) | None => self.suggestions.len() - 1,
            Some(i) => i - 1,
        };
        self.suggestion_state.select(Some(prev));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Draw the selector, the search box, the table, and the overlay
    pub fn draw_screen(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        choices: &[EventChoice],
        rows: &[RegistrationRow],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        self.draw_event_selector(frame, controls[0], choices);
        self.draw_search_box(frame, controls[1]);
        self.draw_table(frame, chunks[1], rows);

        if self.show_suggestions {
            self.draw_suggestions(frame, area, controls[1]);
        }
    }

    fn draw_event_selector(&self, frame: &mut Frame, area: Rect, choices: &[EventChoice]) {
        let title = choices
            .get(self.selected_event)
            .map(|c| c.title.as_str())
            .unwrap_or("no events");

        let line = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  ({}/{})", self.selected_event + 1, choices.len().max(1)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Event ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_search_box(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.search_mode {
            (
                format!("{}_", self.search_query),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else if self.search_query.is_empty() {
            (
                "press / to search by name".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.search_query.clone(), Style::default().fg(Color::Gray))
        };

        let border = if self.search_mode {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(text, style))).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search Name ")
                .border_style(border),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect, rows: &[RegistrationRow]) {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.student_id.to_string(),
                    r.name.clone(),
                    r.email.clone(),
                    r.event_title.clone(),
                ]
            })
            .collect();
        let widths = table::column_widths(&HEADERS, &cells);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Registrations ({}) ", rows.len()))
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

        let items: Vec<ListItem> = cells
            .iter()
            .map(|c| ListItem::new(table::row_line(c, &widths)))
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

    /// Suggestion popup anchored under the search box
    fn draw_suggestions(&mut self, frame: &mut Frame, area: Rect, search_box: Rect) {
        let height = (self.suggestions.len() as u16 + 2).min(10);
        let y = search_box.y + search_box.height;
        if y >= area.y + area.height {
            return;
        }
        let height = height.min(area.y + area.height - y);
        let popup = Rect::new(search_box.x, y, search_box.width, height);

        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|s| ListItem::new(Line::from(Span::raw(s.label()))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Matches (↓/↑ pick, Enter search) ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, popup, &mut self.suggestion_state);
    }
}

impl Component for RegistrationsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevEvent),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextEvent),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('a') => Some(Action::OpenRegisterDialog),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::OpenDeleteConfirm),
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
