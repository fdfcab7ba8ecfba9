//! Events screen - lists all events and opens the add-event form
//!
//! Rows come straight from the events table in storage order. There is no
//! edit or delete for events.

use crate::action::Action;
use crate::component::Component;
use crate::components::table;
use crate::model::Event;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const HEADERS: [&str; 6] = ["ID", "Title", "Date", "Time", "Venue", "Capacity"];

/// Events screen component - owns the row highlight
pub struct EventsComponent {
    pub list_state: ListState,
}

impl Default for EventsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn select_first(&mut self, events: &[Event]) {
        if events.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, events: &[Event]) {
        if !events.is_empty() {
            self.list_state.select(Some(events.len() - 1));
        }
    }

    pub fn next(&mut self, events: &[Event]) {
        if events.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % events.len()));
    }

    pub fn previous(&mut self, events: &[Event]) {
        if events.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            events.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    fn row_cells(event: &Event) -> Vec<String> {
        vec![
            event.event_id.to_string(),
            event.title.clone(),
            event.event_date.to_string(),
            event.event_time.to_string(),
            event.venue.clone(),
            event.capacity.to_string(),
        ]
    }

    /// Draw the events table
    pub fn draw_screen(&mut self, frame: &mut Frame, area: Rect, events: &[Event]) {
        let rows: Vec<Vec<String>> = events.iter().map(Self::row_cells).collect();
        let widths = table::column_widths(&HEADERS, &rows);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Events ({}) ", events.len()))
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

impl Component for EventsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('a') => Some(Action::OpenAddEvent),
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
