//! Add-event form dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::form::{draw_form, FormField, FormState};
use crate::model::validate;
use crate::model::NewEvent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

const TITLE: usize = 0;
const DATE: usize = 1;
const TIME: usize = 2;
const VENUE: usize = 3;
const CAPACITY: usize = 4;

/// Modal form for inserting one event
pub struct AddEventDialog {
    pub form: FormState,
}

impl Default for AddEventDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddEventDialog {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::new("Event Title:", ""),
                FormField::new("Event Date:", "yyyy-MM-dd"),
                FormField::new("Event Time:", "HH:mm:ss"),
                FormField::new("Venue:", ""),
                FormField::new("Capacity:", ""),
            ]),
        }
    }

    /// Clear the form for a fresh open
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Check all fields; on failure set the inline error and return None
    pub fn validate(&mut self) -> Option<NewEvent> {
        match self.parse_form() {
            Ok(event) => Some(event),
            Err(e) => {
                self.form.error = Some(e.to_string());
                None
            }
        }
    }

    fn parse_form(&self) -> Result<NewEvent, validate::ValidationError> {
        validate::require_non_empty(self.form.fields.iter().map(|f| f.value.as_str()))?;
        let capacity = validate::parse_capacity(self.form.value(CAPACITY))?;
        let event_date = validate::parse_event_date(self.form.value(DATE))?;
        let event_time = validate::parse_event_time(self.form.value(TIME))?;
        Ok(NewEvent {
            title: self.form.value(TITLE).trim().to_string(),
            event_date,
            event_time,
            venue: self.form.value(VENUE).trim().to_string(),
            capacity,
        })
    }
}

impl Component for AddEventDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Char(c) => {
                self.form.input(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_form(frame, area, "Add New Event", &self.form);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn filled_dialog() -> AddEventDialog {
        let mut dialog = AddEventDialog::new();
        dialog.form.fields[TITLE].value = "Orientation".to_string();
        dialog.form.fields[DATE].value = "2026-09-01".to_string();
        dialog.form.fields[TIME].value = "18:00:00".to_string();
        dialog.form.fields[VENUE].value = "Main Hall".to_string();
        dialog.form.fields[CAPACITY].value = "120".to_string();
        dialog
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let mut dialog = filled_dialog();
        let event = dialog.validate().expect("valid form");
        assert_eq!(event.title, "Orientation");
        assert_eq!(
            event.event_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
        assert_eq!(event.event_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(event.capacity, 120);
        assert!(dialog.form.error.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let mut dialog = filled_dialog();
        dialog.form.fields[VENUE].value.clear();
        assert!(dialog.validate().is_none());
        assert_eq!(
            dialog.form.error.as_deref(),
            Some("All fields are required.")
        );
    }

    #[test]
    fn test_validate_rejects_non_numeric_capacity() {
        let mut dialog = filled_dialog();
        dialog.form.fields[CAPACITY].value = "lots".to_string();
        assert!(dialog.validate().is_none());
        assert_eq!(
            dialog.form.error.as_deref(),
            Some("Capacity must be a valid number.")
        );
    }

    #[test]
    fn test_validate_rejects_malformed_date_and_time() {
        let mut dialog = filled_dialog();
        dialog.form.fields[DATE].value = "01/09/2026".to_string();
        assert!(dialog.validate().is_none());

        let mut dialog = filled_dialog();
        dialog.form.fields[TIME].value = "6pm".to_string();
        assert!(dialog.validate().is_none());
    }
}
