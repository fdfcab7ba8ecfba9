//! Add-student form dialog
//!
//! Format checks happen here; the duplicate-email check needs the database
//! and is run by the app when the form is confirmed.

use crate::action::Action;
use crate::component::Component;
use crate::components::form::{draw_form, FormField, FormState};
use crate::model::validate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

const NAME: usize = 0;
const EMAIL: usize = 1;

/// Modal form for inserting one student
pub struct AddStudentDialog {
    pub form: FormState,
}

impl Default for AddStudentDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddStudentDialog {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::new("Name:", ""),
                FormField::new("Email:", "Enter valid email"),
            ]),
        }
    }

    /// Clear the form for a fresh open
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Check the fields; on failure set the inline error and return None
    pub fn validate(&mut self) -> Option<(String, String)> {
        let name = self.form.value(NAME).trim().to_string();
        let email = self.form.value(EMAIL).trim().to_string();

        let checked = validate::require_non_empty([name.as_str(), email.as_str()])
            .and_then(|()| validate::validate_email(&email));

        match checked {
            Ok(()) => Some((name, email)),
            Err(e) => {
                self.form.error = Some(e.to_string());
                None
            }
        }
    }

    /// Surface the duplicate-email rejection inside the open form
    pub fn set_duplicate_error(&mut self) {
        self.form.error = Some("Student with this email already exists.".to_string());
    }
}

impl Component for AddStudentDialog {
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
        draw_form(frame, area, "Add New Student", &self.form);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_name_and_email() {
        let mut dialog = AddStudentDialog::new();
        dialog.form.fields[NAME].value = "Ann".to_string();
        dialog.form.fields[EMAIL].value = " a@x.com ".to_string();

        let (name, email) = dialog.validate().expect("valid form");
        assert_eq!(name, "Ann");
        assert_eq!(email, "a@x.com");
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut dialog = AddStudentDialog::new();
        dialog.form.fields[NAME].value = "Ann".to_string();
        assert!(dialog.validate().is_none());
        assert_eq!(
            dialog.form.error.as_deref(),
            Some("All fields are required.")
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut dialog = AddStudentDialog::new();
        dialog.form.fields[NAME].value = "Ann".to_string();
        dialog.form.fields[EMAIL].value = "not-an-email".to_string();
        assert!(dialog.validate().is_none());
        assert_eq!(
            dialog.form.error.as_deref(),
            Some("Invalid email format. Please enter a valid email.")
        );
    }
}
