//! Shared form state for the insert dialogs
//!
//! Both add dialogs are a stack of labeled text fields with one focused
//! field, an inline error line, and the same Enter/Esc/Tab handling. The
//! field plumbing lives here; validation stays with each dialog.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One labeled text field
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    /// Grayed hint shown next to the label, e.g. a format example
    pub hint: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(label: &'static str, hint: &'static str) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
        }
    }
}

/// Field list, focus index, and inline error of an open form
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focus: 0,
            error: None,
        }
    }

    /// Clear all values, the focus, and any error
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
        self.error = None;
    }

    pub fn value(&self, index: usize) -> &str {
        &self.fields[index].value
    }

    /// Type into the focused field; editing clears the error line
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
        self.error = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            self.fields.len() - 1
        } else {
            self.focus - 1
        };
    }
}

/// Height a form popup needs for its fields plus chrome
pub fn form_height(field_count: usize) -> u16 {
    field_count as u16 + 7
}

/// Draw a form as a centered popup
pub fn draw_form(frame: &mut Frame, area: Rect, title: &str, form: &FormState) {
    let popup_area = super::centered_popup(area, 56, form_height(form.fields.len()));
    frame.render_widget(Clear, popup_area);

    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let cursor = if focused { "_" } else { "" };
        let mut spans = vec![
            Span::styled(
                format!(" {:label_width$} ", field.label),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}{}", field.value, cursor),
                if focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
        ];
        if field.value.is_empty() && !field.hint.is_empty() && !focused {
            spans.push(Span::styled(
                format!("({})", field.hint),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    if let Some(ref error) = form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(
            " Enter ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Save  "),
        Span::styled(
            " Tab ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Next field  "),
        Span::styled(
            " Esc ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Cancel"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_field_form() -> FormState {
        FormState::new(vec![
            FormField::new("Name:", ""),
            FormField::new("Email:", "user@example.com"),
        ])
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut form = two_field_form();
        form.input('A');
        form.focus_next();
        form.input('b');
        assert_eq!(form.value(0), "A");
        assert_eq!(form.value(1), "b");
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = two_field_form();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, 0);
        form.focus_prev();
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = two_field_form();
        form.error = Some("All fields are required.".to_string());
        form.input('x');
        assert!(form.error.is_none());
    }

    #[test]
    fn test_reset_clears_values_focus_and_error() {
        let mut form = two_field_form();
        form.input('x');
        form.focus_next();
        form.error = Some("boom".to_string());
        form.reset();
        assert_eq!(form.value(0), "");
        assert_eq!(form.focus, 0);
        assert!(form.error.is_none());
    }
}
