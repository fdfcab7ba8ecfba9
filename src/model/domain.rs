//! Domain state - business/data state separate from UI concerns

use chrono::{NaiveDate, NaiveTime};

/// A row from the `events` table
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub capacity: i64,
}

/// Field values for an event insert, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub capacity: i64,
}

/// A row from the `students` table
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub email: String,
}

/// An event as shown in the registrations selector (ordered by title)
#[derive(Debug, Clone, PartialEq)]
pub struct EventChoice {
    pub event_id: i64,
    pub title: String,
}

/// A student offered in the register picker or the search suggestions
#[derive(Debug, Clone, PartialEq)]
pub struct StudentPick {
    pub student_id: i64,
    pub name: String,
}

impl StudentPick {
    /// Display form used by the picker and the suggestion overlay
    pub fn label(&self) -> String {
        format!("{} (ID: {})", self.name, self.student_id)
    }
}

/// A registration joined with its student and event title
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRow {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub event_title: String,
}

/// Domain state containing the rows currently loaded for each screen
#[derive(Debug, Default)]
pub struct DomainState {
    /// All events, natural storage order (events screen)
    pub events: Vec<Event>,

    /// All students, sorted by name ascending (students screen)
    pub students: Vec<Student>,

    /// Events ordered by title (registrations selector)
    pub event_choices: Vec<EventChoice>,

    /// Rows visible in the registrations table - either the selected
    /// event's registrations or the latest global search results
    pub registrations: Vec<RegistrationRow>,
}

impl DomainState {
    pub fn new() -> Self {
        Self::default()
    }
}
