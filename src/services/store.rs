//! SQLite storage accessor
//!
//! Every operation opens a fresh connection, runs its parameterized
//! statement(s), and lets the connection drop on every exit path. There is
//! no pooling, no retry, and no shared handle - the UI event loop is
//! single-threaded and each screen action pays for its own connection.

use crate::model::{Event, EventChoice, NewEvent, RegistrationRow, Student, StudentPick};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Storage errors, split by the step that failed
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },

    #[error("database query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS events (
    event_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT    NOT NULL,
    event_date TEXT    NOT NULL,
    event_time TEXT    NOT NULL,
    venue      TEXT    NOT NULL,
    capacity   INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS students (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT    NOT NULL,
    email      TEXT    NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS registrations (
    student_id INTEGER NOT NULL REFERENCES students(student_id),
    event_id   INTEGER NOT NULL REFERENCES events(event_id),
    PRIMARY KEY (student_id, event_id)
);
";

/// Handle on the database location; connections are opened per operation
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection for the duration of one operation
    fn open(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.db_path).map_err(|source| StoreError::Open {
            path: self.db_path.display().to_string(),
            source,
        })
    }

    /// Create the three tables on first run
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %self.db_path.display(), "schema ensured");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────

    /// All events in natural storage order
    pub fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT event_id, title, event_date, event_time, venue, capacity FROM events",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Event {
                    event_id: row.get(0)?,
                    title: row.get(1)?,
                    event_date: row.get(2)?,
                    event_time: row.get(3)?,
                    venue: row.get(4)?,
                    capacity: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn insert_event(&self, event: &NewEvent) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO events (title, event_date, event_time, venue, capacity)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.title,
                event.event_date,
                event.event_time,
                event.venue,
                event.capacity
            ],
        )?;
        Ok(())
    }

    /// Events ordered by title, for the registrations selector
    pub fn events_by_title(&self) -> Result<Vec<EventChoice>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare("SELECT event_id, title FROM events ORDER BY title")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EventChoice {
                    event_id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Students
    // ─────────────────────────────────────────────────────────────────────

    /// All students in natural storage order (the students screen re-sorts
    /// display-side)
    pub fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare("SELECT student_id, name, email FROM students")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Student {
                    student_id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Duplicate check used before inserting a student
    pub fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let conn = self.open()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM students WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn insert_student(&self, name: &str, email: &str) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO students (name, email) VALUES (?1, ?2)",
            params![name, email],
        )?;
        Ok(())
    }

    /// Students whose name contains `query`, case-insensitively, in storage
    /// order - feeds the search suggestion overlay
    pub fn student_suggestions(&self, query: &str) -> Result<Vec<StudentPick>, StoreError> {
        let conn = self.open()?;
        let mut stmt =
            conn.prepare("SELECT student_id, name FROM students WHERE LOWER(name) LIKE ?1")?;
        let pattern = format!("%{}%", query.to_lowercase());
        let rows = stmt
            .query_map(params![pattern], |row| {
                Ok(StudentPick {
                    student_id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Registrations
    // ─────────────────────────────────────────────────────────────────────

    /// Registrations for one event, ordered by student name
    pub fn registrations_for_event(
        &self,
        event_id: i64,
    ) -> Result<Vec<RegistrationRow>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT s.student_id, s.name, s.email, e.title
             FROM students s
             JOIN registrations r ON s.student_id = r.student_id
             JOIN events e ON r.event_id = e.event_id
             WHERE r.event_id = ?1
             ORDER BY s.name",
        )?;
        let rows = stmt
            .query_map(params![event_id], Self::registration_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Global search across all events: registrations whose student name
    /// contains `query` case-insensitively, ordered by event title
    pub fn search_registrations(&self, query: &str) -> Result<Vec<RegistrationRow>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT s.student_id, s.name, s.email, e.title
             FROM students s
             JOIN registrations r ON s.student_id = r.student_id
             JOIN events e ON r.event_id = e.event_id
             WHERE LOWER(s.name) LIKE ?1
             ORDER BY e.title",
        )?;
        let pattern = format!("%{}%", query.to_lowercase());
        let rows = stmt
            .query_map(params![pattern], Self::registration_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Anti-join: students with no registration row for `event_id`
    pub fn unregistered_students(&self, event_id: i64) -> Result<Vec<StudentPick>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT student_id, name FROM students
             WHERE student_id NOT IN
               (SELECT student_id FROM registrations WHERE event_id = ?1)",
        )?;
        let rows = stmt
            .query_map(params![event_id], |row| {
                Ok(StudentPick {
                    student_id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn register(&self, student_id: i64, event_id: i64) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO registrations (student_id, event_id) VALUES (?1, ?2)",
            params![student_id, event_id],
        )?;
        Ok(())
    }

    pub fn delete_registration(&self, student_id: i64, event_id: i64) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute(
            "DELETE FROM registrations WHERE student_id = ?1 AND event_id = ?2",
            params![student_id, event_id],
        )?;
        Ok(())
    }

    fn registration_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RegistrationRow> {
        Ok(RegistrationRow {
            student_id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            event_title: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().join("campus.db"));
        store.ensure_schema().expect("schema");
        (dir, store)
    }

    fn sample_event(title: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            venue: "Main Hall".to_string(),
            capacity: 100,
        }
    }

    fn add_student(store: &Store, name: &str, email: &str) -> i64 {
        store.insert_student(name, email).expect("insert student");
        store
            .list_students()
            .unwrap()
            .into_iter()
            .find(|s| s.email == email)
            .unwrap()
            .student_id
    }

    fn add_event(store: &Store, title: &str) -> i64 {
        store.insert_event(&sample_event(title)).expect("insert event");
        store
            .list_events()
            .unwrap()
            .into_iter()
            .find(|e| e.title == title)
            .unwrap()
            .event_id
    }

    #[test]
    fn test_empty_events_table_lists_nothing() {
        let (_dir, store) = test_store();
        assert!(store.list_events().unwrap().is_empty());
    }

    #[test]
    fn test_insert_event_round_trip() {
        let (_dir, store) = test_store();
        store.insert_event(&sample_event("Orientation")).unwrap();

        let events = store.list_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Orientation");
        assert_eq!(
            events[0].event_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
        assert_eq!(
            events[0].event_time,
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert_eq!(events[0].capacity, 100);
    }

    #[test]
    fn test_events_by_title_is_title_ordered() {
        let (_dir, store) = test_store();
        add_event(&store, "Workshop");
        add_event(&store, "Career Fair");
        add_event(&store, "Hackathon");

        let titles: Vec<String> = store
            .events_by_title()
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, ["Career Fair", "Hackathon", "Workshop"]);
    }

    #[test]
    fn test_email_exists_detects_duplicates() {
        let (_dir, store) = test_store();
        add_student(&store, "Ann", "a@x.com");

        assert!(store.email_exists("a@x.com").unwrap());
        assert!(!store.email_exists("b@x.com").unwrap());
    }

    #[test]
    fn test_duplicate_email_flow_leaves_count_unchanged() {
        let (_dir, store) = test_store();
        add_student(&store, "Ann", "a@x.com");
        let before = store.list_students().unwrap().len();

        // The add flow checks first and never inserts on a duplicate.
        if !store.email_exists("a@x.com").unwrap() {
            store.insert_student("Ann Again", "a@x.com").unwrap();
        }

        assert_eq!(store.list_students().unwrap().len(), before);
    }

    #[test]
    fn test_student_suggestions_match_case_insensitively_in_storage_order() {
        let (_dir, store) = test_store();
        add_student(&store, "Ann", "ann@x.com");
        add_student(&store, "Bob", "bob@x.com");
        add_student(&store, "Anders", "anders@x.com");

        let names: Vec<String> = store
            .student_suggestions("an")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Ann", "Anders"]);

        // Upper-case query matches the same rows
        let upper: Vec<String> = store
            .student_suggestions("AN")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(upper, ["Ann", "Anders"]);
    }

    #[test]
    fn test_register_removes_student_from_candidates() {
        let (_dir, store) = test_store();
        let event = add_event(&store, "Orientation");
        let ann = add_student(&store, "Ann", "a@x.com");
        let bob = add_student(&store, "Bob", "b@x.com");

        store.register(ann, event).unwrap();

        let candidates: Vec<i64> = store
            .unregistered_students(event)
            .unwrap()
            .into_iter()
            .map(|p| p.student_id)
            .collect();
        assert_eq!(candidates, [bob]);
    }

    #[test]
    fn test_all_registered_yields_no_candidates() {
        let (_dir, store) = test_store();
        let event = add_event(&store, "Orientation");
        let ann = add_student(&store, "Ann", "a@x.com");
        let bob = add_student(&store, "Bob", "b@x.com");

        store.register(ann, event).unwrap();
        store.register(bob, event).unwrap();

        assert!(store.unregistered_students(event).unwrap().is_empty());
    }

    #[test]
    fn test_registrations_for_event_ordered_by_student_name() {
        let (_dir, store) = test_store();
        let event = add_event(&store, "Orientation");
        let bob = add_student(&store, "Bob", "b@x.com");
        let ann = add_student(&store, "Ann", "a@x.com");

        store.register(bob, event).unwrap();
        store.register(ann, event).unwrap();

        let names: Vec<String> = store
            .registrations_for_event(event)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Ann", "Bob"]);
    }

    #[test]
    fn test_delete_registration_then_relist_excludes_student() {
        let (_dir, store) = test_store();
        let event = add_event(&store, "Orientation");
        let ann = add_student(&store, "Ann", "a@x.com");
        let bob = add_student(&store, "Bob", "b@x.com");

        store.register(ann, event).unwrap();
        store.register(bob, event).unwrap();
        store.delete_registration(ann, event).unwrap();

        let rows = store.registrations_for_event(event).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|r| r.student_id != ann));
    }

    #[test]
    fn test_search_registrations_is_global_and_title_ordered() {
        let (_dir, store) = test_store();
        let workshop = add_event(&store, "Workshop");
        let fair = add_event(&store, "Career Fair");
        let ann = add_student(&store, "Ann", "a@x.com");
        add_student(&store, "Bob", "b@x.com");

        store.register(ann, workshop).unwrap();
        store.register(ann, fair).unwrap();

        let rows = store.search_registrations("ANN").unwrap();
        let titles: Vec<String> = rows.iter().map(|r| r.event_title.clone()).collect();
        assert_eq!(titles, ["Career Fair", "Workshop"]);
        assert!(rows.iter().all(|r| r.name == "Ann"));

        assert!(store.search_registrations("zzz").unwrap().is_empty());
    }
}
