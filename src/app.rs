//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that routes events to the active screen or the top modal and
//! applies every action. All database calls run here, synchronously on the
//! UI thread; each one opens and closes its own connection inside the
//! store.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, AddEventDialog, AddStudentDialog, ConfirmDialog, EventsComponent,
    HelpDialog, MessageDialog, RegisterDialog, RegistrationsComponent, StudentsComponent,
};
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::Tab;
use crate::services::{Store, StoreError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use tracing::error;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current active tab
    pub active_tab: Tab,

    /// Domain state (rows loaded per screen)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Storage accessor
    pub store: Store,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display on the status line
    pub error: Option<String>,

    /// Status message to display on the status line
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub events: EventsComponent,
    pub students: StudentsComponent,
    pub registrations: RegistrationsComponent,
    pub add_event_dialog: AddEventDialog,
    pub add_student_dialog: AddStudentDialog,
    pub register_dialog: RegisterDialog,
    pub confirm_dialog: ConfirmDialog,
    pub message_dialog: MessageDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App and load every screen's rows
    pub fn new(store: Store) -> App {
        let mut app = App {
            active_tab: Tab::Events,
            domain: DomainState::new(),
            modals: ModalStack::new(),
            store,
            should_quit: false,
            error: None,
            status_message: None,
            events: EventsComponent::new(),
            students: StudentsComponent::new(),
            registrations: RegistrationsComponent::new(),
            add_event_dialog: AddEventDialog::new(),
            add_student_dialog: AddStudentDialog::new(),
            register_dialog: RegisterDialog::new(),
            confirm_dialog: ConfirmDialog,
            message_dialog: MessageDialog,
            help_dialog: HelpDialog,
        };

        app.load_events();
        app.load_students();
        app.refresh_registrations();
        app
    }

    fn report_store_error(&mut self, context: &str, err: &StoreError) {
        error!("{}: {}", context, err);
        self.error = Some(format!("{}: {}", context, err));
    }

    fn set_status(&mut self, message: &str) {
        self.error = None;
        self.status_message = Some(message.to_string());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Data Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Reload the events screen
    fn load_events(&mut self) {
        match self.store.list_events() {
            Ok(events) => {
                self.domain.events = events;
                self.events.select_first(&self.domain.events);
            }
            Err(e) => self.report_store_error("Failed to load events", &e),
        }
    }

    /// Reload the students screen
    fn load_students(&mut self) {
        match self.store.list_students() {
            Ok(students) => {
                self.domain.students = students;
                self.students.select_first(&self.domain.students);
            }
            Err(e) => self.report_store_error("Failed to load students", &e),
        }
    }

    /// Reload the event selector (ordered by title), then the rows
    fn refresh_registrations(&mut self) {
        match self.store.events_by_title() {
            Ok(choices) => {
                self.domain.event_choices = choices;
                self.registrations.clamp_event(&self.domain.event_choices);
            }
            Err(e) => {
                self.report_store_error("Failed to load events", &e);
                return;
            }
        }
        self.load_registrations();
    }

    /// Reload the selected event's registrations; with no event selected
    /// the table stays empty
    fn load_registrations(&mut self) {
        match self
            .registrations
            .selected_event_id(&self.domain.event_choices)
        {
            Some(event_id) => match self.store.registrations_for_event(event_id) {
                Ok(rows) => {
                    self.domain.registrations = rows;
                    self.registrations.select_first(&self.domain.registrations);
                }
                Err(e) => self.report_store_error("Failed to load registrations", &e),
            },
            None => {
                self.domain.registrations.clear();
                self.registrations.list_state.select(None);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Requery the suggestion overlay for the current search text
    fn update_suggestions(&mut self) {
        let query = self.registrations.search_query.trim().to_string();
        if query.is_empty() {
            self.registrations.hide_suggestions();
            return;
        }
        match self.store.student_suggestions(&query) {
            Ok(suggestions) => self.registrations.set_suggestions(suggestions),
            Err(e) => self.report_store_error("Failed to load suggestions", &e),
        }
    }

    /// Global search across all events; empty text is a no-op
    fn run_search(&mut self) {
        let query = self.registrations.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        match self.store.search_registrations(&query) {
            Ok(rows) => {
                self.domain.registrations = rows;
                self.registrations.select_first(&self.domain.registrations);
            }
            Err(e) => self.report_store_error("Search failed", &e),
        }
    }

    /// Apply a highlighted suggestion (if any), then search
    fn submit_search(&mut self) {
        if let Some(pick) = self.registrations.highlighted_suggestion().cloned() {
            self.registrations.search_query = pick.name;
        }
        self.registrations.exit_search_mode();
        self.run_search();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration Flows
    // ─────────────────────────────────────────────────────────────────────────

    /// Compute the unregistered candidate set and open the picker
    fn open_register_dialog(&mut self) {
        let Some(event_id) = self
            .registrations
            .selected_event_id(&self.domain.event_choices)
        else {
            self.modals.push(Modal::Message {
                text: "Select an event first.".to_string(),
            });
            return;
        };

        match self.store.unregistered_students(event_id) {
            Ok(candidates) => {
                if candidates.is_empty() {
                    self.modals.push(Modal::Message {
                        text: "All students already registered.".to_string(),
                    });
                    return;
                }
                let title = self.domain.event_choices[self.registrations.selected_event]
                    .title
                    .clone();
                self.register_dialog.set_candidates(candidates, &title);
                self.modals.push(Modal::RegisterStudent);
            }
            Err(e) => self.report_store_error("Failed to load candidates", &e),
        }
    }

    /// Ask for confirmation before deleting the highlighted registration
    fn open_delete_confirm(&mut self) {
        if self
            .registrations
            .selected_event_id(&self.domain.event_choices)
            .is_none()
        {
            self.modals.push(Modal::Message {
                text: "Select an event first.".to_string(),
            });
            return;
        }

        match self.registrations.selected_row(&self.domain.registrations) {
            Some(row) => {
                self.modals.push(Modal::DeleteConfirm {
                    student_id: row.student_id,
                    student_name: row.name.clone(),
                });
            }
            None => {
                self.modals.push(Modal::Message {
                    text: "Please select a registration to delete.".to_string(),
                });
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Modal Confirmation
    // ─────────────────────────────────────────────────────────────────────────

    fn confirm_top_modal(&mut self) {
        let Some(modal) = self.modals.top().cloned() else {
            return;
        };

        match modal {
            Modal::QuitConfirm => {
                self.should_quit = true;
            }
            Modal::AddEvent => {
                if let Some(event) = self.add_event_dialog.validate() {
                    match self.store.insert_event(&event) {
                        Ok(()) => {
                            self.modals.pop();
                            self.load_events();
                            self.set_status("Event added successfully.");
                        }
                        Err(e) => self.report_store_error("Failed to save event", &e),
                    }
                }
            }
            Modal::AddStudent => {
                if let Some((name, email)) = self.add_student_dialog.validate() {
                    match self.store.email_exists(&email) {
                        Ok(true) => self.add_student_dialog.set_duplicate_error(),
                        Ok(false) => match self.store.insert_student(&name, &email) {
                            Ok(()) => {
                                self.modals.pop();
                                self.load_students();
                                self.set_status("Student added successfully.");
                            }
                            Err(e) => self.report_store_error("Failed to save student", &e),
                        },
                        Err(e) => self.report_store_error("Failed to check email", &e),
                    }
                }
            }
            Modal::RegisterStudent => {
                let pick = self.register_dialog.selected().cloned();
                let event_id = self
                    .registrations
                    .selected_event_id(&self.domain.event_choices);
                if let (Some(pick), Some(event_id)) = (pick, event_id) {
                    match self.store.register(pick.student_id, event_id) {
                        Ok(()) => {
                            self.modals.pop();
                            self.load_registrations();
                            self.set_status("Student registered.");
                        }
                        Err(e) => self.report_store_error("Failed to register student", &e),
                    }
                }
            }
            Modal::DeleteConfirm { student_id, .. } => {
                if let Some(event_id) = self
                    .registrations
                    .selected_event_id(&self.domain.event_choices)
                {
                    match self.store.delete_registration(student_id, event_id) {
                        Ok(()) => {
                            self.modals.pop();
                            self.load_registrations();
                            self.set_status("Registration deleted.");
                        }
                        Err(e) => self.report_store_error("Failed to delete registration", &e),
                    }
                } else {
                    self.modals.pop();
                }
            }
            Modal::Message { .. } | Modal::Help => {
                self.modals.pop();
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if self.active_tab == Tab::Registrations && self.registrations.search_mode {
            return self.handle_search_key_event(key);
        }

        match self.active_tab {
            Tab::Events => self.events.handle_key_event(key),
            Tab::Registrations => self.registrations.handle_key_event(key),
            Tab::Students => self.students.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab => self.active_tab = self.active_tab.next(),
            Action::PrevTab => self.active_tab = self.active_tab.previous(),
            Action::NextItem => match self.active_tab {
                Tab::Events => self.events.next(&self.domain.events),
                Tab::Registrations => self.registrations.next(&self.domain.registrations),
                Tab::Students => self.students.next(&self.domain.students),
            },
            Action::PrevItem => match self.active_tab {
                Tab::Events => self.events.previous(&self.domain.events),
                Tab::Registrations => self.registrations.previous(&self.domain.registrations),
                Tab::Students => self.students.previous(&self.domain.students),
            },
            Action::FirstItem => match self.active_tab {
                Tab::Events => self.events.select_first(&self.domain.events),
                Tab::Registrations => self.registrations.select_first(&self.domain.registrations),
                Tab::Students => self.students.select_first(&self.domain.students),
            },
            Action::LastItem => match self.active_tab {
                Tab::Events => self.events.select_last(&self.domain.events),
                Tab::Registrations => self.registrations.select_last(&self.domain.registrations),
                Tab::Students => self.students.select_last(&self.domain.students),
            },

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::Refresh => match self.active_tab {
                Tab::Events => {
                    self.load_events();
                    self.set_status("Events reloaded.");
                }
                Tab::Students => {
                    self.load_students();
                    self.set_status("Students reloaded.");
                }
                Tab::Registrations => {
                    self.refresh_registrations();
                    self.set_status("Registrations reloaded.");
                }
            },

            // ─────────────────────────────────────────────────────────────────
            // Registrations Screen
            // ─────────────────────────────────────────────────────────────────
            Action::NextEvent => {
                self.registrations.next_event(&self.domain.event_choices);
                self.load_registrations();
            }
            Action::PrevEvent => {
                self.registrations.prev_event(&self.domain.event_choices);
                self.load_registrations();
            }
            Action::EnterSearchMode => self.registrations.enter_search_mode(),
            Action::ExitSearchMode => self.registrations.exit_search_mode(),
            Action::SearchInput(c) => {
                self.registrations.search_query.push(c);
                self.update_suggestions();
            }
            Action::SearchBackspace => {
                self.registrations.search_query.pop();
                self.update_suggestions();
            }
            Action::SubmitSearch => self.submit_search(),
            Action::SuggestionDown => self.registrations.suggestion_down(),
            Action::SuggestionUp => self.registrations.suggestion_up(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::OpenAddEvent => {
                self.add_event_dialog.reset();
                self.modals.push(Modal::AddEvent);
            }
            Action::OpenAddStudent => {
                self.add_student_dialog.reset();
                self.modals.push(Modal::AddStudent);
            }
            Action::OpenRegisterDialog => self.open_register_dialog(),
            Action::OpenDeleteConfirm => self.open_delete_confirm(),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => self.confirm_top_modal(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        render_tabs(frame, layout.tabs, self.active_tab);

        match self.active_tab {
            Tab::Events => self
                .events
                .draw_screen(frame, layout.body, &self.domain.events),
            Tab::Registrations => self.registrations.draw_screen(
                frame,
                layout.body,
                &self.domain.event_choices,
                &self.domain.registrations,
            ),
            Tab::Students => self
                .students
                .draw_screen(frame, layout.body, &self.domain.students),
        }

        render_status_bar(frame, layout.status, self);
        render_help_bar(frame, layout.help, self);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm | Modal::DeleteConfirm { .. } => {
                self.confirm_dialog.handle_key_event(key)
            }
            Modal::AddEvent => self.add_event_dialog.handle_key_event(key),
            Modal::AddStudent => self.add_student_dialog.handle_key_event(key),
            Modal::RegisterStudent => self.register_dialog.handle_key_event(key),
            Modal::Message { .. } => self.message_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ExitSearchMode),
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Down => Some(Action::SuggestionDown),
            KeyCode::Up => Some(Action::SuggestionUp),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.confirm_dialog.draw_quit(frame, area),
            Modal::DeleteConfirm { student_name, .. } => {
                self.confirm_dialog.draw_delete(frame, area, student_name)
            }
            Modal::AddEvent => self.add_event_dialog.draw(frame, area)?,
            Modal::AddStudent => self.add_student_dialog.draw(frame, area)?,
            Modal::RegisterStudent => self.register_dialog.draw(frame, area)?,
            Modal::Message { text } => self.message_dialog.draw_message(frame, area, text),
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Chrome Rendering
// ═══════════════════════════════════════════════════════════════════════════════

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: Tab) {
    let all_tabs = Tab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
    let selected = all_tabs.iter().position(|t| *t == active_tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " campus-tui ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let summary = match app.active_tab {
        Tab::Events => format!(" {} events", app.domain.events.len()),
        Tab::Students => format!(" {} students", app.domain.students.len()),
        Tab::Registrations => format!(
            " {} events, {} rows",
            app.domain.event_choices.len(),
            app.domain.registrations.len()
        ),
    };
    spans.push(Span::styled(summary, Style::default().fg(Color::DarkGray)));

    if let Some(ref error) = app.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(ref status) = app.status_message {
        spans.push(Span::styled(
            format!("  {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let spans = if app.active_tab == Tab::Registrations && app.registrations.search_mode {
        vec![
            Span::styled(" Esc ", key_style(Color::Yellow)),
            Span::raw("Cancel  "),
            Span::styled(" Enter ", key_style(Color::Green)),
            Span::raw("Search  "),
            Span::styled(" ↓/↑ ", key_style(Color::Cyan)),
            Span::raw("Pick suggestion  "),
            Span::styled(
                format!("Search: {}", app.registrations.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        let mut spans = vec![
            Span::styled(" q ", key_style(Color::Yellow)),
            Span::raw("Quit "),
            Span::styled(" Tab ", key_style(Color::Cyan)),
            Span::raw("Screen "),
            Span::styled(" r ", key_style(Color::Green)),
            Span::raw("Reload "),
        ];
        match app.active_tab {
            Tab::Events => {
                spans.push(Span::styled(" a ", key_style(Color::Green)));
                spans.push(Span::raw("Add event "));
            }
            Tab::Students => {
                spans.push(Span::styled(" a ", key_style(Color::Green)));
                spans.push(Span::raw("Add student "));
            }
            Tab::Registrations => {
                spans.push(Span::styled(" h/l ", key_style(Color::Cyan)));
                spans.push(Span::raw("Event "));
                spans.push(Span::styled(" a ", key_style(Color::Green)));
                spans.push(Span::raw("Register "));
                spans.push(Span::styled(" d ", key_style(Color::Red)));
                spans.push(Span::raw("Delete "));
                spans.push(Span::styled(" / ", key_style(Color::Cyan)));
                spans.push(Span::raw("Search "));
            }
        }
        spans.push(Span::styled(" ? ", key_style(Color::White)));
        spans.push(Span::raw("Help"));
        spans
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::TOP))
        .alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewEvent;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().join("campus.db"));
        store.ensure_schema().expect("schema");
        let app = App::new(store);
        (dir, app)
    }

    fn seed_event(store: &Store, title: &str) -> i64 {
        store
            .insert_event(&NewEvent {
                title: title.to_string(),
                event_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                venue: "Main Hall".to_string(),
                capacity: 100,
            })
            .unwrap();
        store
            .list_events()
            .unwrap()
            .into_iter()
            .find(|e| e.title == title)
            .unwrap()
            .event_id
    }

    fn seed_student(store: &Store, name: &str, email: &str) -> i64 {
        store.insert_student(name, email).unwrap();
        store
            .list_students()
            .unwrap()
            .into_iter()
            .find(|s| s.email == email)
            .unwrap()
            .student_id
    }

    fn message_text(app: &App) -> Option<&str> {
        match app.modals.top() {
            Some(Modal::Message { text }) => Some(text.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_register_with_everyone_registered_reports_and_inserts_nothing() {
        let (_dir, mut app) = test_app();
        let event = seed_event(&app.store, "Orientation");
        let ann = seed_student(&app.store, "Ann", "a@x.com");
        app.store.register(ann, event).unwrap();

        app.active_tab = Tab::Registrations;
        app.refresh_registrations();
        let before = app.store.registrations_for_event(event).unwrap().len();

        app.update(Action::OpenRegisterDialog).unwrap();

        assert_eq!(message_text(&app), Some("All students already registered."));
        assert_eq!(
            app.store.registrations_for_event(event).unwrap().len(),
            before
        );
    }

    #[test]
    fn test_register_flow_inserts_and_shrinks_candidate_set() {
        let (_dir, mut app) = test_app();
        let event = seed_event(&app.store, "Orientation");
        seed_student(&app.store, "Ann", "a@x.com");
        seed_student(&app.store, "Bob", "b@x.com");

        app.active_tab = Tab::Registrations;
        app.refresh_registrations();

        app.update(Action::OpenRegisterDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::RegisterStudent));
        assert_eq!(app.register_dialog.candidates.len(), 2);
        let picked = app.register_dialog.selected().unwrap().student_id;

        app.update(Action::ConfirmModal).unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(app.domain.registrations.len(), 1);

        // The anti-join candidate set now excludes the registered student
        let remaining = app.store.unregistered_students(event).unwrap();
        assert!(remaining.iter().all(|p| p.student_id != picked));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn test_delete_without_selection_reports() {
        let (_dir, mut app) = test_app();
        seed_event(&app.store, "Orientation");

        app.active_tab = Tab::Registrations;
        app.refresh_registrations();

        app.update(Action::OpenDeleteConfirm).unwrap();
        assert_eq!(
            message_text(&app),
            Some("Please select a registration to delete.")
        );
    }

    #[test]
    fn test_delete_flow_removes_row_from_relisting() {
        let (_dir, mut app) = test_app();
        let event = seed_event(&app.store, "Orientation");
        let ann = seed_student(&app.store, "Ann", "a@x.com");
        app.store.register(ann, event).unwrap();

        app.active_tab = Tab::Registrations;
        app.refresh_registrations();
        assert_eq!(app.domain.registrations.len(), 1);

        app.update(Action::OpenDeleteConfirm).unwrap();
        assert!(matches!(
            app.modals.top(),
            Some(Modal::DeleteConfirm { student_id, .. }) if *student_id == ann
        ));

        app.update(Action::ConfirmModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(app.domain.registrations.is_empty());
        assert!(app.store.registrations_for_event(event).unwrap().is_empty());
    }

    #[test]
    fn test_add_student_flow_inserts_and_reloads() {
        let (_dir, mut app) = test_app();
        app.active_tab = Tab::Students;

        app.update(Action::OpenAddStudent).unwrap();
        app.add_student_dialog.form.fields[0].value = "Ann".to_string();
        app.add_student_dialog.form.fields[1].value = "a@x.com".to_string();
        app.update(Action::ConfirmModal).unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.domain.students.len(), 1);
        assert_eq!(app.domain.students[0].email, "a@x.com");
    }

    #[test]
    fn test_add_student_invalid_email_inserts_no_row() {
        let (_dir, mut app) = test_app();
        app.update(Action::OpenAddStudent).unwrap();
        app.add_student_dialog.form.fields[0].value = "Ann".to_string();
        app.add_student_dialog.form.fields[1].value = "not-an-email".to_string();
        app.update(Action::ConfirmModal).unwrap();

        // Form stays open with the error; nothing was written
        assert_eq!(app.modals.top(), Some(&Modal::AddStudent));
        assert!(app.store.list_students().unwrap().is_empty());
    }

    #[test]
    fn test_add_student_duplicate_email_leaves_table_unchanged() {
        let (_dir, mut app) = test_app();
        seed_student(&app.store, "Ann", "a@x.com");
        let before = app.store.list_students().unwrap().len();

        app.update(Action::OpenAddStudent).unwrap();
        app.add_student_dialog.form.fields[0].value = "Ann Again".to_string();
        app.add_student_dialog.form.fields[1].value = "a@x.com".to_string();
        app.update(Action::ConfirmModal).unwrap();

        assert_eq!(app.modals.top(), Some(&Modal::AddStudent));
        assert_eq!(
            app.add_student_dialog.form.error.as_deref(),
            Some("Student with this email already exists.")
        );
        assert_eq!(app.store.list_students().unwrap().len(), before);
    }

    #[test]
    fn test_add_event_non_numeric_capacity_inserts_no_row() {
        let (_dir, mut app) = test_app();
        app.update(Action::OpenAddEvent).unwrap();
        app.add_event_dialog.form.fields[0].value = "Orientation".to_string();
        app.add_event_dialog.form.fields[1].value = "2026-09-01".to_string();
        app.add_event_dialog.form.fields[2].value = "18:00:00".to_string();
        app.add_event_dialog.form.fields[3].value = "Main Hall".to_string();
        app.add_event_dialog.form.fields[4].value = "many".to_string();
        app.update(Action::ConfirmModal).unwrap();

        assert_eq!(app.modals.top(), Some(&Modal::AddEvent));
        assert!(app.store.list_events().unwrap().is_empty());
    }

    #[test]
    fn test_add_event_flow_inserts_and_reloads() {
        let (_dir, mut app) = test_app();
        app.update(Action::OpenAddEvent).unwrap();
        app.add_event_dialog.form.fields[0].value = "Orientation".to_string();
        app.add_event_dialog.form.fields[1].value = "2026-09-01".to_string();
        app.add_event_dialog.form.fields[2].value = "18:00:00".to_string();
        app.add_event_dialog.form.fields[3].value = "Main Hall".to_string();
        app.add_event_dialog.form.fields[4].value = "120".to_string();
        app.update(Action::ConfirmModal).unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.domain.events.len(), 1);
        assert_eq!(app.domain.events[0].capacity, 120);
    }

    #[test]
    fn test_search_replaces_event_listing_and_event_switch_replaces_search() {
        let (_dir, mut app) = test_app();
        let workshop = seed_event(&app.store, "Workshop");
        let fair = seed_event(&app.store, "Career Fair");
        let ann = seed_student(&app.store, "Ann", "a@x.com");
        app.store.register(ann, workshop).unwrap();
        app.store.register(ann, fair).unwrap();

        app.active_tab = Tab::Registrations;
        app.refresh_registrations();
        // Selector is title-ordered, so "Career Fair" is selected first
        assert_eq!(app.domain.registrations.len(), 1);

        // Global search replaces the event-filtered rows (last action wins)
        app.update(Action::EnterSearchMode).unwrap();
        for c in "ann".chars() {
            app.update(Action::SearchInput(c)).unwrap();
        }
        assert!(app.registrations.show_suggestions);
        app.update(Action::SubmitSearch).unwrap();
        assert_eq!(app.domain.registrations.len(), 2);
        let titles: Vec<&str> = app
            .domain
            .registrations
            .iter()
            .map(|r| r.event_title.as_str())
            .collect();
        assert_eq!(titles, ["Career Fair", "Workshop"]);

        // Switching events replaces the search results again
        app.update(Action::NextEvent).unwrap();
        assert_eq!(app.domain.registrations.len(), 1);
        assert_eq!(app.domain.registrations[0].event_title, "Workshop");
    }

    #[test]
    fn test_suggestions_follow_search_text_and_clear_on_empty() {
        let (_dir, mut app) = test_app();
        seed_student(&app.store, "Ann", "ann@x.com");
        seed_student(&app.store, "Bob", "bob@x.com");
        seed_student(&app.store, "Anders", "anders@x.com");

        app.active_tab = Tab::Registrations;
        app.update(Action::EnterSearchMode).unwrap();
        app.update(Action::SearchInput('a')).unwrap();
        app.update(Action::SearchInput('n')).unwrap();

        let names: Vec<&str> = app
            .registrations
            .suggestions
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Ann", "Anders"]);

        app.update(Action::SearchBackspace).unwrap();
        app.update(Action::SearchBackspace).unwrap();
        assert!(!app.registrations.show_suggestions);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let (_dir, mut app) = test_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert!(!app.should_quit);
        app.update(Action::ConfirmModal).unwrap();
        assert!(app.should_quit);
    }
}
