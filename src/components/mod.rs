//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod add_event_dialog;
pub mod add_student_dialog;
pub mod confirm_dialog;
pub mod events;
pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod message_dialog;
pub mod register_dialog;
pub mod registrations;
pub mod students;
pub mod table;

pub use add_event_dialog::AddEventDialog;
pub use add_student_dialog::AddStudentDialog;
pub use confirm_dialog::ConfirmDialog;
pub use events::EventsComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use message_dialog::MessageDialog;
pub use register_dialog::RegisterDialog;
pub use registrations::RegistrationsComponent;
pub use students::StudentsComponent;
