//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Business/data state (loaded rows per screen)
//! - `Tab` - Screen selection
//! - `ModalStack` - Modal overlay management
//! - Input validation for the insert forms

pub mod domain;
pub mod modal;
pub mod ui;
pub mod validate;

// Re-export commonly used types
pub use domain::{Event, EventChoice, NewEvent, RegistrationRow, Student, StudentPick};
pub use validate::ValidationError;
