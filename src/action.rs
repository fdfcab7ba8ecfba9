//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no input is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row in the active table
    NextItem,
    /// Move to previous row in the active table
    PrevItem,
    /// Jump to first row
    FirstItem,
    /// Jump to last row
    LastItem,
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Reload the active screen from the database
    Refresh,

    // ─────────────────────────────────────────────────────────────────────────
    // Registrations Screen
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the next event in the selector and reload its registrations
    NextEvent,
    /// Select the previous event in the selector and reload its registrations
    PrevEvent,
    /// Enter name-search mode
    EnterSearchMode,
    /// Leave name-search mode and hide the suggestion overlay
    ExitSearchMode,
    /// Add a character to the search text
    SearchInput(char),
    /// Remove the last character from the search text
    SearchBackspace,
    /// Run the search (or apply the highlighted suggestion first)
    SubmitSearch,
    /// Move down in the suggestion overlay
    SuggestionDown,
    /// Move up in the suggestion overlay
    SuggestionUp,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the add-event form
    OpenAddEvent,
    /// Open the add-student form
    OpenAddStudent,
    /// Open the register-student candidate picker
    OpenRegisterDialog,
    /// Open the delete-registration confirmation
    OpenDeleteConfirm,
    /// Open the key-binding overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::Refresh => write!(f, "Refresh"),
            Action::NextEvent => write!(f, "NextEvent"),
            Action::PrevEvent => write!(f, "PrevEvent"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::SubmitSearch => write!(f, "SubmitSearch"),
            Action::SuggestionDown => write!(f, "SuggestionDown"),
            Action::SuggestionUp => write!(f, "SuggestionUp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenAddEvent => write!(f, "OpenAddEvent"),
            Action::OpenAddStudent => write!(f, "OpenAddStudent"),
            Action::OpenRegisterDialog => write!(f, "OpenRegisterDialog"),
            Action::OpenDeleteConfirm => write!(f, "OpenDeleteConfirm"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
