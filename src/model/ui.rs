//! UI state - presentation state separate from domain data
//!
//! Note: Most UI state lives on the screen components which own their
//! selection and search state.

/// Tab selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Events,
    Registrations,
    Students,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Events, Tab::Registrations, Tab::Students]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Events => "Events",
            Tab::Registrations => "Registrations",
            Tab::Students => "Students",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Events => Tab::Registrations,
            Tab::Registrations => Tab::Students,
            Tab::Students => Tab::Events,
        }
    }

    pub fn previous(&self) -> Tab {
        match self {
            Tab::Events => Tab::Students,
            Tab::Registrations => Tab::Events,
            Tab::Students => Tab::Registrations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_is_closed() {
        for tab in Tab::all() {
            assert_eq!(tab.next().previous(), tab);
            assert_eq!(tab.previous().next(), tab);
        }
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(Tab::Events.next(), Tab::Registrations);
        assert_eq!(Tab::Registrations.next(), Tab::Students);
        assert_eq!(Tab::Students.next(), Tab::Events);
    }
}
