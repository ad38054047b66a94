//! UI mode held alongside the employee collection.

use serde::{Deserialize, Serialize};

use super::Employee;

/// Which form, if any, is active.
///
/// The variants are mutually exclusive: at most one form is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "employee", rename_all = "snake_case")]
pub enum UiMode {
    /// The list is shown; no form is open.
    #[default]
    Browsing,
    /// The add form is open.
    Adding,
    /// The edit form is open, pre-populated from this snapshot.
    Editing(Employee),
}

impl UiMode {
    /// Returns the employee snapshot when editing.
    pub fn editing(&self) -> Option<&Employee> {
        match self {
            UiMode::Editing(employee) => Some(employee),
            _ => None,
        }
    }

    /// Returns true if no form is open.
    pub fn is_browsing(&self) -> bool {
        matches!(self, UiMode::Browsing)
    }

    /// Short label used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            UiMode::Browsing => "browsing",
            UiMode::Adding => "adding",
            UiMode::Editing(_) => "editing",
        }
    }
}
