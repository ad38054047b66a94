//! Read-only snapshot of what the presentation layer should show.

use crate::models::{Employee, EmployeeFields, UiMode};

/// Message shown instead of the list when there are no employees.
pub const EMPTY_DIRECTORY_MESSAGE: &str =
    "No employees found. Click \"Add New Employee\" to get started!";

/// Borrowed view of the directory at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryView<'a> {
    /// Employees in display order.
    pub employees: &'a [Employee],
    /// The current mode.
    pub mode: &'a UiMode,
    /// Contents of the open form, if any.
    pub form: Option<&'a EmployeeFields>,
}

impl DirectoryView<'_> {
    /// Heading of the open form.
    pub fn form_title(&self) -> Option<&'static str> {
        match self.mode {
            UiMode::Browsing => None,
            UiMode::Adding => Some("Add New Employee"),
            UiMode::Editing(_) => Some("Edit Employee Information"),
        }
    }

    /// Returns true when the list (and its add button) is visible.
    pub fn shows_list(&self) -> bool {
        self.mode.is_browsing()
    }

    /// Empty-state message, when the list is visible but has no rows.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.shows_list() && self.employees.is_empty()).then_some(EMPTY_DIRECTORY_MESSAGE)
    }
}
