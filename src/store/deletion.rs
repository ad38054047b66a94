//! Two-step delete protocol.
//!
//! Deleting is split into a request, which only produces a
//! [`PendingDeletion`], and a confirmation, which carries the user's answer.
//! Nothing is removed until the caller comes back with
//! [`Confirmation::Confirmed`].

use crate::models::{Employee, EmployeeId};

/// Prompt shown to the user before an employee is removed.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// A delete request awaiting the user's answer.
///
/// Only the store creates these, via `EmployeeStore::request_delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    id: EmployeeId,
}

impl PendingDeletion {
    pub(crate) fn new(id: EmployeeId) -> Self {
        Self { id }
    }

    /// The id the user asked to delete.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// The yes/no question to put to the user.
    pub fn prompt(&self) -> &'static str {
        DELETE_PROMPT
    }
}

/// The user's answer to a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Go ahead and delete.
    Confirmed,
    /// Keep the employee.
    Declined,
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Result of answering a delete prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The employee was removed.
    Removed(Employee),
    /// The user declined; nothing changed.
    Declined,
    /// No employee had the id; nothing changed.
    NotFound,
}
