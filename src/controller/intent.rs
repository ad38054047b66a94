//! User intents forwarded by the presentation layer.

use crate::models::{EmployeeId, Field};
use crate::store::Confirmation;

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open an empty add form.
    BeginAdd,
    /// Open the edit form for an employee.
    BeginEdit(EmployeeId),
    /// Close the open form, discarding its input.
    Cancel,
    /// Change one field of the open form.
    SetField(Field, String),
    /// Submit the open form.
    Submit,
    /// Ask to delete an employee; a confirmation prompt follows.
    RequestDelete(EmployeeId),
    /// Answer the outstanding delete prompt.
    AnswerDelete(Confirmation),
}

/// What the presentation layer should do after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Re-read the view.
    Refreshed,
    /// Show this message; the form keeps its input.
    Alert(String),
    /// Ask the user this yes/no question, then send `AnswerDelete`.
    ConfirmationRequired(String),
}

impl Feedback {
    /// Returns the alert text, if this is an alert.
    pub fn alert(&self) -> Option<&str> {
        match self {
            Feedback::Alert(message) => Some(message),
            _ => None,
        }
    }
}
