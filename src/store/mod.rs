//! In-memory employee store.
//!
//! The store owns the ordered employee collection, the UI mode, and id
//! assignment. Deletes go through a request/confirm pair so callers can put
//! a yes/no question to the user in between.

mod deletion;
mod employee_store;
mod id;

pub use deletion::{Confirmation, DELETE_PROMPT, DeleteOutcome, PendingDeletion};
pub use employee_store::EmployeeStore;
