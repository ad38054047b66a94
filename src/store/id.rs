//! Monotonic id assignment.

use crate::models::EmployeeId;

/// Hands out strictly increasing employee ids.
///
/// Ids are never reused, including ids of deleted employees. Once the
/// counter would pass `u64::MAX` no further ids are issued.
#[derive(Debug, Clone)]
pub(crate) struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    /// Creates a generator whose first id is 1.
    pub(crate) fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Creates a generator whose first id is strictly greater than `max`.
    pub(crate) fn after(max: Option<EmployeeId>) -> Self {
        Self {
            next: max.map_or(Some(1), |id| id.get().checked_add(1)),
        }
    }

    /// Returns a fresh id and advances the counter, or `None` when the id
    /// space is used up.
    pub(crate) fn next_id(&mut self) -> Option<EmployeeId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(EmployeeId::new(id))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
