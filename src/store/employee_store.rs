//! The employee store: ordered records plus the current UI mode.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::{DirectoryConfig, MissingIdPolicy};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, EmployeeFields, EmployeeId, UiMode};
use crate::validation::validate;

use super::deletion::{Confirmation, DeleteOutcome, PendingDeletion};
use super::id::IdGenerator;

/// Holds the employee collection and owns every mutation of it.
///
/// Employees are kept in insertion order and ids are unique. Every record
/// reachable from the store has passed [`validate`].
///
/// # Example
///
/// ```
/// use employee_directory::models::{EmployeeFields, UiMode};
/// use employee_directory::store::{Confirmation, DeleteOutcome, EmployeeStore};
///
/// let mut store = EmployeeStore::new();
/// store.begin_add();
/// let id = store.add(EmployeeFields::new("Amy", "QA", "QA", "amy@co.com"))?;
/// assert_eq!(store.mode(), &UiMode::Browsing);
///
/// let pending = store.request_delete(id);
/// let outcome = store.confirm_delete(pending, Confirmation::Confirmed)?;
/// assert!(matches!(outcome, DeleteOutcome::Removed(_)));
/// assert!(store.is_empty());
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    mode: UiMode,
    ids: IdGenerator,
    missing_id_policy: MissingIdPolicy,
}

impl EmployeeStore {
    /// Creates an empty store in browsing mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `employees`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if a record fails validation or repeats an id.
    pub fn with_employees(employees: Vec<Employee>) -> DirectoryResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if let Err(err) = validate(&employee.fields()) {
                return Err(DirectoryError::InvalidSeed {
                    id: employee.id,
                    message: err.to_string(),
                });
            }
            if !seen.insert(employee.id) {
                return Err(DirectoryError::InvalidSeed {
                    id: employee.id,
                    message: "duplicate id".to_string(),
                });
            }
        }

        let ids = IdGenerator::after(employees.iter().map(|e| e.id).max());
        Ok(Self {
            employees,
            mode: UiMode::Browsing,
            ids,
            missing_id_policy: MissingIdPolicy::default(),
        })
    }

    /// Creates a store from loaded configuration.
    pub fn from_config(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let store = Self::with_employees(config.seed.clone())?
            .with_missing_id_policy(config.missing_id_policy);
        info!(
            employee_count = store.len(),
            policy = ?store.missing_id_policy,
            "Employee store initialised"
        );
        Ok(store)
    }

    /// Sets how update and delete treat unknown ids.
    pub fn with_missing_id_policy(mut self, policy: MissingIdPolicy) -> Self {
        self.missing_id_policy = policy;
        self
    }

    /// All employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The current UI mode.
    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// The snapshot being edited, if the edit form is open.
    pub fn editing(&self) -> Option<&Employee> {
        self.mode.editing()
    }

    /// The configured handling of unknown ids.
    pub fn missing_id_policy(&self) -> MissingIdPolicy {
        self.missing_id_policy
    }

    /// Opens the add form.
    pub fn begin_add(&mut self) {
        self.set_mode(UiMode::Adding);
    }

    /// Opens the edit form for a snapshot of `employee`.
    ///
    /// Later changes to the stored record do not affect the snapshot.
    pub fn begin_edit(&mut self, employee: &Employee) {
        self.set_mode(UiMode::Editing(employee.clone()));
    }

    /// Closes any open form.
    pub fn cancel(&mut self) {
        self.set_mode(UiMode::Browsing);
    }

    /// Validates and appends a new employee, returning its fresh id.
    ///
    /// On success the mode returns to browsing. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the fields fail [`validate`], or
    /// `IdsExhausted` once every id has been issued.
    pub fn add(&mut self, candidate: EmployeeFields) -> DirectoryResult<EmployeeId> {
        if let Err(err) = validate(&candidate) {
            warn!(error = %err, "Rejected new employee");
            return Err(err.into());
        }

        let Some(id) = self.ids.next_id() else {
            warn!("Rejected new employee, id space exhausted");
            return Err(DirectoryError::IdsExhausted);
        };
        self.employees.push(Employee::from_fields(id, candidate));
        info!(employee_id = %id, employee_count = self.len(), "Employee added");

        self.set_mode(UiMode::Browsing);
        Ok(id)
    }

    /// Validates `record` and replaces the stored employee with the same id.
    ///
    /// Returns the previous record when one was replaced. Position in the
    /// list is preserved. When no employee matches, the outcome depends on
    /// the [`MissingIdPolicy`]: `Ignore` returns `Ok(None)` and still closes
    /// the form, `Reject` returns `EmployeeNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the fields fail [`validate`], or
    /// `EmployeeNotFound` under the reject policy. Nothing changes on error.
    pub fn update(&mut self, record: Employee) -> DirectoryResult<Option<Employee>> {
        if let Err(err) = validate(&record.fields()) {
            warn!(employee_id = %record.id, error = %err, "Rejected employee update");
            return Err(err.into());
        }

        let id = record.id;
        let previous = match self.employees.iter_mut().find(|e| e.id == id) {
            Some(slot) => Some(std::mem::replace(slot, record)),
            None => match self.missing_id_policy {
                MissingIdPolicy::Ignore => {
                    debug!(employee_id = %id, "Update for unknown employee ignored");
                    None
                }
                MissingIdPolicy::Reject => {
                    warn!(employee_id = %id, "Update for unknown employee rejected");
                    return Err(DirectoryError::EmployeeNotFound { id });
                }
            },
        };

        if previous.is_some() {
            info!(employee_id = %id, "Employee updated");
        }
        self.set_mode(UiMode::Browsing);
        Ok(previous)
    }

    /// Starts a deletion. Nothing is removed until
    /// [`EmployeeStore::confirm_delete`] is called with the user's answer.
    pub fn request_delete(&self, id: EmployeeId) -> PendingDeletion {
        debug!(employee_id = %id, "Delete requested, awaiting confirmation");
        PendingDeletion::new(id)
    }

    /// Completes a deletion with the user's answer.
    ///
    /// If the removed employee was open in the edit form, the form closes.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for a confirmed delete of an unknown id
    /// under the reject policy.
    pub fn confirm_delete(
        &mut self,
        pending: PendingDeletion,
        answer: Confirmation,
    ) -> DirectoryResult<DeleteOutcome> {
        let id = pending.id();

        if answer == Confirmation::Declined {
            debug!(employee_id = %id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return match self.missing_id_policy {
                MissingIdPolicy::Ignore => {
                    debug!(employee_id = %id, "Delete for unknown employee ignored");
                    Ok(DeleteOutcome::NotFound)
                }
                MissingIdPolicy::Reject => {
                    warn!(employee_id = %id, "Delete for unknown employee rejected");
                    Err(DirectoryError::EmployeeNotFound { id })
                }
            };
        };

        let removed = self.employees.remove(index);
        info!(employee_id = %id, employee_count = self.len(), "Employee deleted");

        if self.editing().is_some_and(|e| e.id == id) {
            self.set_mode(UiMode::Browsing);
        }
        Ok(DeleteOutcome::Removed(removed))
    }

    fn set_mode(&mut self, mode: UiMode) {
        if self.mode != mode {
            debug!(from = self.mode.as_str(), to = mode.as_str(), "Mode changed");
        }
        self.mode = mode;
    }
}
