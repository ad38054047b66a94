//! Intent dispatch for the directory controller.
//!
//! This module turns user intents into store calls and keeps the state the
//! store does not own: the text typed into the open form and the delete
//! awaiting confirmation.

use tracing::{debug, info, warn};

use crate::models::{Employee, EmployeeFields, EmployeeId, Field, UiMode};
use crate::store::{Confirmation, DeleteOutcome, EmployeeStore, PendingDeletion};

use super::intent::{Feedback, Intent};
use super::view::DirectoryView;

/// Headless front end over an [`EmployeeStore`].
///
/// # Example
///
/// ```
/// use employee_directory::controller::{DirectoryController, Feedback, Intent};
/// use employee_directory::models::Field;
/// use employee_directory::store::{Confirmation, EmployeeStore};
///
/// let mut controller = DirectoryController::new(EmployeeStore::new());
/// controller.dispatch(Intent::BeginAdd);
/// controller.dispatch(Intent::SetField(Field::Name, "Amy".into()));
/// controller.dispatch(Intent::SetField(Field::Position, "QA".into()));
/// controller.dispatch(Intent::SetField(Field::Department, "QA".into()));
/// controller.dispatch(Intent::SetField(Field::Email, "amy@co".into()));
///
/// let feedback = controller.dispatch(Intent::Submit);
/// assert_eq!(feedback.alert(), Some("Please enter a valid email address"));
///
/// controller.dispatch(Intent::SetField(Field::Email, "amy@co.com".into()));
/// assert_eq!(controller.dispatch(Intent::Submit), Feedback::Refreshed);
/// assert_eq!(controller.store().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryController {
    store: EmployeeStore,
    form: EmployeeFields,
    pending_delete: Option<PendingDeletion>,
}

impl DirectoryController {
    /// Wraps a store. An open edit form starts from its snapshot; an add
    /// form starts empty.
    pub fn new(store: EmployeeStore) -> Self {
        let form = store.editing().map(Employee::fields).unwrap_or_default();
        Self {
            store,
            form,
            pending_delete: None,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    /// Consumes the controller, returning the store.
    pub fn into_store(self) -> EmployeeStore {
        self.store
    }

    /// The delete awaiting an answer, if any.
    pub fn pending_delete(&self) -> Option<&PendingDeletion> {
        self.pending_delete.as_ref()
    }

    /// Snapshot of what should be on screen.
    pub fn view(&self) -> DirectoryView<'_> {
        let mode = self.store.mode();
        DirectoryView {
            employees: self.store.employees(),
            mode,
            form: (!mode.is_browsing()).then_some(&self.form),
        }
    }

    /// Applies one intent and tells the caller what to show next.
    pub fn dispatch(&mut self, intent: Intent) -> Feedback {
        debug!(intent = ?intent, mode = self.store.mode().as_str(), "Dispatching intent");

        match intent {
            Intent::BeginAdd => {
                self.form = EmployeeFields::default();
                self.store.begin_add();
                Feedback::Refreshed
            }
            Intent::BeginEdit(id) => self.begin_edit(id),
            Intent::Cancel => {
                self.store.cancel();
                self.form = EmployeeFields::default();
                Feedback::Refreshed
            }
            Intent::SetField(field, value) => self.set_field(field, value),
            Intent::Submit => self.submit(),
            Intent::RequestDelete(id) => {
                let pending = self.store.request_delete(id);
                let prompt = pending.prompt().to_string();
                self.pending_delete = Some(pending);
                Feedback::ConfirmationRequired(prompt)
            }
            Intent::AnswerDelete(answer) => self.answer_delete(answer),
        }
    }

    fn begin_edit(&mut self, id: EmployeeId) -> Feedback {
        let Some(employee) = self.store.get(id).cloned() else {
            warn!(employee_id = %id, "Edit requested for unknown employee");
            return Feedback::Alert("Employee not found".to_string());
        };

        self.form = employee.fields();
        self.store.begin_edit(&employee);
        Feedback::Refreshed
    }

    fn set_field(&mut self, field: Field, value: String) -> Feedback {
        if self.store.mode().is_browsing() {
            debug!(field = ?field, "Field change ignored, no form open");
        } else {
            self.form.set(field, value);
        }
        Feedback::Refreshed
    }

    fn submit(&mut self) -> Feedback {
        let editing_id = match self.store.mode() {
            UiMode::Browsing => return Feedback::Refreshed,
            UiMode::Adding => None,
            UiMode::Editing(snapshot) => Some(snapshot.id),
        };

        let result = match editing_id {
            None => self.store.add(self.form.clone()).map(|_| ()),
            Some(id) => {
                let record = Employee::from_fields(id, self.form.clone());
                self.store.update(record).map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.form = EmployeeFields::default();
                Feedback::Refreshed
            }
            Err(err) => Feedback::Alert(err.user_message()),
        }
    }

    fn answer_delete(&mut self, answer: Confirmation) -> Feedback {
        let Some(pending) = self.pending_delete.take() else {
            debug!("Delete answer without a pending request ignored");
            return Feedback::Refreshed;
        };

        match self.store.confirm_delete(pending, answer) {
            Ok(DeleteOutcome::Removed(employee)) => {
                info!(employee_id = %employee.id, name = %employee.name, "Employee removed from directory");
                if self.store.mode().is_browsing() {
                    self.form = EmployeeFields::default();
                }
                Feedback::Refreshed
            }
            Ok(DeleteOutcome::Declined | DeleteOutcome::NotFound) => Feedback::Refreshed,
            Err(err) => Feedback::Alert(err.user_message()),
        }
    }
}
