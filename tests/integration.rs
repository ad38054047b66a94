//! Integration tests for the employee directory.
//!
//! This test suite covers:
//! - Loading the shipped configuration into a store
//! - Add / update / delete scenarios against the seeded directory
//! - Validation rejections leaving the directory unchanged
//! - Full form-driven sessions through the controller
//! - Property tests over arbitrary operation sequences

use std::collections::HashSet;

use proptest::prelude::*;

use employee_directory::config::{ConfigLoader, MissingIdPolicy};
use employee_directory::controller::{DirectoryController, Feedback, Intent};
use employee_directory::error::{DirectoryError, ValidationError};
use employee_directory::models::{Employee, EmployeeFields, EmployeeId, Field, UiMode};
use employee_directory::store::{Confirmation, DeleteOutcome, EmployeeStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn john() -> Employee {
    Employee::from_fields(
        EmployeeId::new(1),
        EmployeeFields::new("John Doe", "Developer", "IT", "john@company.com"),
    )
}

fn single_john_store() -> EmployeeStore {
    EmployeeStore::with_employees(vec![john()]).expect("valid seed")
}

fn shipped_store() -> EmployeeStore {
    let loader = ConfigLoader::load("./config/directory.yaml").expect("Failed to load config");
    EmployeeStore::from_config(loader.config()).expect("valid seed")
}

fn ids_are_unique(store: &EmployeeStore) -> bool {
    let mut seen = HashSet::new();
    store.employees().iter().all(|e| seen.insert(e.id))
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_shipped_config_seeds_two_employees() {
    let store = shipped_store();

    assert_eq!(store.len(), 2);
    assert_eq!(store.employees()[0].name, "John Doe");
    assert_eq!(store.employees()[1].email, "jane@company.com");
    assert_eq!(store.missing_id_policy(), MissingIdPolicy::Ignore);
    assert_eq!(store.mode(), &UiMode::Browsing);
}

// =============================================================================
// Store scenarios
// =============================================================================

#[test]
fn test_add_scenario_assigns_fresh_id() {
    let mut store = single_john_store();

    store.begin_add();
    let id = store
        .add(EmployeeFields::new("Amy", "QA", "QA", "amy@co.com"))
        .unwrap();

    assert_eq!(store.len(), 2);
    let amy = &store.employees()[1];
    assert_eq!(amy.id, id);
    assert_ne!(amy.id, EmployeeId::new(1));
    assert_eq!(amy.name, "Amy");
    assert_eq!(amy.email, "amy@co.com");
}

#[test]
fn test_update_scenario_changes_only_target() {
    let mut store = single_john_store();
    store
        .add(EmployeeFields::new("Amy", "QA", "QA", "amy@co.com"))
        .unwrap();
    let amy_before = store.employees()[1].clone();

    store.begin_edit(&john());
    store
        .update(Employee::from_fields(
            EmployeeId::new(1),
            EmployeeFields::new("John D.", "Lead Dev", "IT", "john@company.com"),
        ))
        .unwrap();

    let updated = store.get(EmployeeId::new(1)).unwrap();
    assert_eq!(updated.position, "Lead Dev");
    assert_eq!(updated.name, "John D.");
    assert_eq!(store.employees()[0].id, EmployeeId::new(1));
    assert_eq!(store.employees()[1], amy_before);
}

#[test]
fn test_bad_emails_are_rejected_on_add_and_update() {
    for email in ["no-at-sign.com", "a@b"] {
        let mut store = single_john_store();

        let added = store.add(EmployeeFields::new("Amy", "QA", "QA", email));
        assert!(matches!(
            added,
            Err(DirectoryError::Validation(ValidationError::InvalidEmail))
        ));

        let mut record = john();
        record.email = email.to_string();
        assert!(matches!(
            store.update(record),
            Err(DirectoryError::Validation(ValidationError::InvalidEmail))
        ));

        assert_eq!(store.employees(), &[john()]);
    }
}

#[test]
fn test_confirmed_and_declined_deletes() {
    let mut store = shipped_store();

    let pending = store.request_delete(EmployeeId::new(2));
    assert_eq!(
        store.confirm_delete(pending, Confirmation::Declined).unwrap(),
        DeleteOutcome::Declined
    );
    assert_eq!(store.len(), 2);

    let pending = store.request_delete(EmployeeId::new(2));
    let outcome = store.confirm_delete(pending, Confirmation::Confirmed).unwrap();
    assert!(matches!(outcome, DeleteOutcome::Removed(e) if e.name == "Jane Smith"));
    assert_eq!(store.len(), 1);
    assert!(store.get(EmployeeId::new(2)).is_none());
}

// =============================================================================
// Controller sessions
// =============================================================================

#[test]
fn test_full_session_through_controller() {
    let mut controller = DirectoryController::new(shipped_store());

    // Add with a typo in the email, fix it, submit again.
    controller.dispatch(Intent::BeginAdd);
    for (field, value) in [
        (Field::Name, "Amy"),
        (Field::Position, "QA"),
        (Field::Department, "QA"),
        (Field::Email, "amy-at-co.com"),
    ] {
        controller.dispatch(Intent::SetField(field, value.to_string()));
    }
    assert_eq!(
        controller.dispatch(Intent::Submit),
        Feedback::Alert("Please enter a valid email address".to_string())
    );
    controller.dispatch(Intent::SetField(Field::Email, "amy@co.com".to_string()));
    assert_eq!(controller.dispatch(Intent::Submit), Feedback::Refreshed);

    let amy_id = controller.view().employees[2].id;

    // Edit Amy's department.
    controller.dispatch(Intent::BeginEdit(amy_id));
    controller.dispatch(Intent::SetField(Field::Department, "Quality".to_string()));
    controller.dispatch(Intent::Submit);
    assert_eq!(controller.store().get(amy_id).unwrap().department, "Quality");

    // Delete John after confirming.
    let prompt = controller.dispatch(Intent::RequestDelete(EmployeeId::new(1)));
    assert!(matches!(prompt, Feedback::ConfirmationRequired(_)));
    controller.dispatch(Intent::AnswerDelete(Confirmation::Confirmed));

    let names: Vec<&str> = controller
        .view()
        .employees
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Jane Smith", "Amy"]);
    assert!(controller.view().shows_list());
}

// =============================================================================
// Properties
// =============================================================================

fn valid_fields() -> impl Strategy<Value = EmployeeFields> {
    (
        "[A-Za-z][A-Za-z .'-]{0,20}",
        "[A-Za-z][A-Za-z ]{0,15}",
        "[A-Za-z][A-Za-z ]{0,15}",
        "[a-z0-9._]{1,10}@[a-z0-9]{1,10}\\.[a-z]{2,5}",
    )
        .prop_map(|(name, position, department, email)| {
            EmployeeFields::new(name, position, department, email)
        })
}

#[derive(Debug, Clone)]
enum Op {
    Add(EmployeeFields),
    Update(usize, EmployeeFields),
    Delete(usize, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        valid_fields().prop_map(Op::Add),
        (any::<usize>(), valid_fields()).prop_map(|(i, f)| Op::Update(i, f)),
        (any::<usize>(), any::<bool>()).prop_map(|(i, yes)| Op::Delete(i, yes)),
    ]
}

proptest! {
    #[test]
    fn prop_valid_add_grows_by_one(fields in valid_fields()) {
        let mut store = single_john_store();
        let id = store.add(fields.clone()).unwrap();

        prop_assert_eq!(store.len(), 2);
        let added = store.get(id).unwrap();
        prop_assert_eq!(added.fields(), fields);
    }

    #[test]
    fn prop_empty_field_is_rejected(fields in valid_fields(), index in 0usize..4) {
        let mut store = single_john_store();
        let mut candidate = fields;
        candidate.set(Field::ALL[index], "");

        prop_assert!(matches!(
            store.add(candidate.clone()),
            Err(DirectoryError::Validation(ValidationError::MissingFields))
        ));
        prop_assert!(matches!(
            store.update(Employee::from_fields(EmployeeId::new(1), candidate)),
            Err(DirectoryError::Validation(ValidationError::MissingFields))
        ));
        prop_assert_eq!(store.employees(), &[john()]);
    }

    #[test]
    fn prop_update_preserves_order_and_size(fields in valid_fields(), extra in 1usize..5, pick in any::<usize>()) {
        let mut store = single_john_store();
        for n in 0..extra {
            store.add(EmployeeFields::new(format!("E{n}"), "P", "D", format!("e{n}@co.com"))).unwrap();
        }
        let before: Vec<EmployeeId> = store.employees().iter().map(|e| e.id).collect();
        let target = before[pick % before.len()];

        store.update(Employee::from_fields(target, fields.clone())).unwrap();

        let after: Vec<EmployeeId> = store.employees().iter().map(|e| e.id).collect();
        prop_assert_eq!(&after, &before);
        prop_assert_eq!(store.get(target).unwrap().fields(), fields);
    }

    #[test]
    fn prop_ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = single_john_store();
        let mut issued = HashSet::from([EmployeeId::new(1)]);

        for op in ops {
            match op {
                Op::Add(fields) => {
                    let id = store.add(fields).unwrap();
                    prop_assert!(issued.insert(id), "id {} issued twice", id);
                }
                Op::Update(i, fields) if !store.is_empty() => {
                    let id = store.employees()[i % store.len()].id;
                    store.update(Employee::from_fields(id, fields)).unwrap();
                }
                Op::Delete(i, yes) if !store.is_empty() => {
                    let before = store.len();
                    let id = store.employees()[i % before].id;
                    let pending = store.request_delete(id);
                    store.confirm_delete(pending, Confirmation::from(yes)).unwrap();
                    prop_assert_eq!(store.len(), if yes { before - 1 } else { before });
                }
                _ => {}
            }
            prop_assert!(ids_are_unique(&store));
        }
    }
}
