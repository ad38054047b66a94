//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the [`EmployeeFields`]
//! submitted by the add and edit forms, and the [`EmployeeId`] newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an employee within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// Wraps a raw id value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// The four user-editable fields of an employee record.
///
/// This is the candidate passed to `add`, and the form contents held while
/// adding or editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    /// Full name.
    pub name: String,
    /// Job position (e.g., "Developer").
    pub position: String,
    /// Department (e.g., "IT").
    pub department: String,
    /// Contact email address.
    pub email: String,
}

impl EmployeeFields {
    /// Builds a field set from anything string-like.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::EmployeeFields;
    ///
    /// let fields = EmployeeFields::new("Amy", "QA", "QA", "amy@co.com");
    /// assert_eq!(fields.name, "Amy");
    /// ```
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
            email: email.into(),
        }
    }

    /// Returns the value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Position => &self.position,
            Field::Department => &self.department,
            Field::Email => &self.email,
        }
    }

    /// Replaces the value of a single field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Position => &mut self.position,
            Field::Department => &mut self.department,
            Field::Email => &mut self.email,
        };
        *slot = value.into();
    }
}

/// Names one of the four editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The employee's name.
    Name,
    /// The employee's position.
    Position,
    /// The employee's department.
    Department,
    /// The employee's email.
    Email,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Position, Field::Department, Field::Email];
}

/// An employee held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, assigned at creation and never reused.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// Department.
    pub department: String,
    /// Contact email address.
    pub email: String,
}

impl Employee {
    /// Combines an id with a set of fields.
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            position: fields.position,
            department: fields.department,
            email: fields.email,
        }
    }

    /// Returns a copy of the editable fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::{Employee, EmployeeFields, EmployeeId};
    ///
    /// let fields = EmployeeFields::new("John Doe", "Developer", "IT", "john@company.com");
    /// let employee = Employee::from_fields(EmployeeId::new(1), fields.clone());
    /// assert_eq!(employee.fields(), fields);
    /// ```
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            email: self.email.clone(),
        }
    }
}
