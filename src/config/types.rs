//! Configuration types for the employee directory.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// What update and delete do when no employee has the requested id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingIdPolicy {
    /// Leave the collection unchanged and report nothing.
    #[default]
    Ignore,
    /// Fail with `EmployeeNotFound`.
    Reject,
}

/// Directory configuration.
///
/// Every key is optional; an empty file yields the default configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryConfig {
    /// Handling of update/delete against unknown ids.
    #[serde(default)]
    pub missing_id_policy: MissingIdPolicy,
    /// Employees present when the store is constructed, in display order.
    #[serde(default)]
    pub seed: Vec<Employee>,
}
