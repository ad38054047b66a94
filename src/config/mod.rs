//! Configuration loading for the employee directory.
//!
//! Configuration covers the employees present at startup and how unknown
//! ids are treated by update and delete.
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/directory.yaml").unwrap();
//! println!("Seed employees: {}", loader.config().seed.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DirectoryConfig, MissingIdPolicy};
