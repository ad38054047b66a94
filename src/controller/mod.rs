//! Headless interaction layer for the employee directory.
//!
//! A front end forwards [`Intent`]s to a [`DirectoryController`], shows the
//! returned [`Feedback`], and renders the [`DirectoryView`].

mod dispatch;
mod intent;
mod view;

pub use dispatch::DirectoryController;
pub use intent::{Feedback, Intent};
pub use view::{DirectoryView, EMPTY_DIRECTORY_MESSAGE};
