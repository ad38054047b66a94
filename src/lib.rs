//! Employee Directory
//!
//! This crate provides an in-memory employee directory: an ordered list of
//! employee records that can be listed, added, edited and deleted, with
//! field validation in front of every create and update.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
