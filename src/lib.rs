//! tcmconv: test case export converter
//!
//! Normalizes test-case exports from third-party test-management tools into
//! the CSV import layout of a destination platform.

pub mod cli;
pub mod convert;
pub mod core;
pub mod entities;
