//! Entity types produced by the conversion pipeline

pub mod case;

pub use case::{CaseRecord, Priority, Section};
