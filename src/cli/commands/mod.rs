//! CLI command implementations

pub mod completions;
pub mod convert;
pub mod template;
