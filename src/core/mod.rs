//! Core module - errors, source formats and configuration

pub mod config;
pub mod error;
pub mod format;

pub use config::Config;
pub use error::{ConvertError, Result};
pub use format::{Column, FlatColumn, FormatChoice, SourceFormat, StepColumn};
