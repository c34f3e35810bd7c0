//! Conversion errors with diagnostic codes

use miette::Diagnostic;
use thiserror::Error;

/// Every failure the conversion pipeline can report
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error(
        "could not find a header row with required columns: {} (first line: {first_line:?})",
        .required.join(", ")
    )]
    #[diagnostic(
        code(tcmconv::header_not_found),
        help("the header must name every required column, separated by commas")
    )]
    HeaderNotFound {
        required: Vec<String>,
        first_line: String,
    },

    #[error(
        "missing required column(s): {} (found: {})",
        .missing.join(", "),
        .found.join(", ")
    )]
    #[diagnostic(
        code(tcmconv::missing_columns),
        help("check the delimiter and the --format option")
    )]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("no data rows found after the header")]
    #[diagnostic(code(tcmconv::no_records))]
    NoRecords,

    #[error("row {row}: step row appears before any test case was opened")]
    #[diagnostic(
        code(tcmconv::orphan_step_row),
        help("the first data row must carry a non-empty 'Test Case Summary'")
    )]
    OrphanStepRow { row: usize },

    #[error("row {row}: column '{column}' is empty or absent")]
    #[diagnostic(code(tcmconv::malformed_field))]
    MalformedField { row: usize, column: String },

    #[error("CSV error: {0}")]
    #[diagnostic(code(tcmconv::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(tcmconv::io))]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the pipeline
pub type Result<T> = std::result::Result<T, ConvertError>;
