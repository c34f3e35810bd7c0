//! Source formats and the closed column vocabulary of each

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout of the exported test cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// One row fully describes one test case
    FlatCase,
    /// A case row followed by step rows, delimited by the next case summary
    GroupedSteps,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::FlatCase => "flat",
            SourceFormat::GroupedSteps => "grouped",
        }
    }

    /// Column names that must be present for the conversion to proceed
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::FlatCase => FlatColumn::required_names(),
            SourceFormat::GroupedSteps => StepColumn::required_names(),
        }
    }

    /// Every column name the conversion reads for this format
    pub fn known_columns(&self) -> Vec<&'static str> {
        match self {
            SourceFormat::FlatCase => FlatColumn::all().iter().map(|c| c.as_str()).collect(),
            SourceFormat::GroupedSteps => StepColumn::all().iter().map(|c| c.as_str()).collect(),
        }
    }

    /// Guess the format from the first non-blank line of the input
    pub fn detect(text: &str) -> Self {
        let first = text
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or_default();
        if first.contains(StepColumn::Summary.as_str()) && first.contains(StepColumn::EntityKey.as_str())
        {
            SourceFormat::GroupedSteps
        } else {
            SourceFormat::FlatCase
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Format selection as given on the command line or in config
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    /// Detect from the header line
    #[default]
    Auto,
    /// One row per test case
    Flat,
    /// One row per step, grouped by case
    Grouped,
}

impl FormatChoice {
    /// Resolve to a concrete format, inspecting the input when set to auto
    pub fn resolve(self, text: &str) -> SourceFormat {
        match self {
            FormatChoice::Auto => SourceFormat::detect(text),
            FormatChoice::Flat => SourceFormat::FlatCase,
            FormatChoice::Grouped => SourceFormat::GroupedSteps,
        }
    }
}

impl FromStr for FormatChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(FormatChoice::Auto),
            "flat" => Ok(FormatChoice::Flat),
            "grouped" => Ok(FormatChoice::Grouped),
            _ => Err(format!(
                "Unknown format: '{}'. Supported: auto, flat, grouped",
                s
            )),
        }
    }
}

/// Anything that names a column in a source header
pub trait Column: Copy {
    fn as_str(&self) -> &'static str;
}

/// Columns of the flat one-row-per-case export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatColumn {
    CaseId,
    Case,
    Folder,
    Priority,
    Tags,
    CreatedBy,
    Precondition,
    Description,
    Expected,
    TestType,
}

impl FlatColumn {
    pub fn all() -> &'static [FlatColumn] {
        &[
            FlatColumn::CaseId,
            FlatColumn::Case,
            FlatColumn::Folder,
            FlatColumn::Priority,
            FlatColumn::Tags,
            FlatColumn::CreatedBy,
            FlatColumn::Precondition,
            FlatColumn::Description,
            FlatColumn::Expected,
            FlatColumn::TestType,
        ]
    }

    pub fn required_names() -> &'static [&'static str] {
        &["Case ID", "Case", "Folder"]
    }
}

impl Column for FlatColumn {
    fn as_str(&self) -> &'static str {
        match self {
            FlatColumn::CaseId => "Case ID",
            FlatColumn::Case => "Case",
            FlatColumn::Folder => "Folder",
            FlatColumn::Priority => "Priority",
            FlatColumn::Tags => "Tags",
            FlatColumn::CreatedBy => "Created by",
            FlatColumn::Precondition => "Pre-condition",
            FlatColumn::Description => "Description",
            FlatColumn::Expected => "Expected",
            FlatColumn::TestType => "Test Type",
        }
    }
}

/// Columns of the one-row-per-step export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepColumn {
    Summary,
    EntityKey,
    FolderPath,
    Priority,
    Labels,
    CreatedBy,
    StepDescription,
    StepExpected,
}

impl StepColumn {
    pub fn all() -> &'static [StepColumn] {
        &[
            StepColumn::Summary,
            StepColumn::EntityKey,
            StepColumn::FolderPath,
            StepColumn::Priority,
            StepColumn::Labels,
            StepColumn::CreatedBy,
            StepColumn::StepDescription,
            StepColumn::StepExpected,
        ]
    }

    pub fn required_names() -> &'static [&'static str] {
        &["Entity Key", "Test Case Summary", "Step Description"]
    }
}

impl Column for StepColumn {
    fn as_str(&self) -> &'static str {
        match self {
            StepColumn::Summary => "Test Case Summary",
            StepColumn::EntityKey => "Entity Key",
            StepColumn::FolderPath => "Test Case Folder Path",
            StepColumn::Priority => "Test Case Priority",
            StepColumn::Labels => "Label(s)",
            StepColumn::CreatedBy => "Created By",
            StepColumn::StepDescription => "Step Description",
            StepColumn::StepExpected => "Step Expected Outcome(Plain Text)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_are_known() {
        for format in [SourceFormat::FlatCase, SourceFormat::GroupedSteps] {
            let known = format.known_columns();
            for required in format.required_columns() {
                assert!(known.contains(required), "{} not known for {}", required, format);
            }
        }
    }

    #[test]
    fn test_detect_grouped() {
        let text = "Entity Key,Test Case Summary,Step Description\n1,Login,\n";
        assert_eq!(SourceFormat::detect(text), SourceFormat::GroupedSteps);
    }

    #[test]
    fn test_detect_defaults_to_flat() {
        assert_eq!(
            SourceFormat::detect("Exported on 2024-01-01\nCase ID,Case,Folder\n"),
            SourceFormat::FlatCase
        );
        assert_eq!(SourceFormat::detect(""), SourceFormat::FlatCase);
    }

    #[test]
    fn test_format_choice_parsing() {
        assert_eq!("Grouped".parse::<FormatChoice>(), Ok(FormatChoice::Grouped));
        assert_eq!("flat".parse::<FormatChoice>(), Ok(FormatChoice::Flat));
        assert!("xlsx".parse::<FormatChoice>().is_err());
    }

    #[test]
    fn test_format_choice_resolve() {
        assert_eq!(FormatChoice::Flat.resolve("Test Case Summary,Entity Key"), SourceFormat::FlatCase);
        assert_eq!(FormatChoice::Auto.resolve("Test Case Summary,Entity Key"), SourceFormat::GroupedSteps);
    }
}
