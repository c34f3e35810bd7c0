//! Case records onto the destination's fixed column layout

use crate::core::format::SourceFormat;
use crate::entities::CaseRecord;

/// Status written for every flat case; automation state is not carried over
pub const MANUAL_STATUS: &str = "manual";

/// A column of the destination import file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputColumn {
    Id,
    Title,
    Status,
    Folder,
    Emoji,
    Priority,
    Tags,
    Owner,
    Description,
    Examples,
    Labels,
    Url,
    Matched,
}

impl OutputColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputColumn::Id => "ID",
            OutputColumn::Title => "Title",
            OutputColumn::Status => "Status",
            OutputColumn::Folder => "Folder",
            OutputColumn::Emoji => "Emoji",
            OutputColumn::Priority => "Priority",
            OutputColumn::Tags => "Tags",
            OutputColumn::Owner => "Owner",
            OutputColumn::Description => "Description",
            OutputColumn::Examples => "Examples",
            OutputColumn::Labels => "Labels",
            OutputColumn::Url => "Url",
            OutputColumn::Matched => "Matched",
        }
    }

    /// Cell value for a record; `description` is the pre-rendered sections
    fn value(&self, record: &CaseRecord, description: &str) -> String {
        match self {
            OutputColumn::Id => record.id.clone(),
            OutputColumn::Title => record.title.clone(),
            OutputColumn::Status => MANUAL_STATUS.to_string(),
            OutputColumn::Folder => record.folder.clone(),
            OutputColumn::Priority => record.priority.to_string(),
            OutputColumn::Tags => record.tags.clone(),
            OutputColumn::Owner => record.owner.clone(),
            OutputColumn::Description => description.to_string(),
            OutputColumn::Labels => record.labels.clone(),
            // Reserved by the destination, always written empty
            OutputColumn::Emoji
            | OutputColumn::Examples
            | OutputColumn::Url
            | OutputColumn::Matched => String::new(),
        }
    }
}

const FLAT_COLUMNS: &[OutputColumn] = &[
    OutputColumn::Id,
    OutputColumn::Title,
    OutputColumn::Status,
    OutputColumn::Folder,
    OutputColumn::Emoji,
    OutputColumn::Priority,
    OutputColumn::Tags,
    OutputColumn::Owner,
    OutputColumn::Description,
    OutputColumn::Labels,
];

const GROUPED_COLUMNS: &[OutputColumn] = &[
    OutputColumn::Id,
    OutputColumn::Title,
    OutputColumn::Folder,
    OutputColumn::Emoji,
    OutputColumn::Priority,
    OutputColumn::Tags,
    OutputColumn::Owner,
    OutputColumn::Description,
    OutputColumn::Examples,
    OutputColumn::Labels,
    OutputColumn::Url,
    OutputColumn::Matched,
];

/// One output line, values aligned with `output_columns`
pub type OutputRow = Vec<String>;

/// Destination layout for records derived from the given source format
pub fn output_columns(format: SourceFormat) -> &'static [OutputColumn] {
    match format {
        SourceFormat::FlatCase => FLAT_COLUMNS,
        SourceFormat::GroupedSteps => GROUPED_COLUMNS,
    }
}

/// Header line for the given source format
pub fn output_header(format: SourceFormat) -> Vec<&'static str> {
    output_columns(format).iter().map(OutputColumn::as_str).collect()
}

/// Project a record onto the column layout of its source format
pub fn project(record: &CaseRecord) -> OutputRow {
    let description = record.description();
    output_columns(record.format)
        .iter()
        .map(|column| column.value(record, &description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Priority, Section};

    fn sample(format: SourceFormat) -> CaseRecord {
        let mut record = CaseRecord::new(format, "00000007");
        record.title = "Login works".to_string();
        record.folder = "Auth".to_string();
        record.priority = Priority::High;
        record.tags = "smoke".to_string();
        record.owner = "Jane".to_string();
        record.labels = "Functional".to_string();
        record.sections.push(Section::new("Description", "text"));
        record
    }

    #[test]
    fn test_flat_projection() {
        let row = project(&sample(SourceFormat::FlatCase));
        assert_eq!(output_columns(SourceFormat::FlatCase).len(), 10);
        assert_eq!(
            row,
            vec![
                "00000007",
                "Login works",
                "manual",
                "Auth",
                "",
                "high",
                "smoke",
                "Jane",
                "## Description\ntext",
                "Functional"
            ]
        );
    }

    #[test]
    fn test_grouped_projection() {
        let mut record = sample(SourceFormat::GroupedSteps);
        record.labels.clear();
        let row = project(&record);
        assert_eq!(row.len(), 12);
        assert_eq!(row.len(), output_columns(SourceFormat::GroupedSteps).len());
        assert_eq!(row[0], "00000007");
        assert_eq!(row[2], "Auth");
        assert_eq!(row[4], "high");
        for idx in [3, 8, 9, 10, 11] {
            assert_eq!(row[idx], "", "column {}", GROUPED_COLUMNS[idx].as_str());
        }
        assert!(!row.iter().any(|v| v == MANUAL_STATUS));
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            output_header(SourceFormat::FlatCase),
            vec!["ID", "Title", "Status", "Folder", "Emoji", "Priority", "Tags", "Owner", "Description", "Labels"]
        );
        assert_eq!(
            output_header(SourceFormat::GroupedSteps),
            vec!["ID", "Title", "Folder", "Emoji", "Priority", "Tags", "Owner", "Description", "Examples", "Labels", "Url", "Matched"]
        );
    }

    #[test]
    fn test_reserved_columns_stay_empty() {
        let record = sample(SourceFormat::GroupedSteps);
        for column in [
            OutputColumn::Emoji,
            OutputColumn::Examples,
            OutputColumn::Url,
            OutputColumn::Matched,
        ] {
            assert_eq!(column.value(&record, "filled"), "", "{:?}", column);
        }
        assert_eq!(OutputColumn::Description.value(&record, "filled"), "filled");
    }
}
