//! One-row-per-case exports into case records

use crate::convert::description::compose_sections;
use crate::convert::parser::Row;
use crate::convert::priority::map_priority;
use crate::core::error::Result;
use crate::core::format::{FlatColumn, SourceFormat};
use crate::entities::CaseRecord;

/// Width the source case identifier is zero-padded to
pub const ID_WIDTH: usize = 8;

/// Right-justify an identifier with zeros; longer identifiers are kept whole
pub fn pad_case_id(id: &str) -> String {
    format!("{:0>width$}", id, width = ID_WIDTH)
}

/// Build a case record from a single flat row
pub fn flat_record(row: &Row<'_>) -> Result<CaseRecord> {
    let case_id = row.require(FlatColumn::CaseId)?;

    let mut record = CaseRecord::new(SourceFormat::FlatCase, pad_case_id(case_id));
    record.title = row.get(FlatColumn::Case).to_string();
    record.folder = row.get(FlatColumn::Folder).to_string();
    record.priority = map_priority(SourceFormat::FlatCase, row.get(FlatColumn::Priority));
    record.tags = row.get(FlatColumn::Tags).to_string();
    record.owner = row.get(FlatColumn::CreatedBy).to_string();
    record.sections = compose_sections(row);
    record.labels = row.get(FlatColumn::TestType).to_string();
    Ok(record)
}
