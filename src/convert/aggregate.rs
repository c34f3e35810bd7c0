//! Fold one-row-per-step exports into test cases
//!
//! A row with a non-empty `Test Case Summary` opens a new case and closes the
//! previous one. Every row, opening or not, may also carry a step or a
//! precondition which is appended to the case that is currently open.

use tracing::debug;

use crate::convert::parser::Row;
use crate::convert::priority::map_priority;
use crate::core::error::{ConvertError, Result};
use crate::core::format::{SourceFormat, StepColumn};
use crate::entities::{CaseRecord, Section};

/// Marker that turns a step description into a precondition
pub const PRECONDITION_MARKER: &str = "Preconditions:";

/// Prefix put in front of the source entity key
pub const ID_PREFIX: &str = "TS";

const PRECONDITION_TITLE: &str = "Precondition";
const STEPS_TITLE: &str = "Steps";

/// A case still receiving step rows
#[derive(Debug)]
struct OpenCase {
    record: CaseRecord,
    has_steps: bool,
}

impl OpenCase {
    fn open(row: &Row<'_>) -> Result<Self> {
        let key = row.require(StepColumn::EntityKey)?;
        let mut record =
            CaseRecord::new(SourceFormat::GroupedSteps, format!("{}{}", ID_PREFIX, key));
        record.title = row.get(StepColumn::Summary).to_string();
        record.folder = row.get(StepColumn::FolderPath).to_string();
        record.priority = map_priority(SourceFormat::GroupedSteps, row.get(StepColumn::Priority));
        record.tags = normalize_tags(row.get(StepColumn::Labels));
        record.owner = owner_name(row.get(StepColumn::CreatedBy));
        Ok(Self {
            record,
            has_steps: false,
        })
    }

    fn add_precondition(&mut self, text: &str) {
        if !text.is_empty() {
            self.record
                .sections
                .push(Section::new(PRECONDITION_TITLE, text));
        }
    }

    /// Append a step bullet to the end of the description, opening the
    /// Steps section the first time
    fn add_step(&mut self, description: &str, expected: &str) {
        if !self.has_steps {
            self.record.sections.push(Section::new(STEPS_TITLE, ""));
            self.has_steps = true;
        }
        let mut lines = format!("* {}", description);
        if !expected.is_empty() {
            lines.push_str(&format!("\n  *Expected:* {}", expected));
        }
        if let Some(last) = self.record.sections.last_mut() {
            if last.body.is_empty() {
                last.body = lines;
            } else {
                last.body.push('\n');
                last.body.push_str(&lines);
            }
        }
    }

    fn finish(self) -> CaseRecord {
        self.record
    }
}

/// Split labels on commas, trim each and rejoin without blanks
fn normalize_tags(labels: &str) -> String {
    labels
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Drop a bracketed annotation such as `Jane Doe [jane@example.com]`
fn owner_name(created_by: &str) -> String {
    created_by
        .split('[')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Aggregator state threaded through the fold
#[derive(Debug, Default)]
pub struct Aggregation {
    current: Option<OpenCase>,
    finished: Vec<CaseRecord>,
}

impl Aggregation {
    /// Feed one row into the state machine
    pub fn step(mut self, row: &Row<'_>) -> Result<Self> {
        if !row.get(StepColumn::Summary).is_empty() {
            if let Some(previous) = self.current.take() {
                self.finished.push(previous.finish());
            }
            self.current = Some(OpenCase::open(row)?);
        }

        let description = row.get(StepColumn::StepDescription);
        let expected = row.get(StepColumn::StepExpected);
        let precondition = description
            .find(PRECONDITION_MARKER)
            .map(|idx| description[idx + PRECONDITION_MARKER.len()..].trim());

        if precondition.is_none() && description.is_empty() {
            return Ok(self);
        }

        let case = self
            .current
            .as_mut()
            .ok_or(ConvertError::OrphanStepRow { row: row.line() })?;

        match precondition {
            Some(text) => case.add_precondition(text),
            None => case.add_step(description, expected),
        }
        Ok(self)
    }

    /// Close the open case and return every case in input order
    pub fn finish(mut self) -> Vec<CaseRecord> {
        if let Some(last) = self.current.take() {
            self.finished.push(last.finish());
        }
        debug!(cases = self.finished.len(), "aggregated step rows");
        self.finished
    }
}

/// Fold step rows into case records
pub fn aggregate<'a>(rows: impl IntoIterator<Item = Row<'a>>) -> Result<Vec<CaseRecord>> {
    rows.into_iter()
        .try_fold(Aggregation::default(), |state, row| state.step(&row))
        .map(Aggregation::finish)
}
