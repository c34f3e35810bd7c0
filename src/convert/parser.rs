//! Delimited text into header-keyed rows

use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::core::error::{ConvertError, Result};
use crate::core::format::Column;

/// Parsed input: trimmed header names plus the data records beneath them
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    header_map: HashMap<String, usize>,
    records: Vec<(usize, StringRecord)>,
}

/// A single data row, looked up by column name
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    header_map: &'a HashMap<String, usize>,
    record: &'a StringRecord,
    line: usize,
}

/// Build a map from trimmed header name to column index.
///
/// When two columns trim to the same name the later one wins.
pub fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (i, h) in headers.iter().enumerate() {
        if map.insert(h.trim().to_string(), i).is_some() {
            warn!(column = h.trim(), "duplicate column name, using the last one");
        }
    }
    map
}

/// 1-based line of the record starting at `byte`, counting blank lines.
///
/// The reader may report the start of skipped blank lines, so leading line
/// breaks are stepped over first.
fn line_at(text: &str, byte: usize) -> usize {
    let start = byte.min(text.len());
    let skipped = text[start..]
        .find(|c: char| c != '\n' && c != '\r')
        .unwrap_or(text.len() - start);
    let start = start + skipped;
    text.as_bytes()[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Parse comma-delimited text whose first line is the header.
///
/// Quoting is read leniently: a stray quote inside a field is kept as text
/// rather than aborting. Blank lines are skipped. `line_offset` is the
/// number of lines dropped above the header, so reported row numbers match
/// the input file.
pub fn parse_table(text: &str, line_offset: usize) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let header_record = rdr.headers()?.clone();
    let header_map = build_header_map(&header_record);
    let headers: Vec<String> = header_record.iter().map(|h| h.trim().to_string()).collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|p| line_at(text, p.byte() as usize))
            .unwrap_or(records.len() + 2)
            + line_offset;
        records.push((line, record));
    }

    debug!(columns = headers.len(), rows = records.len(), "parsed table");

    if records.is_empty() {
        return Err(ConvertError::NoRecords);
    }

    Ok(Table {
        headers,
        header_map,
        records,
    })
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.header_map.contains_key(name)
    }

    /// Fail unless every required column is present, listing all that are not
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|col| !self.has_column(col))
            .map(|col| col.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConvertError::MissingColumns {
                missing,
                found: self.headers.clone(),
            })
        }
    }

    /// Log known optional columns that are absent and columns nobody reads
    pub fn audit_columns(&self, known: &[&str]) {
        for col in known {
            if !self.has_column(col) {
                warn!(column = *col, "column not present, values will be empty");
            }
        }
        for header in &self.headers {
            if !known.contains(&header.as_str()) {
                debug!(column = %header, "ignoring unrecognized column");
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |(line, record)| Row {
            header_map: &self.header_map,
            record,
            line: *line,
        })
    }
}

impl<'a> Row<'a> {
    /// Line of the source file this row came from (1-based)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Raw value by column name; absent columns and short rows give None
    pub fn get_name(&self, name: &str) -> Option<&'a str> {
        self.header_map
            .get(name)
            .and_then(|&idx| self.record.get(idx))
    }

    /// Raw value of a known column, empty when absent
    pub fn get<C: Column>(&self, column: C) -> &'a str {
        self.get_name(column.as_str()).unwrap_or_default()
    }

    /// Trimmed value of a known column, `MalformedField` when blank or absent
    pub fn require<C: Column>(&self, column: C) -> Result<&'a str> {
        self.get_name(column.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConvertError::MalformedField {
                row: self.line,
                column: column.as_str().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::FlatColumn;

    #[test]
    fn test_headers_are_trimmed() {
        let table = parse_table(" Case ID , Case ,Folder\n1,Login,Auth\n", 0).unwrap();
        assert_eq!(table.headers(), &["Case ID", "Case", "Folder"]);
        let row = table.rows().next().unwrap();
        assert_eq!(row.get(FlatColumn::CaseId), "1");
        assert_eq!(row.get(FlatColumn::Case), "Login");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let table = parse_table("Case ID,Case,Folder\n1, Login ,Auth\n", 0).unwrap();
        assert_eq!(table.rows().next().unwrap().get(FlatColumn::Case), " Login ");
    }

    #[test]
    fn test_relaxed_quotes() {
        let text = "Case ID,Case,Folder\n1,Click the \"Save\" button,Auth\n2,\"quoted, with comma\",Auth\n";
        let table = parse_table(text, 0).unwrap();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(FlatColumn::Case), "Click the \"Save\" button");
        assert_eq!(rows[1].get(FlatColumn::Case), "quoted, with comma");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "Case ID,Case,Folder\n\n1,a,b\n\n\n2,c,d\n";
        let table = parse_table(text, 0).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let table = parse_table("Case ID,Case,Folder,Tags\n1,a\n", 0).unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get(FlatColumn::Folder), "");
        assert_eq!(row.get_name("Tags"), None);
    }

    #[test]
    fn test_header_only_is_no_records() {
        let err = parse_table("Case ID,Case,Folder\n", 0).unwrap_err();
        assert!(matches!(err, ConvertError::NoRecords));
        let err = parse_table("", 0).unwrap_err();
        assert!(matches!(err, ConvertError::NoRecords));
    }

    #[test]
    fn test_require_columns_lists_all_missing() {
        let table = parse_table("Case ID;Case;Folder\n1;a;b\n", 0).unwrap();
        let err = table.require_columns(&["Case ID", "Case", "Folder"]).unwrap_err();
        match err {
            ConvertError::MissingColumns { missing, found } => {
                assert_eq!(missing, vec!["Case ID", "Case", "Folder"]);
                assert_eq!(found, vec!["Case ID;Case;Folder"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_line_numbers_include_offset() {
        let table = parse_table("Case ID,Case,Folder\n1,a,b\n\n2,c,d\n", 3).unwrap();
        let lines: Vec<usize> = table.rows().map(|r| r.line()).collect();
        assert_eq!(lines, vec![5, 7]);
    }

    #[test]
    fn test_line_numbers_after_blank_lines() {
        let text = "Case ID,Case,Folder\n\n\n1,a,b\r\n\r\n ,c,d\n";
        let table = parse_table(text, 0).unwrap();
        let lines: Vec<usize> = table.rows().map(|r| r.line()).collect();
        assert_eq!(lines, vec![4, 6]);
        let err = table.rows().nth(1).unwrap().require(FlatColumn::CaseId).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedField { row: 6, .. }));
    }

    #[test]
    fn test_line_at() {
        let text = "h\n\nrow\n";
        assert_eq!(line_at(text, 0), 1);
        assert_eq!(line_at(text, 2), 3);
        assert_eq!(line_at(text, 3), 3);
        assert_eq!(line_at(text, 100), 4);
    }

    #[test]
    fn test_require_reports_row() {
        let table = parse_table("Case ID,Case,Folder\n ,a,b\n", 0).unwrap();
        let err = table.rows().next().unwrap().require(FlatColumn::CaseId).unwrap_err();
        match err {
            ConvertError::MalformedField { row, column } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Case ID");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let table = parse_table("Case ID,Case,Folder, Case\n1,first,f,second\n", 0).unwrap();
        assert_eq!(table.rows().next().unwrap().get(FlatColumn::Case), "second");
    }
}
