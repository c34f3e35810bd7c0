//! Locate the header row beneath any export preamble

use tracing::debug;

use crate::core::error::{ConvertError, Result};

/// Split a line on commas and semicolons, then trim and unquote each field.
///
/// Quoted delimiters are not respected; this is only used to recognize the
/// header, never to read data.
fn header_fields(line: &str) -> Vec<&str> {
    line.split([',', ';']).map(unquote).collect()
}

/// Trim, strip at most one quote character from each end, then trim again
fn unquote(field: &str) -> &str {
    let field = field.trim();
    let field = field.strip_prefix(['"', '\'']).unwrap_or(field);
    field.strip_suffix(['"', '\'']).unwrap_or(field).trim()
}

/// Return the index of the first line naming every required column
pub fn locate_header(lines: &[&str], required: &[&str]) -> Result<usize> {
    for (idx, line) in lines.iter().enumerate() {
        let fields = header_fields(line);
        if required.iter().all(|col| fields.contains(col)) {
            debug!(line = idx, "located header row");
            return Ok(idx);
        }
    }

    Err(ConvertError::HeaderNotFound {
        required: required.iter().map(|s| s.to_string()).collect(),
        first_line: lines.first().map(|l| l.trim_end().to_string()).unwrap_or_default(),
    })
}

/// Drop everything above the header row.
///
/// Returns the header's line index together with the text from the header
/// onward.
pub fn strip_preamble<'a>(text: &'a str, required: &[&str]) -> Result<(usize, &'a str)> {
    let lines: Vec<&str> = text.split('\n').collect();
    let idx = locate_header(&lines, required)?;
    let offset: usize = lines[..idx].iter().map(|l| l.len() + 1).sum();
    Ok((idx, &text[offset..]))
}
