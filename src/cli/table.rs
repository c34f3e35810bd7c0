//! Preview table for dry runs

use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{first_line, truncate_str};
use crate::convert::Conversion;

/// Column width for titles and folders before truncation
const TEXT_WIDTH: usize = 40;

/// Render ID, Title, Folder, Priority and section count for each case
pub fn preview_table(conversion: &Conversion) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Title", "Folder", "Priority", "Sections"]);
    for record in &conversion.records {
        builder.push_record([
            record.id.clone(),
            truncate_str(first_line(&record.title), TEXT_WIDTH),
            truncate_str(first_line(&record.folder), TEXT_WIDTH),
            record.priority.to_string(),
            record.sections.len().to_string(),
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}
