//! Conversion pipeline: raw export text to destination CSV
//!
//! ```text
//! text ─► header (flat only) ─► parser ─► aggregate (grouped only)
//!      ─► priority + description per record ─► projector ─► CSV
//! ```

pub mod aggregate;
pub mod description;
pub mod flat;
pub mod header;
pub mod markup;
pub mod parser;
pub mod priority;
pub mod projector;

use csv::WriterBuilder;
use std::io::Write;
use tracing::debug;

use crate::core::error::Result;
use crate::core::format::SourceFormat;
use crate::entities::CaseRecord;

pub use aggregate::aggregate;
pub use flat::flat_record;
pub use header::{locate_header, strip_preamble};
pub use markup::normalize;
pub use parser::{parse_table, Row, Table};
pub use priority::map_priority;
pub use projector::{output_columns, output_header, project, OutputColumn, OutputRow};

/// Outcome of converting one input
#[derive(Debug)]
pub struct Conversion {
    pub format: SourceFormat,
    /// Data rows read from the source, blank lines excluded
    pub rows_read: usize,
    /// Finalized cases in input order
    pub records: Vec<CaseRecord>,
}

impl Conversion {
    /// Projected output rows in record order
    pub fn rows(&self) -> impl Iterator<Item = OutputRow> + '_ {
        self.records.iter().map(project)
    }

    /// Serialize header plus rows as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(output_header(self.format))?;
        for row in self.rows() {
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render the whole CSV in memory
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(buf)
    }
}

/// Convert the full text of an export in the given format
pub fn convert(text: &str, format: SourceFormat) -> Result<Conversion> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    debug!(%format, bytes = text.len(), "converting");

    let table = match format {
        SourceFormat::FlatCase => {
            let (header_idx, rest) = strip_preamble(text, format.required_columns())?;
            parse_table(rest, header_idx)?
        }
        SourceFormat::GroupedSteps => parse_table(text, 0)?,
    };

    table.require_columns(format.required_columns())?;
    table.audit_columns(&format.known_columns());

    let records = match format {
        SourceFormat::FlatCase => table
            .rows()
            .map(|row| flat_record(&row))
            .collect::<Result<Vec<_>>>()?,
        SourceFormat::GroupedSteps => aggregate(table.rows())?,
    };

    Ok(Conversion {
        format,
        rows_read: table.len(),
        records,
    })
}
