//! Multi-section description for flat exports

use crate::convert::markup::normalize;
use crate::convert::parser::Row;
use crate::core::format::FlatColumn;
use crate::entities::Section;

/// Source column behind each section, in output order
const SECTIONS: &[(&str, FlatColumn)] = &[
    ("Precondition", FlatColumn::Precondition),
    ("Description", FlatColumn::Description),
    ("Expected Results", FlatColumn::Expected),
];

/// Build the Precondition, Description and Expected Results sections.
///
/// A section appears only when its field has content after normalization.
pub fn compose_sections(row: &Row<'_>) -> Vec<Section> {
    SECTIONS
        .iter()
        .filter_map(|(title, column)| {
            let body = normalize(row.get(*column));
            (!body.is_empty()).then(|| Section::new(*title, body))
        })
        .collect()
}
