//! Source priority labels mapped onto the three destination levels

use crate::core::format::SourceFormat;
use crate::entities::Priority;

/// Map a source priority label. Matching is exact; anything unknown is normal.
pub fn map_priority(format: SourceFormat, label: &str) -> Priority {
    match format {
        SourceFormat::FlatCase => match label {
            "P0-Critical" | "P1-High" => Priority::High,
            "P2-Medium" | "P3-Moderate" => Priority::Normal,
            "P4-Low" => Priority::Low,
            _ => Priority::Normal,
        },
        SourceFormat::GroupedSteps => match label {
            "Blocker" | "Critical" => Priority::High,
            "Major" | "Minor" => Priority::Normal,
            "Trivial" => Priority::Low,
            _ => Priority::Normal,
        },
    }
}
