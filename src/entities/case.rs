//! Normalized test case record

use crate::core::format::SourceFormat;

/// Priority levels understood by the destination platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A titled block of a composed description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Markdown heading with the body on the very next line
    pub fn render(&self) -> String {
        if self.body.is_empty() {
            format!("## {}", self.title)
        } else {
            format!("## {}\n{}", self.title, self.body)
        }
    }
}

/// A test case after aggregation, ready for projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    /// Source layout the record was built from
    pub format: SourceFormat,
    pub id: String,
    pub title: String,
    pub folder: String,
    pub priority: Priority,
    /// Comma-joined tag list
    pub tags: String,
    pub owner: String,
    pub sections: Vec<Section>,
    pub labels: String,
}

impl CaseRecord {
    pub fn new(format: SourceFormat, id: impl Into<String>) -> Self {
        Self {
            format,
            id: id.into(),
            title: String::new(),
            folder: String::new(),
            priority: Priority::default(),
            tags: String::new(),
            owner: String::new(),
            sections: Vec::new(),
            labels: String::new(),
        }
    }

    /// Render the sections into the description cell.
    ///
    /// Flat exports separate sections with a blank line; step exports
    /// produce one contiguous newline-joined block.
    pub fn description(&self) -> String {
        let separator = match self.format {
            SourceFormat::FlatCase => "\n\n",
            SourceFormat::GroupedSteps => "\n",
        };
        self.sections
            .iter()
            .map(Section::render)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
