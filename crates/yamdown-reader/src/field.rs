//! Metadata field names.

use std::fmt;

/// A front-matter field, identified case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Date,
    Modified,
    Tags,
    Category,
    Author,
    Authors,
    Summary,
    Status,
    Slug,
    /// Any other field, stored lower-cased.
    Other(String),
}

impl Field {
    /// Identify a field from its name as written in the front-matter.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        match name.as_str() {
            "date" => Self::Date,
            "modified" => Self::Modified,
            "tags" => Self::Tags,
            "category" => Self::Category,
            "author" => Self::Author,
            "authors" => Self::Authors,
            "summary" => Self::Summary,
            "status" => Self::Status,
            "slug" => Self::Slug,
            _ => Self::Other(name),
        }
    }

    /// The normalized (lower-case) key for this field.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Date => "date",
            Self::Modified => "modified",
            Self::Tags => "tags",
            Self::Category => "category",
            Self::Author => "author",
            Self::Authors => "authors",
            Self::Summary => "summary",
            Self::Status => "status",
            Self::Slug => "slug",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
