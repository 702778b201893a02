//! Normalized metadata values.

use std::collections::BTreeMap;

use serde::Serialize;
use yamdown_core::{Author, Category, Tag, Timestamp};

/// Normalized metadata keyed by lower-case field name.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A front-matter value after normalization.
///
/// Fields without a dedicated normalizer keep their parsed YAML value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Raw(yaml_serde::Value),
    Text(String),
    /// Rendered HTML, used for `summary`.
    Html(String),
    Timestamp(Timestamp),
    Category(Category),
    Tags(Vec<Tag>),
    Author(Author),
    Authors(Vec<Author>),
}

impl MetadataValue {
    /// String content for raw strings, text, and HTML.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Raw(value) => value.as_str(),
            Self::Text(s) | Self::Html(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&yaml_serde::Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Category(category) => Some(category),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[Tag]> {
        match self {
            Self::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    pub fn as_author(&self) -> Option<&Author> {
        match self {
            Self::Author(author) => Some(author),
            _ => None,
        }
    }

    pub fn as_authors(&self) -> Option<&[Author]> {
        match self {
            Self::Authors(authors) => Some(authors),
            _ => None,
        }
    }
}

impl From<yaml_serde::Value> for MetadataValue {
    fn from(value: yaml_serde::Value) -> Self {
        Self::Raw(value)
    }
}
