//! Per-field metadata normalization.
//!
//! A [`NormalizerTable`] maps [`Field`]s to [`Normalizer`]s. Fields missing
//! from the table keep their value unchanged. Tables are plain values:
//! build one, overlay another onto it, then share it (usually behind an
//! `Arc`) with every reader that should use it.
//!
//! # Example
//!
//! ```
//! use yamdown_reader::{Field, Normalizer, NormalizerTable};
//!
//! let table = NormalizerTable::host_defaults()
//!     .overlay(&NormalizerTable::reader_fields())
//!     .with(Field::from_name("subtitle"), Normalizer::Trim);
//!
//! assert_eq!(table.get(&Field::Date), Normalizer::Timestamp);
//! assert_eq!(table.get(&Field::from_name("layout")), Normalizer::Identity);
//! ```

use std::collections::HashMap;

use yaml_serde::Value;
use yamdown_core::date::parse_date_only;
use yamdown_core::{Author, Category, EntityContext, Error, Result, Tag, Timestamp, parse_date};

use crate::field::Field;
use crate::value::MetadataValue;

/// A transformation applied to one metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalizer {
    /// Keep the value as parsed.
    Identity,
    /// Parse into a [`Timestamp`]; date-only values become midnight.
    Timestamp,
    /// A list of names into [`Tag`]s, order preserved.
    TagList,
    /// A single name into a [`Category`].
    Category,
    /// A single name into an [`Author`].
    Author,
    /// A list of names into [`Author`]s, order preserved.
    AuthorList,
    /// A single value as trimmed text.
    Trim,
}

impl Normalizer {
    /// Apply this normalizer to the value of `field`.
    ///
    /// # Errors
    ///
    /// Date parse failures, entity construction failures, and values of the
    /// wrong shape are all returned unchanged; nothing is skipped.
    pub fn apply(
        self,
        field: &Field,
        value: MetadataValue,
        context: &EntityContext,
    ) -> Result<MetadataValue> {
        let normalized = match self {
            Self::Identity => value,
            Self::Timestamp => MetadataValue::Timestamp(to_timestamp(field, &value)?),
            Self::TagList => MetadataValue::Tags(
                name_list(field, &value)?
                    .iter()
                    .map(|name| Tag::new(name, context))
                    .collect::<Result<_>>()?,
            ),
            Self::Category => {
                MetadataValue::Category(Category::new(single_name(field, &value)?, context)?)
            }
            Self::Author => {
                MetadataValue::Author(Author::new(single_name(field, &value)?, context)?)
            }
            Self::AuthorList => MetadataValue::Authors(
                name_list(field, &value)?
                    .iter()
                    .map(|name| Author::new(name, context))
                    .collect::<Result<_>>()?,
            ),
            Self::Trim => MetadataValue::Text(single_name(field, &value)?.trim().to_string()),
        };
        Ok(normalized)
    }
}

/// Field-to-normalizer table with an identity default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizerTable {
    entries: HashMap<Field, Normalizer>,
}

impl NormalizerTable {
    /// An empty table; every field passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site generator's base metadata processors.
    pub fn host_defaults() -> Self {
        Self::new()
            .with(Field::Tags, Normalizer::TagList)
            .with(Field::Date, Normalizer::Timestamp)
            .with(Field::Modified, Normalizer::Timestamp)
            .with(Field::Status, Normalizer::Trim)
            .with(Field::Category, Normalizer::Category)
            .with(Field::Author, Normalizer::Author)
            .with(Field::Authors, Normalizer::AuthorList)
            .with(Field::Slug, Normalizer::Trim)
    }

    /// The handlers this reader registers on top of the host's table.
    pub fn reader_fields() -> Self {
        Self::new()
            .with(Field::Date, Normalizer::Timestamp)
            .with(Field::Modified, Normalizer::Timestamp)
            .with(Field::Tags, Normalizer::TagList)
            .with(Field::Category, Normalizer::Category)
            .with(Field::Author, Normalizer::Author)
            .with(Field::Authors, Normalizer::AuthorList)
    }

    /// Host defaults overlaid with the reader's handlers.
    pub fn standard() -> Self {
        Self::host_defaults().overlay(&Self::reader_fields())
    }

    /// Register `normalizer` for `field`, returning the one it replaced.
    pub fn register(
        &mut self,
        field: impl Into<Field>,
        normalizer: Normalizer,
    ) -> Option<Normalizer> {
        self.entries.insert(field.into(), normalizer)
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, field: impl Into<Field>, normalizer: Normalizer) -> Self {
        self.register(field, normalizer);
        self
    }

    /// Copy every entry of `other` into this table; `other` wins on collision.
    pub fn overlay(mut self, other: &Self) -> Self {
        for (field, normalizer) in &other.entries {
            self.entries.insert(field.clone(), *normalizer);
        }
        self
    }

    /// The normalizer for `field`, [`Normalizer::Identity`] when unregistered.
    pub fn get(&self, field: &Field) -> Normalizer {
        self.entries
            .get(field)
            .copied()
            .unwrap_or(Normalizer::Identity)
    }

    pub fn contains(&self, field: &Field) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalize one value using this table.
    pub fn normalize(
        &self,
        field: &Field,
        value: MetadataValue,
        context: &EntityContext,
    ) -> Result<MetadataValue> {
        self.get(field).apply(field, value, context)
    }
}

// ============================================================================
// Value coercions
// ============================================================================

fn to_timestamp(field: &Field, value: &MetadataValue) -> Result<Timestamp> {
    if let MetadataValue::Timestamp(ts) = value {
        return Ok(*ts);
    }
    let text = single_name(field, value)?;
    match parse_date_only(&text) {
        Some(date) => Ok(Timestamp::from_date(date)),
        None => parse_date(&text),
    }
}

/// Text of a single scalar value.
fn single_name(field: &Field, value: &MetadataValue) -> Result<String> {
    match value {
        MetadataValue::Raw(raw) => scalar_text(raw).ok_or_else(|| {
            Error::invalid_metadata(field.as_str(), "expected a single value")
        }),
        MetadataValue::Text(s) | MetadataValue::Html(s) => Ok(s.clone()),
        _ => Err(Error::invalid_metadata(
            field.as_str(),
            "value was already normalized to another type",
        )),
    }
}

/// Names from a sequence of scalars or a comma-separated string.
fn name_list(field: &Field, value: &MetadataValue) -> Result<Vec<String>> {
    let raw = match value {
        MetadataValue::Raw(raw) => raw,
        MetadataValue::Text(s) => return Ok(split_names(s)),
        _ => {
            return Err(Error::invalid_metadata(
                field.as_str(),
                "expected a list of names",
            ));
        }
    };

    match raw {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(split_names(s)),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_text(item).ok_or_else(|| {
                    Error::invalid_metadata(field.as_str(), "list items must be single values")
                })
            })
            .collect(),
        Value::Tagged(tagged) => name_list(field, &MetadataValue::Raw(tagged.value.clone())),
        _ => Err(Error::invalid_metadata(
            field.as_str(),
            "expected a list of names",
        )),
    }
}

fn split_names(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}
