//! Markdown reader with YAML front-matter for static site generators.
//!
//! # Modules
//!
//! - [`reader`]: [`MarkdownYamlReader`] and its `read` operation
//! - [`normalizer`]: Per-field normalizers and the normalizer table
//! - [`field`]: Case-insensitive field identities
//! - [`value`]: Normalized metadata values

#![doc = include_str!("../README.md")]

pub mod field;
pub mod normalizer;
pub mod reader;
pub mod value;

pub use field::Field;
pub use normalizer::{Normalizer, NormalizerTable};
pub use reader::{FILE_EXTENSIONS, MarkdownYamlReader, ReadDocument};
pub use value::{Metadata, MetadataValue};
