//! Markdown conversion and front-matter extraction.
//!
//! # Features
//!
//! - YAML front-matter extraction from markdown text
//! - Markdown to HTML rendering via `pulldown-cmark`
//! - A converter that returns rendered body and metadata together

#![doc = include_str!("../README.md")]

pub mod converter;
pub mod frontmatter;
pub mod options;

pub use converter::{Converted, DocumentConverter, Extension, MarkdownConverter, RawMetadata};
pub use frontmatter::{FrontmatterResult, extract_frontmatter};
pub use options::MarkdownOptions;
