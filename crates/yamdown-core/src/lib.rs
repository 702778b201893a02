//! Yamdown Core: shared types, errors, settings, and content entities.
//!
//! This crate has no internal Yamdown dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`settings`]: Host settings and config loading
//! - [`entities`]: Category, Tag, and Author content entities
//! - [`slug`]: Slug generation for entity names
//! - [`date`]: Document timestamps and the flexible date parser

#![doc = include_str!("../README.md")]

pub mod date;
pub mod entities;
pub mod error;
pub mod settings;
pub mod slug;

// Re-export key types at crate root for convenience
pub use date::{Timestamp, parse_date};
pub use entities::{Author, Category, EntityContext, Tag};
pub use error::{Error, Result};
pub use settings::{MarkdownSettings, Settings, SlugSettings, SlugSubstitution, UrlSettings};
pub use slug::Slugifier;
