//! Document conversion: Markdown body to HTML, front-matter to metadata.
//!
//! [`DocumentConverter::convert`] returns the rendered body and the parsed
//! metadata as one [`Converted`] value. Converters keep no state between
//! calls, so converting a summary after a body (or one document after
//! another) never sees leftovers from the previous conversion.

use pulldown_cmark::{Parser, html};
use yamdown_core::{Error, Result};

use crate::frontmatter::extract_frontmatter;
use crate::options::MarkdownOptions;

/// Optional converter behaviour beyond plain Markdown rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Strip a leading `---` YAML block and return it as metadata.
    YamlFrontMatter,
}

/// Front-matter entries in document order, keys as written.
pub type RawMetadata = Vec<(String, yaml_serde::Value)>;

/// Output of a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    /// Rendered HTML for the document body.
    pub html: String,

    /// Front-matter entries, empty when the document has none.
    pub metadata: RawMetadata,
}

/// Converts lightweight markup into rendered output.
pub trait DocumentConverter {
    /// Convert a full document, extracting metadata when configured to.
    fn convert(&self, text: &str) -> Result<Converted>;

    /// Render a markup fragment with no metadata handling.
    fn render(&self, text: &str) -> String;
}

/// `pulldown-cmark` backed converter.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: MarkdownOptions,
    extensions: Vec<Extension>,
}

impl MarkdownConverter {
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            options,
            extensions: Vec::new(),
        }
    }

    /// Enable an extension.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        if !self.extensions.contains(&extension) {
            self.extensions.push(extension);
        }
        self
    }

    pub fn has_extension(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }
}

impl DocumentConverter for MarkdownConverter {
    fn convert(&self, text: &str) -> Result<Converted> {
        if !self.has_extension(Extension::YamlFrontMatter) {
            return Ok(Converted {
                html: self.render(text),
                metadata: RawMetadata::new(),
            });
        }

        let result = extract_frontmatter(text)?;
        let metadata = match result.frontmatter {
            Some(value) => metadata_entries(value)?,
            None => RawMetadata::new(),
        };
        log::debug!("Converted document with {} metadata entries", metadata.len());

        Ok(Converted {
            html: self.render(result.body),
            metadata,
        })
    }

    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options.to_cmark());
        let mut output = String::with_capacity(text.len() + text.len() / 2);
        html::push_html(&mut output, parser);
        output
    }
}

/// Flatten a parsed front-matter block into ordered key/value pairs.
fn metadata_entries(value: yaml_serde::Value) -> Result<RawMetadata> {
    use yaml_serde::Value;

    match value {
        Value::Null => Ok(RawMetadata::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| metadata_key(key).map(|key| (key, value)))
            .collect(),
        other => Err(Error::frontmatter(format!(
            "front-matter must be a mapping of fields, found {}",
            value_kind(&other)
        ))),
    }
}

fn metadata_key(key: yaml_serde::Value) -> Result<String> {
    use yaml_serde::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::frontmatter(format!(
            "front-matter keys must be scalars, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &yaml_serde::Value) -> &'static str {
    use yaml_serde::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
