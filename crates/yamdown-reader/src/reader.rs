//! The Markdown + YAML front-matter reader.
//!
//! Reads documents like this one, as used by Jekyll and GitHub Pages:
//!
//! ```text
//! ---
//! layout: post
//! title: Blogging Like a Hacker
//! ---
//!
//! This is my blog post.
//! ```

use std::path::Path;
use std::sync::Arc;

use yamdown_content::{
    DocumentConverter, Extension, MarkdownConverter, MarkdownOptions, RawMetadata,
};
use yamdown_core::{EntityContext, Error, Result, Settings};

use crate::field::Field;
use crate::normalizer::NormalizerTable;
use crate::value::{Metadata, MetadataValue};

/// File extensions handled by [`MarkdownYamlReader`].
pub const FILE_EXTENSIONS: &[&str] = &["md", "markdown", "mkd", "mdown"];

/// A rendered document and its normalized metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadDocument {
    /// Rendered HTML body.
    pub content: String,

    /// Normalized front-matter, keyed by lower-case field name.
    pub metadata: Metadata,
}

/// Reader for Markdown files with YAML front-matter.
///
/// Holds only immutable configuration, so a single reader can serve any
/// number of reads, from any number of threads.
///
/// # Example
///
/// ```no_run
/// use yamdown_core::Settings;
/// use yamdown_reader::MarkdownYamlReader;
///
/// # fn main() -> yamdown_core::Result<()> {
/// let reader = MarkdownYamlReader::new(Settings::default())?;
/// let doc = reader.read("content/hello.md")?;
/// if let Some(tags) = doc.metadata.get("tags").and_then(|v| v.as_tags()) {
///     println!("{} tags", tags.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownYamlReader {
    settings: Arc<Settings>,
    entities: Arc<EntityContext>,
    normalizers: Arc<NormalizerTable>,
}

impl MarkdownYamlReader {
    /// Create a reader with the standard normalizer table.
    ///
    /// # Errors
    ///
    /// Fails when the slug settings hold an invalid substitution pattern.
    pub fn new(settings: impl Into<Arc<Settings>>) -> Result<Self> {
        Self::with_normalizers(settings, Arc::new(NormalizerTable::standard()))
    }

    /// Create a reader sharing an already built normalizer table.
    ///
    /// # Errors
    ///
    /// Fails when the slug settings hold an invalid substitution pattern.
    pub fn with_normalizers(
        settings: impl Into<Arc<Settings>>,
        normalizers: Arc<NormalizerTable>,
    ) -> Result<Self> {
        let settings = settings.into();
        let entities = Arc::new(EntityContext::new(&settings)?);
        Ok(Self {
            settings,
            entities,
            normalizers,
        })
    }

    pub fn normalizers(&self) -> &NormalizerTable {
        &self.normalizers
    }

    /// Extensions of the files this reader understands.
    pub fn file_extensions() -> &'static [&'static str] {
        FILE_EXTENSIONS
    }

    /// Whether `path` has one of [`FILE_EXTENSIONS`], ignoring case.
    pub fn accepts(path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                FILE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    /// Read and process the document at `source_path`.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, unparseable front-matter, and any field that
    /// cannot be normalized. No partial result is returned.
    pub fn read(&self, source_path: impl AsRef<Path>) -> Result<ReadDocument> {
        let path = source_path.as_ref();
        log::debug!("Reading {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        self.read_str(&text)
    }

    /// Process document text that is already in memory.
    pub fn read_str(&self, text: &str) -> Result<ReadDocument> {
        let converter = self.converter();
        let converted = converter.convert(text)?;
        let metadata = self.parse_metadata(&converter, converted.metadata)?;
        Ok(ReadDocument {
            content: converted.html,
            metadata,
        })
    }

    /// A converter for one read; nothing carries over between reads.
    fn converter(&self) -> MarkdownConverter {
        MarkdownConverter::new(MarkdownOptions::from_settings(&self.settings.markdown))
            .with_extension(Extension::YamlFrontMatter)
    }

    /// Normalize every front-matter entry, in document order.
    ///
    /// Keys that differ only in case collapse to one entry; the last wins.
    fn parse_metadata<C: DocumentConverter>(
        &self,
        converter: &C,
        raw: RawMetadata,
    ) -> Result<Metadata> {
        let mut output = Metadata::new();
        for (name, value) in raw {
            let field = Field::from_name(&name);
            let value = match field {
                Field::Summary => {
                    let text = summary_text(&field, &value)?;
                    MetadataValue::Html(converter.render(&text))
                }
                _ => MetadataValue::Raw(value),
            };
            let normalized = self.process_metadata(&field, value)?;
            log::debug!("Normalized field '{field}'");
            output.insert(field.as_str().to_string(), normalized);
        }
        Ok(output)
    }

    /// Apply the normalizer registered for `field` to `value`.
    pub fn process_metadata(&self, field: &Field, value: MetadataValue) -> Result<MetadataValue> {
        self.normalizers.normalize(field, value, &self.entities)
    }
}

fn summary_text(field: &Field, value: &yaml_serde::Value) -> Result<String> {
    use yaml_serde::Value;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(Error::invalid_metadata(
            field.as_str(),
            "expected markup text",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::Normalizer;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;
    use yamdown_core::{SlugSubstitution, Tag, Timestamp};

    fn write_doc(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn reader() -> MarkdownYamlReader {
        MarkdownYamlReader::new(Settings::default()).unwrap()
    }

    #[test]
    fn test_read_without_frontmatter() {
        let dir = TempDir::new().unwrap();
        let content = "# Title\n\nSome *body* text.\n";
        let path = write_doc(&dir, "plain.md", content);

        let doc = reader().read(&path).unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.content, MarkdownConverter::default().render(content));
    }

    #[test]
    fn test_read_title_and_tags() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "post.md",
            "---\ntitle: Hello\ntags: [a, b]\n---\nBody\n",
        );

        let doc = reader().read(&path).unwrap();
        assert_eq!(doc.content, "<p>Body</p>\n");
        assert_eq!(doc.metadata["title"].as_str(), Some("Hello"));
        let names: Vec<_> = doc.metadata["tags"]
            .as_tags()
            .unwrap()
            .iter()
            .map(Tag::name)
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_read_date_only_is_midnight() {
        let doc = reader()
            .read_str("---\ndate: 2019-07-04\n---\n")
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2019, 7, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            doc.metadata["date"],
            MetadataValue::Timestamp(Timestamp::Naive(expected))
        );
    }

    #[test]
    fn test_read_modified_uses_date_parser() {
        let doc = reader()
            .read_str("---\nmodified: 2019-07-04 12:30\n---\n")
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2019, 7, 4)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(
            doc.metadata["modified"].as_timestamp(),
            Some(&Timestamp::Naive(expected))
        );
    }

    #[test]
    fn test_read_bad_date_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "bad.md", "---\ndate: not-a-date\n---\nBody\n");

        let err = reader().read(&path).unwrap_err();
        assert!(err.is_date_format());
    }

    #[test]
    fn test_read_summary_rendered_alone() {
        let text = "---\nsummary: Short *intro* [link]\n---\n\
                    Body with [link].\n\n[link]: http://body.example\n";
        let doc = reader().read_str(text).unwrap();

        let expected = MarkdownConverter::default().render("Short *intro* [link]");
        assert_eq!(doc.metadata["summary"], MetadataValue::Html(expected));
        assert!(!doc.metadata["summary"].as_str().unwrap().contains("body.example"));
        assert!(doc.content.contains("http://body.example"));
    }

    #[test]
    fn test_read_summary_normalizer_applies_to_html() {
        let table = NormalizerTable::standard().with(Field::Summary, Normalizer::Trim);
        let reader =
            MarkdownYamlReader::with_normalizers(Settings::default(), Arc::new(table)).unwrap();
        let doc = reader.read_str("---\nsummary: Hi\n---\n").unwrap();
        assert_eq!(doc.metadata["summary"], MetadataValue::Text("<p>Hi</p>".into()));
    }

    #[test]
    fn test_read_field_names_case_insensitive() {
        let r = reader();
        let lower = r.read_str("---\ntags: [x, y]\n---\n").unwrap();
        let title = r.read_str("---\nTags: [x, y]\n---\n").unwrap();
        let upper = r.read_str("---\nTAGS: [x, y]\n---\n").unwrap();

        assert_eq!(lower.metadata, title.metadata);
        assert_eq!(lower.metadata, upper.metadata);
        assert!(upper.metadata.contains_key("tags"));
        assert!(!upper.metadata.contains_key("TAGS"));
    }

    #[test]
    fn test_read_case_collision_last_wins() {
        let doc = reader()
            .read_str("---\nTitle: First\ntitle: Second\n---\n")
            .unwrap();
        assert_eq!(doc.metadata.len(), 1);
        assert_eq!(doc.metadata["title"].as_str(), Some("Second"));
    }

    #[test]
    fn test_read_category_author_authors() {
        let doc = reader()
            .read_str("---\ncategory: Site News\nauthor: Ada\nauthors: [Ada, Grace]\n---\n")
            .unwrap();
        assert_eq!(doc.metadata["category"].as_category().unwrap().name(), "Site News");
        assert_eq!(doc.metadata["author"].as_author().unwrap().slug(), "ada");
        assert_eq!(doc.metadata["authors"].as_authors().unwrap().len(), 2);
    }

    #[test]
    fn test_read_unknown_fields_pass_through() {
        let doc = reader()
            .read_str("---\nlayout: post\nweight: 3\nextra: {a: 1}\n---\n")
            .unwrap();
        assert_eq!(doc.metadata["layout"].as_str(), Some("post"));
        assert_eq!(
            doc.metadata["weight"].as_raw().and_then(|v| v.as_i64()),
            Some(3)
        );
        assert!(doc.metadata["extra"].as_raw().unwrap().is_mapping());
    }

    #[test]
    fn test_read_malformed_tags_fails() {
        let err = reader()
            .read_str("---\ntags: {nested: true}\n---\n")
            .unwrap_err();
        assert!(err.is_invalid_metadata());
    }

    #[test]
    fn test_read_invalid_yaml_fails() {
        let err = reader()
            .read_str("---\ntitle: [oops\n---\nBody\n")
            .unwrap_err();
        assert!(err.is_frontmatter());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = reader().read(dir.path().join("missing.md")).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_independent_readers_agree() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "same.md",
            "---\ntitle: Same\ndate: 2020-02-02\ntags: [a]\nsummary: '*s*'\n---\nBody\n",
        );

        let first = reader().read(&path).unwrap();
        let second = reader().read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reader_uses_markdown_settings() {
        let mut settings = Settings::default();
        settings.markdown.strikethrough = false;
        let reader = MarkdownYamlReader::new(settings).unwrap();
        let doc = reader.read_str("~~kept~~\n").unwrap();
        assert!(!doc.content.contains("<del>"));
    }

    #[test]
    fn test_reader_rejects_invalid_slug_substitution() {
        let mut settings = Settings::default();
        settings.slug.substitutions.push(SlugSubstitution {
            pattern: "(".into(),
            replacement: String::new(),
        });
        let err = MarkdownYamlReader::new(settings).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_reader_applies_slug_substitutions() {
        let mut settings = Settings::default();
        settings.slug.substitutions.push(SlugSubstitution {
            pattern: r"\+\+".into(),
            replacement: "pp".into(),
        });
        let reader = MarkdownYamlReader::new(settings).unwrap();
        let doc = reader
            .read_str("---
category: C++
tags: [C++, Rust]
---
")
            .unwrap();
        assert_eq!(doc.metadata["category"].as_category().unwrap().slug(), "cpp");
        let slugs: Vec<_> = doc.metadata["tags"]
            .as_tags()
            .unwrap()
            .iter()
            .map(Tag::slug)
            .collect();
        assert_eq!(slugs, ["cpp", "rust"]);
    }

    #[test]
    fn test_shared_table_across_readers() {
        let table = Arc::new(NormalizerTable::standard());
        let a =
            MarkdownYamlReader::with_normalizers(Settings::default(), Arc::clone(&table)).unwrap();
        let b =
            MarkdownYamlReader::with_normalizers(Settings::default(), Arc::clone(&table)).unwrap();
        assert_eq!(a.normalizers(), b.normalizers());
        assert_eq!(Arc::strong_count(&table), 3);
    }

    #[test]
    fn test_accepts_extensions() {
        assert!(MarkdownYamlReader::accepts("post.md"));
        assert!(MarkdownYamlReader::accepts("post.MARKDOWN"));
        assert!(MarkdownYamlReader::accepts("dir/post.mkd"));
        assert!(MarkdownYamlReader::accepts("post.mdown"));
        assert!(!MarkdownYamlReader::accepts("post.rst"));
        assert!(!MarkdownYamlReader::accepts("README"));
        assert_eq!(MarkdownYamlReader::file_extensions().len(), 4);
    }

    #[test]
    fn test_reader_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarkdownYamlReader>();
    }
}
