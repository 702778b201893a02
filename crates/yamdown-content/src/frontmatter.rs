//! YAML front-matter extraction.
//!
//! A front-matter block opens with a `---` line at the very start of the
//! document and closes with the next `---` or `...` line:
//!
//! ```text
//! ---
//! title: Blogging Like a Hacker
//! tags: [jekyll, yaml]
//! ---
//!
//! This is my blog post.
//! ```
//!
//! An opening marker with no closing marker is not front-matter; the whole
//! text is treated as body.

use yamdown_core::Result;

const OPEN_MARKER: &str = "---";
const CLOSE_MARKERS: &[&str] = &["---", "..."];

/// Result of splitting a document into front-matter and body.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// Parsed front-matter, `None` when the document has no block.
    ///
    /// An empty block parses to `Value::Null`.
    pub frontmatter: Option<yaml_serde::Value>,

    /// Text after the closing marker, or the whole document.
    pub body: &'a str,
}

/// Split `content` into its YAML front-matter and body.
///
/// A leading byte-order mark is ignored.
///
/// # Errors
///
/// Returns a YAML error when a closed block is not valid YAML.
///
/// # Example
///
/// ```
/// use yamdown_content::extract_frontmatter;
///
/// let result = extract_frontmatter("---\ntitle: Hello\n---\nBody text").unwrap();
/// assert!(result.frontmatter.is_some());
/// assert_eq!(result.body, "Body text");
/// ```
pub fn extract_frontmatter(content: &str) -> Result<FrontmatterResult<'_>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let no_block = FrontmatterResult {
        frontmatter: None,
        body: content,
    };

    let mut lines = content.split_inclusive('\n');
    let yaml_start = match lines.next() {
        Some(first) if first.trim_end() == OPEN_MARKER => first.len(),
        _ => return Ok(no_block),
    };

    let mut offset = yaml_start;
    for line in lines {
        if CLOSE_MARKERS.contains(&line.trim_end()) {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            let frontmatter = if yaml.trim().is_empty() {
                yaml_serde::Value::Null
            } else {
                yaml_serde::from_str(yaml)?
            };
            return Ok(FrontmatterResult {
                frontmatter: Some(frontmatter),
                body,
            });
        }
        offset += line.len();
    }

    log::debug!("Unterminated front-matter block, treating document as body");
    Ok(no_block)
}
