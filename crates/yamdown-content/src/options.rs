//! Markdown extension options.

use pulldown_cmark::Options;
use yamdown_core::MarkdownSettings;

/// Markdown extensions enabled for a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions(Options);

impl MarkdownOptions {
    /// Map the host's `markdown` settings table onto parser options.
    pub fn from_settings(settings: &MarkdownSettings) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, settings.tables);
        options.set(Options::ENABLE_FOOTNOTES, settings.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, settings.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, settings.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, settings.smart_punctuation);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, settings.heading_attributes);
        Self(options)
    }

    pub fn to_cmark(self) -> Options {
        self.0
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self::from_settings(&MarkdownSettings::default())
    }
}
