//! Slug generation for content entity names.

use regex::Regex;

use crate::settings::SlugSettings;
use crate::{Error, Result};

/// Compiled slug rules, built once from [`SlugSettings`] and reused for
/// every entity name.
#[derive(Debug, Clone)]
pub struct Slugifier {
    lowercase: bool,
    substitutions: Vec<(Regex, String)>,
}

impl Slugifier {
    /// Compile the substitution patterns in `settings`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid pattern.
    pub fn new(settings: &SlugSettings) -> Result<Self> {
        let substitutions = settings
            .substitutions
            .iter()
            .map(|sub| {
                Regex::new(&sub.pattern)
                    .map(|re| (re, sub.replacement.clone()))
                    .map_err(|e| {
                        Error::config(format!("invalid slug substitution {:?}: {e}", sub.pattern))
                    })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            lowercase: settings.lowercase,
            substitutions,
        })
    }

    /// Turn a display name into a URL-safe slug.
    ///
    /// Substitutions run first, in order. Then word characters are kept,
    /// runs of whitespace and hyphens collapse to a single `-`, and
    /// everything else is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use yamdown_core::{SlugSettings, Slugifier};
    ///
    /// let slugifier = Slugifier::new(&SlugSettings::default()).unwrap();
    /// assert_eq!(slugifier.slugify("Hello, World!"), "hello-world");
    /// ```
    pub fn slugify(&self, name: &str) -> String {
        let mut value = name.to_string();
        for (re, replacement) in &self.substitutions {
            value = re.replace_all(&value, replacement.as_str()).into_owned();
        }

        if self.lowercase {
            value = value.to_lowercase();
        }

        let mut slug = String::with_capacity(value.len());
        let mut pending_dash = false;
        for ch in value.chars() {
            if ch.is_alphanumeric() || ch == '_' {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(ch);
            } else if ch.is_whitespace() || ch == '-' {
                pending_dash = true;
            }
        }

        slug
    }
}
