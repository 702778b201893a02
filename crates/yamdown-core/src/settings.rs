//! Host settings for the Yamdown reader.
//!
//! Provides the [`Settings`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `YAMDOWN_CONFIG` environment variable
//! 3. XDG default: `~/.config/yamdown/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "YAMDOWN_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

/// Settings shared by the converter and the content entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Options passed through to the Markdown converter.
    pub markdown: MarkdownSettings,

    /// Slug generation for categories, tags, and authors.
    pub slug: SlugSettings,

    /// URL and output path patterns for content entities.
    pub urls: UrlSettings,
}

/// Markdown extensions enabled on every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSettings {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub smart_punctuation: bool,
    pub heading_attributes: bool,
}

/// Slug generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugSettings {
    /// Lower-case slugs after substitutions are applied.
    pub lowercase: bool,

    /// Regex substitutions applied in order before slugging.
    pub substitutions: Vec<SlugSubstitution>,
}

/// A single regex replacement applied to entity names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugSubstitution {
    pub pattern: String,
    pub replacement: String,
}

/// URL patterns for content entities. `{slug}` is replaced by the entity slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSettings {
    pub category_url: String,
    pub category_save_as: String,
    pub tag_url: String,
    pub tag_save_as: String,
    pub author_url: String,
    pub author_save_as: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: false,
            smart_punctuation: false,
            heading_attributes: false,
        }
    }
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            lowercase: true,
            substitutions: Vec::new(),
        }
    }
}

impl Default for UrlSettings {
    fn default() -> Self {
        Self {
            category_url: "category/{slug}.html".to_string(),
            category_save_as: "category/{slug}.html".to_string(),
            tag_url: "tag/{slug}.html".to_string(),
            tag_save_as: "tag/{slug}.html".to_string(),
            author_url: "author/{slug}.html".to_string(),
            author_save_as: "author/{slug}.html".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl Settings {
    /// Load settings from file, environment, and defaults.
    ///
    /// A config path that does not exist is skipped, leaving defaults and
    /// environment overrides in place.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading settings from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("YAMDOWN");
        env_opts.add_section("markdown");
        env_opts.add_section("slug");
        env_opts.add_section("urls");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let settings: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(settings)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("yamdown").join("config.toml"))
    }

    /// Serialize these settings to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
