//! Content entities referenced from document metadata.
//!
//! [`Category`], [`Tag`], and [`Author`] share one shape: a display name,
//! a slug derived from it, and the URL / output path produced by the
//! matching patterns in [`UrlSettings`]. An [`EntityContext`] holds the
//! compiled slug rules and URL patterns, and is built once per reader.

use std::fmt;

use serde::Serialize;

use crate::settings::{Settings, UrlSettings};
use crate::slug::Slugifier;
use crate::{Error, Result};

const SLUG_PLACEHOLDER: &str = "{slug}";

/// Everything needed to build entities: compiled slug rules plus the URL
/// patterns from [`Settings::urls`].
#[derive(Debug, Clone)]
pub struct EntityContext {
    slugifier: Slugifier,
    urls: UrlSettings,
}

impl EntityContext {
    /// Compile the entity rules from `settings`.
    ///
    /// # Errors
    ///
    /// Fails when a slug substitution pattern is invalid.
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            slugifier: Slugifier::new(&settings.slug)?,
            urls: settings.urls.clone(),
        })
    }
}

macro_rules! content_entity {
    ($(#[$meta:meta])* $name:ident, $field:literal, $url:ident, $save_as:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name {
            name: String,
            slug: String,
            url: String,
            save_as: String,
        }

        impl $name {
            /// Build the entity from a raw metadata string.
            ///
            /// # Errors
            ///
            /// Fails when the trimmed name is empty.
            pub fn new(name: impl AsRef<str>, context: &EntityContext) -> Result<Self> {
                let name = name.as_ref().trim();
                if name.is_empty() {
                    return Err(Error::invalid_metadata($field, "name must not be empty"));
                }
                let slug = context.slugifier.slugify(name);
                Ok(Self {
                    name: name.to_string(),
                    url: context.urls.$url.replace(SLUG_PLACEHOLDER, &slug),
                    save_as: context.urls.$save_as.replace(SLUG_PLACEHOLDER, &slug),
                    slug,
                })
            }

            /// Display name as written in the front-matter.
            pub fn name(&self) -> &str {
                &self.name
            }

            pub fn slug(&self) -> &str {
                &self.slug
            }

            /// Site-relative URL for this entity's listing page.
            pub fn url(&self) -> &str {
                &self.url
            }

            /// Output path for this entity's listing page.
            pub fn save_as(&self) -> &str {
                &self.save_as
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

content_entity!(
    /// The single category a document is filed under.
    Category,
    "category",
    category_url,
    category_save_as
);

content_entity!(
    /// One of a document's tags.
    Tag,
    "tags",
    tag_url,
    tag_save_as
);

content_entity!(
    /// A document author.
    Author,
    "author",
    author_url,
    author_save_as
);
