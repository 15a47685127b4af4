//! Site content registry for `content.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[identity]` | Site owner (name, logo, email)                  |
//! | `[[navbar]]` | Navigation links, in rendering order            |
//! | `[[social]]` | Social/contact links, shared across pages       |
//! | `[pages]`    | Per-route payloads (home, about, projects, ...) |
//!
//! Every field has a built-in value, so an empty (or absent) content.toml
//! yields the complete built-in site. The file overrides per field.
//!
//! # Example
//!
//! ```toml
//! [identity]
//! name = "Arnab Mallick"
//! email = "arnabb@duck.com"
//!
//! [[navbar]]
//! title = "Home"
//! url = "/"
//!
//! [pages.blog]
//! subtitle = "Thoughts, stories and ideas."
//! ```

pub mod defaults;
mod error;
pub mod handle;
mod identity;
mod links;
pub mod pages;
mod seo;

// Re-export public types used by other modules
pub use identity::Identity;
pub use links::{NavBarLink, PageLink, SocialLink};
pub use pages::{PageRef, PagesContent, Route};
pub use seo::SeoMetadata;

use error::ContentError;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Content Record
// ============================================================================

/// Root content structure representing content.toml.
///
/// Constructed once at startup and read-only afterwards; see
/// [`handle`] for the process-wide registry.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    /// Absolute path to the content file (set after loading)
    #[serde(skip)]
    pub content_path: PathBuf,

    /// Site owner identity
    #[serde(default)]
    pub identity: Identity,

    /// Navigation bar links, in rendering order
    #[serde(default = "defaults::navbar::links")]
    #[educe(Default = defaults::navbar::links())]
    pub navbar: Vec<NavBarLink>,

    /// Social links, owned here and shared by home and about/connect
    #[serde(default = "defaults::social::links")]
    #[educe(Default = defaults::social::links())]
    pub social: Vec<SocialLink>,

    /// Per-route page payloads
    #[serde(default)]
    pub pages: PagesContent,
}

impl SiteContent {
    /// Parse content from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let content: SiteContent = toml::from_str(content)?;
        Ok(content)
    }

    /// Load content from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let mut content = Self::from_str(&content)?;
        content.content_path = path.to_path_buf();
        Ok(content)
    }

    /// Get the page record for a route.
    pub fn page(&self, route: Route) -> PageRef<'_> {
        match route {
            Route::Home => PageRef::Home(&self.pages.home),
            Route::About => PageRef::About(&self.pages.about),
            Route::Projects => PageRef::Projects(&self.pages.projects),
            Route::Blog => PageRef::Blog(&self.pages.blog),
            Route::Research => PageRef::Research(&self.pages.research),
        }
    }

    /// Iterate over all page records, in navigation order.
    pub fn page_refs(&self) -> impl Iterator<Item = PageRef<'_>> {
        Route::ALL.into_iter().map(|route| self.page(route))
    }

    /// Social links rendered on the home page.
    ///
    /// Same underlying sequence as [`Self::connect_links`]; the registry
    /// owns the list once.
    pub fn home_social_links(&self) -> &[SocialLink] {
        &self.social
    }

    /// Social links rendered in the about page's connect section.
    pub fn connect_links(&self) -> &[SocialLink] {
        &self.social
    }

    /// Validate the content against the schema rules.
    ///
    /// Checks the invariants consumers rely on: populated SEO blocks on
    /// every page, non-empty ordered navigation, scheme-carrying external
    /// links, 4-digit project years.
    pub fn validate(&self) -> Result<()> {
        if self.identity.name.is_empty() {
            bail!(ContentError::Validation(
                "[identity.name] must not be empty".into()
            ));
        }
        if !self.identity.email.contains('@') {
            bail!(ContentError::Validation(
                "[identity.email] is not an email address".into()
            ));
        }

        if self.navbar.is_empty() {
            bail!(ContentError::Validation(
                "[[navbar]] must have at least one entry".into()
            ));
        }
        for link in &self.navbar {
            if link.title.is_empty() || link.url.is_empty() {
                bail!(ContentError::Validation(
                    "[[navbar]] entries must have a title and a url".into()
                ));
            }
            if !link.url.starts_with('/') {
                bail!(ContentError::Validation(format!(
                    "[[navbar]] url `{}` must be site-relative (start with `/`)",
                    link.url
                )));
            }
        }

        for link in &self.social {
            if link.title.is_empty() || link.url.is_empty() || link.icon.is_empty() {
                bail!(ContentError::Validation(
                    "[[social]] entries must have a title, a url and an icon".into()
                ));
            }
            if link.external && !link.url.starts_with("http") {
                bail!(ContentError::Validation(format!(
                    "[[social]] external url `{}` must carry a URI scheme",
                    link.url
                )));
            }
        }

        for route in Route::ALL {
            let seo = self.page(route).seo();
            if seo.title.is_empty() || seo.description.is_empty() || seo.image.is_empty() {
                bail!(ContentError::Validation(format!(
                    "[pages.{}.seo] must have a non-empty title, description and image",
                    route.key()
                )));
            }
        }

        for project in &self.pages.projects.projects {
            if project.title.is_empty() {
                bail!(ContentError::Validation(
                    "[[pages.projects.projects]] entries must have a title".into()
                ));
            }
            if project.year.len() != 4 || !project.year.chars().all(|c| c.is_ascii_digit()) {
                bail!(ContentError::Validation(format!(
                    "[[pages.projects.projects]] `{}` year `{}` must be a 4-digit year",
                    project.title, project.year
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
