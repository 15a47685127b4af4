//! `[pages.projects]` section - projects page content.

use crate::content::defaults;
use crate::content::seo::SeoMetadata;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pages.projects]` in content.toml - content for `/projects`.
///
/// # Example
/// ```toml
/// [pages.projects]
/// subtitle = "Check out what I've been working on."
///
/// [[pages.projects.projects]]
/// title = "Uptime Ping"
/// description = "Tiny uptime monitor with email alerts."
/// image = "/projects/uptime-ping.webp"
/// year = "2022"
/// url = "https://github.com/Arnab-m1/uptime-ping"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectsContent {
    /// SEO block for the projects page.
    #[serde(default = "defaults::pages::projects::seo")]
    #[educe(Default = defaults::pages::projects::seo())]
    pub seo: SeoMetadata,

    /// Subtitle rendered under the page heading.
    #[serde(default = "defaults::pages::projects::subtitle")]
    #[educe(Default = defaults::pages::projects::subtitle())]
    pub subtitle: String,

    /// Projects, rendered in listed order.
    #[serde(default = "defaults::pages::projects::projects")]
    #[educe(Default = defaults::pages::projects::projects())]
    pub projects: Vec<Project>,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project name.
    pub title: String,

    /// One-line description. May contain markdown.
    pub description: String,

    /// Card image path.
    pub image: String,

    /// Year as a 4-digit string (validated).
    pub year: String,

    /// Project link.
    pub url: String,
}
