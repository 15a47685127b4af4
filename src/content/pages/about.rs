//! `[pages.about]` section - about page content.

use crate::content::defaults;
use crate::content::seo::SeoMetadata;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pages.about]` in content.toml - content for `/about`.
///
/// Three sections: a bio with two portrait images, a work history, and a
/// connect blurb. The connect section's links are the site-wide social
/// sequence at the registry root, reached through
/// [`SiteContent::connect_links`](crate::content::SiteContent::connect_links).
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AboutContent {
    /// SEO block for the about page.
    #[serde(default = "defaults::pages::about::seo")]
    #[educe(Default = defaults::pages::about::seo())]
    pub seo: SeoMetadata,

    /// Subtitle rendered under the page heading.
    #[serde(default = "defaults::pages::about::subtitle")]
    #[educe(Default = defaults::pages::about::subtitle())]
    pub subtitle: String,

    /// `[pages.about.about]` - the bio section.
    #[serde(default)]
    pub about: AboutSection,

    /// `[pages.about.work]` - the work history section.
    #[serde(default)]
    pub work: WorkSection,

    /// `[pages.about.connect]` - the connect section.
    #[serde(default)]
    pub connect: ConnectSection,
}

/// Bio section: description plus two portrait images.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AboutSection {
    /// Bio text. May contain markdown; renderers emit it as formatted text.
    #[serde(default = "defaults::pages::about::description")]
    #[educe(Default = defaults::pages::about::description())]
    pub description: String,

    /// Left portrait image.
    #[serde(default = "defaults::pages::about::image_l")]
    #[educe(Default = defaults::pages::about::image_l())]
    pub image_l: Image,

    /// Right portrait image.
    #[serde(default = "defaults::pages::about::image_r")]
    #[educe(Default = defaults::pages::about::image_r())]
    pub image_r: Image,
}

/// An image with alt text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    /// Image path, resolved by the rendering layer.
    pub url: String,

    /// Alternative text.
    pub alt: String,
}

/// Work history section: intro plus an ordered list of positions.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WorkSection {
    /// Section intro. May contain markdown.
    #[serde(default = "defaults::pages::about::work_description")]
    #[educe(Default = defaults::pages::about::work_description())]
    pub description: String,

    /// Positions, most recent first.
    #[serde(default = "defaults::pages::about::work_items")]
    #[educe(Default = defaults::pages::about::work_items())]
    pub items: Vec<WorkItem>,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkItem {
    /// Job title.
    pub title: String,

    /// Employer.
    pub company: Company,

    /// Human-readable date range (e.g. "2021 - Present").
    pub date: String,
}

/// Employer reference within a work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Company {
    /// Company name.
    pub name: String,

    /// Company logo path.
    pub image: String,

    /// Company website.
    pub url: String,
}

/// Connect section: blurb above the shared social links.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ConnectSection {
    /// Section intro. May contain markdown.
    #[serde(default = "defaults::pages::about::connect_description")]
    #[educe(Default = defaults::pages::about::connect_description())]
    pub description: String,
}
