//! `[pages.home]` section - landing page content.

use crate::content::defaults;
use crate::content::links::PageLink;
use crate::content::seo::SeoMetadata;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pages.home]` in content.toml - content for the landing page (`/`).
///
/// The home page also renders the site-wide social links; those live at the
/// registry root and are reached through
/// [`SiteContent::home_social_links`](crate::content::SiteContent::home_social_links).
///
/// # Example
/// ```toml
/// [pages.home]
/// role = "Software Developer"
/// description = "I build cool things."
///
/// [[pages.home.links]]
/// title = "My Projects"
/// url = "/projects"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HomeContent {
    /// SEO block for the landing page.
    #[serde(default = "defaults::pages::home::seo")]
    #[educe(Default = defaults::pages::home::seo())]
    pub seo: SeoMetadata,

    /// Role line rendered under the name.
    #[serde(default = "defaults::pages::home::role")]
    #[educe(Default = defaults::pages::home::role())]
    pub role: String,

    /// Introduction paragraph. May contain markdown; renderers emit it as
    /// formatted text.
    #[serde(default = "defaults::pages::home::description")]
    #[educe(Default = defaults::pages::home::description())]
    pub description: String,

    /// Quick links to other routes, rendered in listed order.
    #[serde(default = "defaults::pages::home::links")]
    #[educe(Default = defaults::pages::home::links())]
    pub links: Vec<PageLink>,
}

#[cfg(test)]
mod tests {
    use crate::content::SiteContent;

    #[test]
    fn test_home_defaults() {
        let content: SiteContent = toml::from_str("").unwrap();
        let home = &content.pages.home;

        assert_eq!(home.seo.title, "Arnab Mallick");
        assert_eq!(home.role, "Software Developer");
        assert!(home.description.starts_with("I'm Arnab Mallick"));

        let links: Vec<_> = home.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(links, vec!["/projects", "/about"]);
    }

    #[test]
    fn test_home_override() {
        let content = r#"
            [pages.home]
            role = "Platform Engineer"
            description = "I keep the lights on."

            [[pages.home.links]]
            title = "Projects"
            url = "/projects"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();
        let home = &content.pages.home;

        assert_eq!(home.role, "Platform Engineer");
        assert_eq!(home.description, "I keep the lights on.");
        assert_eq!(home.links.len(), 1);
        // unset seo keeps the built-in block
        assert_eq!(home.seo.title, "Arnab Mallick");
    }

    #[test]
    fn test_home_unknown_field_rejection() {
        let content = r#"
            [pages.home]
            subtitle = "Home has no subtitle"
        "#;
        let result: Result<SiteContent, _> = toml::from_str(content);

        assert!(result.is_err());
    }
}
