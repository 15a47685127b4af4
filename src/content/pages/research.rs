//! `[pages.research]` section - research index content.

use crate::content::defaults;
use crate::content::seo::SeoMetadata;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pages.research]` in content.toml - content for `/research`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ResearchContent {
    /// SEO block for the research index.
    #[serde(default = "defaults::pages::research::seo")]
    #[educe(Default = defaults::pages::research::seo())]
    pub seo: SeoMetadata,

    /// Subtitle rendered under the page heading.
    #[serde(default = "defaults::pages::research::subtitle")]
    #[educe(Default = defaults::pages::research::subtitle())]
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use crate::content::SiteContent;

    #[test]
    fn test_research_defaults() {
        let content: SiteContent = toml::from_str("").unwrap();
        let research = &content.pages.research;

        assert_eq!(research.seo.title, "Research | Arnab Mallick");
        assert_eq!(research.subtitle, "Papers, notes and experiments.");
    }

    #[test]
    fn test_research_distinct_from_blog() {
        let content: SiteContent = toml::from_str("").unwrap();

        assert_ne!(
            content.pages.research.subtitle,
            content.pages.blog.subtitle
        );
    }

    #[test]
    fn test_research_override() {
        let content = r#"
            [pages.research.seo]
            title = "Research"
            description = "Published work"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();

        assert_eq!(content.pages.research.seo.title, "Research");
        assert_eq!(content.pages.research.seo.description, "Published work");
        // subtitle keeps the built-in value
        assert_eq!(content.pages.research.subtitle, "Papers, notes and experiments.");
    }
}
