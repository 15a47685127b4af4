//! `[pages.blog]` section - blog index content.

use crate::content::defaults;
use crate::content::seo::SeoMetadata;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pages.blog]` in content.toml - content for `/blog`.
///
/// The blog index only carries an SEO block and a subtitle; the post list
/// itself comes from the rendering layer.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BlogContent {
    /// SEO block for the blog index.
    #[serde(default = "defaults::pages::blog::seo")]
    #[educe(Default = defaults::pages::blog::seo())]
    pub seo: SeoMetadata,

    /// Subtitle rendered under the page heading.
    #[serde(default = "defaults::pages::blog::subtitle")]
    #[educe(Default = defaults::pages::blog::subtitle())]
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use crate::content::SiteContent;

    #[test]
    fn test_blog_defaults() {
        let content: SiteContent = toml::from_str("").unwrap();
        let blog = &content.pages.blog;

        assert_eq!(blog.seo.title, "Blog | Arnab Mallick");
        assert_eq!(blog.subtitle, "Thoughts, stories and ideas.");
        assert_eq!(blog.seo.description, blog.subtitle);
    }

    #[test]
    fn test_blog_override() {
        let content = r#"
            [pages.blog]
            subtitle = "Notes from the homelab"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();

        assert_eq!(content.pages.blog.subtitle, "Notes from the homelab");
        // seo keeps the built-in block unless overridden
        assert_eq!(content.pages.blog.seo.title, "Blog | Arnab Mallick");
    }
}
