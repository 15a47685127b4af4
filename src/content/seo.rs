//! SEO metadata embedded in every page record.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// SEO triple for search-engine and social-preview rendering.
///
/// Embedded as a `seo` sub-table in every page record. All three fields must
/// be non-empty for the page to pass validation.
///
/// # Example
/// ```toml
/// [pages.blog.seo]
/// title = "Blog | Arnab Mallick"
/// description = "Thoughts, stories and ideas."
/// image = "/logo.webp"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SeoMetadata {
    /// Page title for `<title>` and social preview cards.
    pub title: String,

    /// Page description for meta tags.
    pub description: String,

    /// Preview image path, resolved by the rendering layer.
    /// Falls back to the identity logo, like every built-in page.
    #[serde(default = "defaults::identity::logo")]
    #[educe(Default = defaults::identity::logo())]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteContent;

    #[test]
    fn test_seo_override() {
        let content = r#"
            [pages.blog.seo]
            title = "Custom Blog Title"
            description = "Custom description"
            image = "/custom.webp"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();

        assert_eq!(content.pages.blog.seo.title, "Custom Blog Title");
        assert_eq!(content.pages.blog.seo.description, "Custom description");
        assert_eq!(content.pages.blog.seo.image, "/custom.webp");
    }

    #[test]
    fn test_seo_image_falls_back_to_logo() {
        let content = r#"
            [pages.blog.seo]
            title = "Custom Blog Title"
            description = "Custom description"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();

        assert_eq!(content.pages.blog.seo.image, "/logo.webp");
    }

    #[test]
    fn test_seo_unknown_field_rejection() {
        let content = r#"
            [pages.blog.seo]
            title = "Test"
            description = "Test"
            keywords = "not a field"
        "#;
        let result: Result<SiteContent, _> = toml::from_str(content);

        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_pages_share_logo_image() {
        let content = SiteContent::default();

        for page in content.page_refs() {
            assert_eq!(page.seo().image, content.identity.logo);
        }
    }
}
