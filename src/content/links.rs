//! Navigation and social link records.

use serde::{Deserialize, Serialize};

/// One entry of the `[[navbar]]` array - a navigation bar link.
///
/// Navigation renders entries in the order they are listed; the order of the
/// array is the order on screen.
///
/// # Example
/// ```toml
/// [[navbar]]
/// title = "Projects"
/// url = "/projects"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavBarLink {
    /// Link text shown in the navigation bar.
    pub title: String,

    /// Site-relative target path (starts with `/`).
    pub url: String,
}

/// One entry of the `[[social]]` array - a social/contact link.
///
/// The sequence is owned once at the registry root and shared by the home
/// page and the about page's connect section.
///
/// # Example
/// ```toml
/// [[social]]
/// title = "GitHub"
/// url = "https://github.com/Arnab-m1"
/// icon = "mdi:github"
/// external = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Link text.
    pub title: String,

    /// Target URI. External links must carry a scheme (`https://...`);
    /// contact links use `mailto:`.
    pub url: String,

    /// Icon identifier consumed by the rendering layer (e.g. `mdi:github`).
    pub icon: String,

    /// Open in a new browsing context. A rendering-layer contract; the
    /// registry only validates that external urls carry a scheme.
    #[serde(default)]
    pub external: bool,
}

/// A quick link on the home page (e.g. "My Projects").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageLink {
    /// Link text.
    pub title: String,

    /// Site-relative target path.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteContent;

    #[test]
    fn test_navbar_defaults_ordered() {
        let content: SiteContent = toml::from_str("").unwrap();

        let titles: Vec<_> = content.navbar.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "About", "Projects", "Blog", "Research"]);

        let urls: Vec<_> = content.navbar.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["/", "/about", "/projects", "/blog", "/research"]);
    }

    #[test]
    fn test_navbar_override_preserves_listed_order() {
        let content = r#"
            [[navbar]]
            title = "Writing"
            url = "/blog"

            [[navbar]]
            title = "Start"
            url = "/"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();

        let titles: Vec<_> = content.navbar.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Writing", "Start"]);
    }

    #[test]
    fn test_social_defaults() {
        let content: SiteContent = toml::from_str("").unwrap();

        assert_eq!(content.social.len(), 2);

        let github = &content.social[0];
        assert_eq!(github.title, "GitHub");
        assert_eq!(github.url, "https://github.com/Arnab-m1");
        assert_eq!(github.icon, "mdi:github");
        assert!(github.external);

        let mail = &content.social[1];
        assert_eq!(mail.title, "Mail");
        assert_eq!(mail.icon, "mdi:email");
        assert!(!mail.external);
    }

    #[test]
    fn test_mail_link_matches_identity_email() {
        let content: SiteContent = toml::from_str("").unwrap();

        let mail = content
            .social
            .iter()
            .find(|l| l.title == "Mail")
            .expect("built-in content has a Mail link");
        assert_eq!(mail.url, format!("mailto:{}", content.identity.email));
        assert_eq!(mail.url, "mailto:arnabb@duck.com");
    }

    #[test]
    fn test_social_external_defaults_to_false() {
        let content = r#"
            [[social]]
            title = "Mastodon"
            url = "https://hachyderm.io/@arnab"
            icon = "mdi:mastodon"
        "#;
        let content: SiteContent = toml::from_str(content).unwrap();

        assert_eq!(content.social.len(), 1);
        assert!(!content.social[0].external);
    }

    #[test]
    fn test_social_missing_icon_rejection() {
        let content = r#"
            [[social]]
            title = "Mastodon"
            url = "https://hachyderm.io/@arnab"
        "#;
        let result: Result<SiteContent, _> = toml::from_str(content);

        assert!(result.is_err());
    }

    #[test]
    fn test_navbar_unknown_field_rejection() {
        let content = r#"
            [[navbar]]
            title = "Home"
            url = "/"
            target = "_blank"
        "#;
        let result: Result<SiteContent, _> = toml::from_str(content);

        assert!(result.is_err());
    }
}
