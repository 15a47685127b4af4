//! `[identity]` section - who the site belongs to.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[identity]` section in content.toml - site owner identity.
///
/// # Example
/// ```toml
/// [identity]
/// name = "Arnab Mallick"
/// logo = "/logo.webp"
/// email = "arnabb@duck.com"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Identity {
    /// Display name, also used in page titles.
    #[serde(default = "defaults::identity::name")]
    #[educe(Default = defaults::identity::name())]
    pub name: String,

    /// Logo path, resolved by the rendering layer.
    /// Doubles as the default SEO preview image.
    #[serde(default = "defaults::identity::logo")]
    #[educe(Default = defaults::identity::logo())]
    pub logo: String,

    /// Contact email address.
    #[serde(default = "defaults::identity::email")]
    #[educe(Default = defaults::identity::email())]
    pub email: String,
}
