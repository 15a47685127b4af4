//! Payload types exposed to page templates.
//!
//! These types are serialized to JSON and consumed by the rendering layer.
//! They borrow from the registry, so the shared social sequence shows up in
//! both the home payload and the about/connect payload without being owned
//! twice.

use serde::Serialize;

use crate::content::pages::about::{AboutSection, WorkSection};
use crate::content::pages::blog::BlogContent;
use crate::content::pages::projects::ProjectsContent;
use crate::content::pages::research::ResearchContent;
use crate::content::{Identity, NavBarLink, PageLink, SeoMetadata, SocialLink};

/// Full site payload: everything a template needs to render any route.
#[derive(Debug, Serialize)]
pub struct SitePayload<'a> {
    /// Site owner identity
    pub identity: &'a Identity,

    /// Navigation links, in rendering order
    pub navbar: &'a [NavBarLink],

    /// Site-wide social links
    pub social: &'a [SocialLink],

    /// Per-route payloads
    pub pages: PagesPayload<'a>,
}

/// Per-route payloads within [`SitePayload`].
#[derive(Debug, Serialize)]
pub struct PagesPayload<'a> {
    pub home: HomePayload<'a>,
    pub about: AboutPayload<'a>,
    pub projects: &'a ProjectsContent,
    pub blog: &'a BlogContent,
    pub research: &'a ResearchContent,
}

/// Landing page payload.
///
/// `social_links` is the shared site-wide sequence, not a copy.
#[derive(Debug, Serialize)]
pub struct HomePayload<'a> {
    pub seo: &'a SeoMetadata,
    pub role: &'a str,
    pub description: &'a str,
    pub social_links: &'a [SocialLink],
    pub links: &'a [PageLink],
}

/// About page payload.
#[derive(Debug, Serialize)]
pub struct AboutPayload<'a> {
    pub seo: &'a SeoMetadata,
    pub subtitle: &'a str,
    pub about: &'a AboutSection,
    pub work: &'a WorkSection,
    pub connect: ConnectPayload<'a>,
}

/// Connect section payload: blurb plus the shared social sequence.
#[derive(Debug, Serialize)]
pub struct ConnectPayload<'a> {
    pub description: &'a str,
    pub links: &'a [SocialLink],
}

/// Payload for a single route, as printed by `folio dump <route>`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PagePayload<'a> {
    Home(HomePayload<'a>),
    About(AboutPayload<'a>),
    Projects(&'a ProjectsContent),
    Blog(&'a BlogContent),
    Research(&'a ResearchContent),
}
