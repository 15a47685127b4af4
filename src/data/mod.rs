//! JSON payload export for page templates.
//!
//! The registry's schema is the interface boundary: templates consume these
//! exact field names and shapes. This module builds borrowed payload views
//! over a [`SiteContent`] snapshot and serializes them to pretty JSON.

pub mod types;

use crate::content::{Route, SiteContent};
use anyhow::Result;
use serde::Serialize;
use types::{AboutPayload, ConnectPayload, HomePayload, PagePayload, PagesPayload, SitePayload};

/// Build the full site payload over a content snapshot.
pub fn site_payload(content: &SiteContent) -> SitePayload<'_> {
    SitePayload {
        identity: &content.identity,
        navbar: &content.navbar,
        social: &content.social,
        pages: PagesPayload {
            home: home_payload(content),
            about: about_payload(content),
            projects: &content.pages.projects,
            blog: &content.pages.blog,
            research: &content.pages.research,
        },
    }
}

/// Build the payload for a single route.
pub fn page_payload(content: &SiteContent, route: Route) -> PagePayload<'_> {
    match route {
        Route::Home => PagePayload::Home(home_payload(content)),
        Route::About => PagePayload::About(about_payload(content)),
        Route::Projects => PagePayload::Projects(&content.pages.projects),
        Route::Blog => PagePayload::Blog(&content.pages.blog),
        Route::Research => PagePayload::Research(&content.pages.research),
    }
}

/// Serialize a payload to pretty JSON.
pub fn to_json<T: Serialize>(payload: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

fn home_payload(content: &SiteContent) -> HomePayload<'_> {
    let home = &content.pages.home;
    HomePayload {
        seo: &home.seo,
        role: &home.role,
        description: &home.description,
        social_links: content.home_social_links(),
        links: &home.links,
    }
}

fn about_payload(content: &SiteContent) -> AboutPayload<'_> {
    let about = &content.pages.about;
    AboutPayload {
        seo: &about.seo,
        subtitle: &about.subtitle,
        about: &about.about,
        work: &about.work,
        connect: ConnectPayload {
            description: &about.connect.description,
            links: content.connect_links(),
        },
    }
}
