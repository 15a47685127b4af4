//! Per-route page content records.
//!
//! One file per route, mirroring the navigation bar: home, about, projects,
//! blog, research. Every record embeds a [`SeoMetadata`] block; the
//! [`PageRef`] sum type lets consumers treat the five record shapes
//! uniformly.

pub mod about;
pub mod blog;
pub mod home;
pub mod projects;
pub mod research;

use super::seo::SeoMetadata;
use about::AboutContent;
use blog::BlogContent;
use clap::ValueEnum;
use educe::Educe;
use home::HomeContent;
use projects::ProjectsContent;
use research::ResearchContent;
use serde::{Deserialize, Serialize};

/// `[pages]` table in content.toml - one sub-table per route.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PagesContent {
    /// `[pages.home]` - landing page content.
    #[serde(default)]
    pub home: HomeContent,

    /// `[pages.about]` - about page content.
    #[serde(default)]
    pub about: AboutContent,

    /// `[pages.projects]` - projects page content.
    #[serde(default)]
    pub projects: ProjectsContent,

    /// `[pages.blog]` - blog index content.
    #[serde(default)]
    pub blog: BlogContent,

    /// `[pages.research]` - research index content.
    #[serde(default)]
    pub research: ResearchContent,
}

/// Site routes, one per page record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Route {
    Home,
    About,
    Projects,
    Blog,
    Research,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Blog,
        Route::Research,
    ];

    /// URL path the route is served under.
    pub const fn url_path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Blog => "/blog",
            Route::Research => "/research",
        }
    }

    /// Sub-table key under `[pages]` in content.toml.
    pub const fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Projects => "projects",
            Route::Blog => "blog",
            Route::Research => "research",
        }
    }
}

/// Borrowed view over one page record.
///
/// Returned by [`SiteContent::page`](super::SiteContent::page); gives
/// consumers uniform access to the fields every page shares.
#[derive(Debug, Clone, Copy)]
pub enum PageRef<'a> {
    Home(&'a HomeContent),
    About(&'a AboutContent),
    Projects(&'a ProjectsContent),
    Blog(&'a BlogContent),
    Research(&'a ResearchContent),
}

impl<'a> PageRef<'a> {
    /// SEO block of the page.
    pub fn seo(self) -> &'a SeoMetadata {
        match self {
            PageRef::Home(p) => &p.seo,
            PageRef::About(p) => &p.seo,
            PageRef::Projects(p) => &p.seo,
            PageRef::Blog(p) => &p.seo,
            PageRef::Research(p) => &p.seo,
        }
    }

    /// Page subtitle. The home page renders a role/description pair instead.
    pub fn subtitle(self) -> Option<&'a str> {
        match self {
            PageRef::Home(_) => None,
            PageRef::About(p) => Some(&p.subtitle),
            PageRef::Projects(p) => Some(&p.subtitle),
            PageRef::Blog(p) => Some(&p.subtitle),
            PageRef::Research(p) => Some(&p.subtitle),
        }
    }
}
