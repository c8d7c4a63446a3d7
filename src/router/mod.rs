//! Path routing and content resolution.
//!
//! The route table is an ordered set of patterns evaluated first-match-wins:
//! the literal pages, then the single parameterized article pattern
//! `/writings/{slug}`. Resolution is a pure function of the location and
//! the content registry; the stateful pieces (current location, history
//! subscription) live in [`state`].

pub mod location;
pub mod state;

pub use location::{DEFAULT_PATH, Location};
pub use state::{History, MemoryHistory, Router};

use crate::content::{Article, Registry};
use regex::Regex;
use std::sync::LazyLock;

/// The parameterized article route, capturing the slug.
static ARTICLE_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/writings/(.+)$").unwrap());

/// A literal page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Writings,
    Featured,
    Education,
    Career,
}

impl Page {
    /// Literal routes in table order. `About` first: it doubles as the
    /// default page.
    pub const ALL: [Page; 5] = [
        Page::About,
        Page::Writings,
        Page::Featured,
        Page::Education,
        Page::Career,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::About => "/about",
            Page::Writings => "/writings",
            Page::Featured => "/featured",
            Page::Education => "/education",
            Page::Career => "/career",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Page::About => "About",
            Page::Writings => "Writings",
            Page::Featured => "Featured",
            Page::Education => "Education",
            Page::Career => "Career",
        }
    }
}

/// Outcome of matching a location against the route table, before any
/// content lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(Page),
    Article { slug: String },
}

/// Match a location against the route table.
///
/// Returns `None` for locations outside the route surface; callers decide
/// whether that means falling back to the default page (resolution) or
/// healing the stored location (state).
pub fn match_path(location: &Location) -> Option<Route> {
    for page in Page::ALL {
        if location.as_str() == page.path() {
            return Some(Route::Page(page));
        }
    }

    ARTICLE_ROUTE
        .captures(location.as_str())
        .map(|caps| Route::Article {
            slug: caps[1].to_owned(),
        })
}

/// Whether the location is on the route surface (literal or article form).
pub fn is_routable(location: &Location) -> bool {
    match_path(location).is_some()
}

/// What a location resolves to, ready for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Page(Page),
    Article(&'static Article),
    /// An article path whose slug is not in the registry.
    NotFound,
}

/// Resolve a location to a view.
///
/// Derived fresh on every call; never stored. Unknown locations yield the
/// default page (self-correcting), while a well-formed article path with
/// an unknown slug yields the distinct not-found view.
pub fn resolve(location: &Location, registry: &Registry) -> View {
    match match_path(location) {
        Some(Route::Page(page)) => View::Page(page),
        Some(Route::Article { slug }) => match registry.article(&slug) {
            Some(article) => View::Article(article),
            None => View::NotFound,
        },
        None => View::Page(Page::About),
    }
}
