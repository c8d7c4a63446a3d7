//! Content record types.
//!
//! Everything here is `&'static` - the site's content is compiled in and
//! immutable for the life of the process.

use serde::Serialize;

/// A single writing, addressable as `/writings/{slug}`.
#[derive(Debug, PartialEq, Eq)]
pub struct Article {
    /// URL identifier, e.g. `conducting-meetings`.
    pub slug: &'static str,

    pub title: &'static str,

    /// Display date, kept verbatim (e.g. "May 2025").
    pub date: &'static str,

    /// Machine-readable publication date (`YYYY-MM-DD`), used for the rss
    /// feed and the article index. Placeholders carry `None`.
    pub published: Option<&'static str>,

    pub summary: &'static str,

    /// Raw body text; paragraphs separated by blank lines.
    /// See `markup::parse` for the typed rendering units.
    pub body: &'static str,
}

impl Article {
    /// Site-relative URL path of this article.
    pub fn path(&self) -> String {
        format!("/writings/{}", self.slug)
    }
}

/// One entry on the legacy `/education` page.
#[derive(Debug)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
    pub description: &'static str,
}

/// One entry on the legacy `/career` page.
#[derive(Debug)]
pub struct CareerEntry {
    pub company: &'static str,
    pub position: &'static str,
    pub years: &'static str,
    pub description: &'static str,
}

/// A company block on the About page timeline.
#[derive(Debug)]
pub struct TimelineCompany {
    pub name: &'static str,
    pub stints: &'static [TimelineStint],
}

/// A period within a company block.
#[derive(Debug)]
pub struct TimelineStint {
    /// e.g. "2021–2024"
    pub period: &'static str,
    pub location: &'static str,
    pub notes: &'static [&'static str],
}

/// An external appearance linked from the Featured page.
#[derive(Debug)]
pub struct FeaturedMedia {
    pub title: &'static str,
    /// Outlet or venue name.
    pub source: &'static str,
    pub date: &'static str,
    pub url: &'static str,
    pub blurb: &'static str,
}

/// Article metadata serialized into `pages.json`.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleMeta {
    /// Site-relative URL path (e.g. "/writings/conducting-meetings")
    pub url: String,

    pub title: &'static str,

    pub summary: &'static str,

    /// Display date
    pub date: &'static str,

    /// Publication date as ISO 8601 string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<&'static str>,
}

impl From<&'static Article> for ArticleMeta {
    fn from(article: &'static Article) -> Self {
        Self {
            url: article.path(),
            title: article.title,
            summary: article.summary,
            date: article.date,
            published: article.published,
        }
    }
}
