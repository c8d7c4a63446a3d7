//! Compiled-in site content and the registry over it.
//!
//! The registry is built once on first access and immutable afterwards;
//! every lookup during resolution goes through it.

mod data;
pub mod types;

pub use data::COMING_SOON;
pub use types::{
    Article, ArticleMeta, CareerEntry, EducationEntry, FeaturedMedia, TimelineCompany,
};

use std::collections::HashMap;
use std::sync::LazyLock;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Slug-indexed view over the static content.
pub struct Registry {
    by_slug: HashMap<&'static str, &'static Article>,
}

impl Registry {
    fn new() -> Self {
        let mut by_slug = HashMap::with_capacity(data::ARTICLES.len());
        for article in data::ARTICLES {
            let previous = by_slug.insert(article.slug, article);
            debug_assert!(previous.is_none(), "duplicate slug: {}", article.slug);
        }
        Self { by_slug }
    }

    /// The process-wide registry.
    pub fn get() -> &'static Registry {
        &REGISTRY
    }

    /// Look up an article by its slug.
    pub fn article(&self, slug: &str) -> Option<&'static Article> {
        self.by_slug.get(slug).copied()
    }

    /// All writings, in listing order (newest first, as authored).
    pub fn articles(&self) -> &'static [Article] {
        data::ARTICLES
    }

    /// The leading writings shown on the About page.
    pub fn featured_writings(&self) -> &'static [Article] {
        &data::ARTICLES[..data::FEATURED_WRITINGS]
    }

    /// Metadata for `pages.json`, published articles only.
    pub fn article_index(&self) -> Vec<ArticleMeta> {
        data::ARTICLES
            .iter()
            .filter(|a| a.published.is_some())
            .map(ArticleMeta::from)
            .collect()
    }

    pub fn education(&self) -> &'static [EducationEntry] {
        data::EDUCATION
    }

    pub fn career(&self) -> &'static [CareerEntry] {
        data::CAREER
    }

    pub fn timeline(&self) -> &'static [TimelineCompany] {
        data::TIMELINE
    }

    pub fn featured_media(&self) -> &'static [FeaturedMedia] {
        data::FEATURED_MEDIA
    }

    pub fn about_intro(&self) -> &'static str {
        data::ABOUT_INTRO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_lookup_by_slug() {
        let registry = Registry::get();
        let article = registry.article("conducting-meetings").unwrap();

        assert_eq!(article.title, "Conducting Meetings");
        assert_eq!(article.date, "May 2025");
    }

    #[test]
    fn test_unknown_slug() {
        assert!(Registry::get().article("no-such-writing").is_none());
    }

    #[test]
    fn test_slug_lookup_is_exact() {
        let registry = Registry::get();
        assert!(registry.article("Conducting-Meetings").is_none());
        assert!(registry.article("conducting-meetings/").is_none());
        assert!(registry.article("").is_none());
    }

    #[test]
    fn test_article_path() {
        let article = Registry::get().article("good-to-great").unwrap();
        assert_eq!(article.path(), "/writings/good-to-great");
    }

    #[test]
    fn test_every_article_reachable() {
        let registry = Registry::get();
        for article in registry.articles() {
            assert!(registry.article(article.slug).is_some());
        }
    }

    #[test]
    fn test_featured_writings_is_prefix() {
        let registry = Registry::get();
        let featured = registry.featured_writings();

        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].slug, registry.articles()[0].slug);
    }

    #[test]
    fn test_placeholders_have_stub_body_and_no_date() {
        let article = Registry::get().article("router-llm").unwrap();
        assert_eq!(article.body, COMING_SOON);
        assert!(article.published.is_none());
    }

    #[test]
    fn test_article_index_skips_placeholders() {
        let index = Registry::get().article_index();

        assert_eq!(index.len(), 5);
        assert!(index.iter().all(|m| m.published.is_some()));
        assert!(index.iter().any(|m| m.url == "/writings/good-to-great"));
    }

    #[test]
    fn test_published_dates_parse() {
        use crate::utils::date::Date;

        for article in Registry::get().articles() {
            if let Some(published) = article.published {
                assert!(Date::parse(published).is_ok(), "bad date on {}", article.slug);
            }
        }
    }

    #[test]
    fn test_real_bodies_have_paragraph_breaks() {
        let article = Registry::get().article("tell-me-about-yourself").unwrap();
        assert!(article.body.contains("\n\n"));
        assert!(article.body.starts_with("\"Brevity is the soul of wit\""));
    }
}
