//! RSS feed generation from the article registry.
//!
//! Only published articles (those carrying a machine-readable date) make it
//! into the feed; placeholders are skipped.

use crate::{config::SiteConfig, content::Registry, utils::date::Date};
use anyhow::{Context, Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

/// Build the RSS XML for the site.
pub fn render_feed(registry: &Registry, config: &SiteConfig) -> Result<String> {
    let base_url = config
        .base
        .url
        .as_deref()
        .context("[base.url] is required for RSS generation")?
        .trim_end_matches('/')
        .to_owned();

    let author = feed_author(config);

    let items: Vec<_> = registry
        .articles()
        .iter()
        .filter_map(|article| {
            let published = article.published?;
            let date = match Date::parse(published) {
                Ok(date) => date,
                Err(err) => {
                    crate::log!("feed"; "skipping {}: {err}", article.slug);
                    return None;
                }
            };

            let link = format!("{base_url}{}", article.path());
            Some(
                ItemBuilder::default()
                    .title(article.title.to_owned())
                    .link(link.clone())
                    .guid(GuidBuilder::default().permalink(true).value(link).build())
                    .description(article.summary.to_owned())
                    .pub_date(date.to_rfc2822())
                    .author(author.clone())
                    .build(),
            )
        })
        .collect();

    let channel = ChannelBuilder::default()
        .title(config.base.title.clone())
        .link(base_url)
        .description(config.base.description.clone())
        .language(config.base.language.clone())
        .generator("folio".to_owned())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|err| anyhow!("rss validate: {err}"))?;

    Ok(channel.to_string())
}

/// RSS wants `email (Name)`.
fn feed_author(config: &SiteConfig) -> String {
    format!("{} ({})", config.base.email, config.base.author)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Siddhant Ekale".to_owned();
        config.base.description = "Writings on engineering and leadership".to_owned();
        config.base.url = Some("https://example.com/".to_owned());
        config.base.author = "Sid".to_owned();
        config.base.email = "sid@example.com".to_owned();
        config.build.rss.enable = true;
        config
    }

    #[test]
    fn test_feed_validates_and_lists_published_articles() {
        let xml = render_feed(Registry::get(), &feed_config()).unwrap();

        // The five real writings, none of the placeholders
        assert_eq!(xml.matches("<item>").count(), 5);
        assert!(xml.contains("Conducting Meetings"));
        assert!(!xml.contains("RouterLLM"));
    }

    #[test]
    fn test_feed_links_are_absolute() {
        let xml = render_feed(Registry::get(), &feed_config()).unwrap();

        assert!(xml.contains("<link>https://example.com/writings/good-to-great</link>"));
        // Trailing slash on base url must not double up
        assert!(!xml.contains("example.com//writings"));
    }

    #[test]
    fn test_feed_dates_are_rfc2822() {
        let xml = render_feed(Registry::get(), &feed_config()).unwrap();
        assert!(xml.contains("<pubDate>Thu, 01 May 2025 00:00:00 GMT</pubDate>"));
    }

    #[test]
    fn test_feed_author_format() {
        let xml = render_feed(Registry::get(), &feed_config()).unwrap();
        assert!(xml.contains("sid@example.com (Sid)"));
    }

    #[test]
    fn test_feed_requires_base_url() {
        let mut config = feed_config();
        config.base.url = None;
        assert!(render_feed(Registry::get(), &config).is_err());
    }
}
