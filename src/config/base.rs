//! `[base]` section configuration.
//!
//! Contains the site owner's identity: title, tagline, social links.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// title = "Siddhant Ekale"
/// tagline = "Engineer by discipline."
/// url = "https://example.com"
///
/// [base.social]
/// linkedin = "https://www.linkedin.com/in/someone/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, shown in the hero banner and browser tab.
    pub title: String,

    /// Author name for the rss feed.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author email for the rss feed.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// One-line tagline under the hero title.
    #[serde(default)]
    pub tagline: String,

    /// Site description for SEO meta tags and the rss channel.
    #[serde(default)]
    pub description: String,

    /// Base URL for absolute links in the feed.
    /// Required when `[build.rss].enable = true`.
    #[serde(default)]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice for the site footer.
    #[serde(default)]
    pub copyright: String,

    /// External profile links shown in the hero banner.
    #[serde(default)]
    pub social: SocialConfig,
}

/// `[base.social]` - external profile links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub twitter: Option<String>,
}
