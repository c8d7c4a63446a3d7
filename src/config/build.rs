//! `[build]` section configuration.
//!
//! Controls the static export: output directory, minification, the rss
//! feed and the machine-readable article index.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - static export settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory. Normally set from the CLI, not the file.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Output directory for the exported site.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify exported HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Empty the output directory before exporting.
    #[serde(default)]
    pub clean: bool,

    /// RSS feed generation.
    #[serde(default)]
    pub rss: RssConfig,

    /// Article index JSON generation.
    #[serde(default)]
    pub pages_json: PagesJsonConfig,
}

/// `[build.rss]` - feed generation settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::rss_path")]
    #[educe(Default = defaults::build::rss_path())]
    pub path: PathBuf,
}

/// `[build.pages_json]` - article index settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PagesJsonConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::pages_json_path")]
    #[educe(Default = defaults::build::pages_json_path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(!config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
        assert!(config.build.pages_json.enable);
        assert_eq!(config.build.pages_json.path, PathBuf::from("pages.json"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [base]
            title = "Test"

            [build]
            output = "dist"
            minify = false
            clean = true

            [build.rss]
            enable = true
            path = "rss.xml"

            [build.pages_json]
            enable = false
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("rss.xml"));
        assert!(!config.build.pages_json.enable);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"

            [build]
            out = "dist"
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }
}
