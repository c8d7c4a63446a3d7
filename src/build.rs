//! Static export of the site.
//!
//! Every route gets its own `<route>/index.html` so any static host can
//! serve the site directly; the root `index.html` carries the default
//! page. Unknown paths are handled by the exported `404.html` shim, which
//! bounces through the query-string redirect the router decodes on load.

use crate::{
    config::SiteConfig,
    content::Registry,
    feed, log,
    render::{self, REDIRECT_SHIM, STYLESHEET},
    router::{Location, Page, View, resolve},
    utils::minify::minify_page,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Export the whole site into `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    let registry = Registry::get();

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
    }
    fs::create_dir_all(output)?;

    // Render every route in parallel
    let targets = export_targets(registry);
    targets
        .par_iter()
        .try_for_each(|(route, view)| export_route(route, *view, registry, config))?;
    log!("build"; "exported {} routes", targets.len());

    // Site-wide assets
    fs::write(output.join("style.css"), STYLESHEET)?;
    fs::write(output.join("404.html"), REDIRECT_SHIM)?;

    if config.build.pages_json.enable {
        let json = serde_json::to_string_pretty(&registry.article_index())?;
        write_nested(&output.join(&config.build.pages_json.path), json.as_bytes())?;
        log!("build"; "wrote {}", config.build.pages_json.path.display());
    }

    if config.build.rss.enable {
        let xml = feed::render_feed(registry, config)?;
        write_nested(&output.join(&config.build.rss.path), xml.as_bytes())?;
        log!("build"; "wrote {}", config.build.rss.path.display());
    }

    log!("build"; "done: {}", output.display());
    Ok(())
}

/// Every exportable route: the root, the literal pages, one per article.
fn export_targets(registry: &'static Registry) -> Vec<(String, View)> {
    let mut targets = vec![("/".to_owned(), resolve(&Location::new("/"), registry))];

    for page in Page::ALL {
        targets.push((page.path().to_owned(), View::Page(page)));
    }
    for article in registry.articles() {
        targets.push((article.path(), View::Article(article)));
    }

    targets
}

/// Map a route to its file in the output tree.
///
/// `/` → `index.html`, `/about` → `about/index.html`,
/// `/writings/x` → `writings/x/index.html`.
fn route_file(output: &Path, route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        output.join("index.html")
    } else {
        output.join(trimmed).join("index.html")
    }
}

fn export_route(
    route: &str,
    view: View,
    registry: &Registry,
    config: &SiteConfig,
) -> Result<()> {
    let html = render::render_view(view, registry, config);
    let html = minify_page(&html, config);

    let file = route_file(&config.build.output, route);
    write_nested(&file, &html).with_context(|| format!("Failed to export {route}"))
}

/// Write a file, creating parent directories as needed.
fn write_nested(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn export_config(output: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Siddhant Ekale".to_owned();
        config.base.url = Some("https://example.com".to_owned());
        config.build.output = output.to_path_buf();
        config.build.minify = false;
        config
    }

    #[test]
    fn test_route_file_mapping() {
        let output = Path::new("public");

        assert_eq!(route_file(output, "/"), output.join("index.html"));
        assert_eq!(route_file(output, "/about"), output.join("about/index.html"));
        assert_eq!(
            route_file(output, "/writings/good-to-great"),
            output.join("writings/good-to-great/index.html")
        );
    }

    #[test]
    fn test_export_targets_cover_pages_and_articles() {
        let targets = export_targets(Registry::get());
        let routes: Vec<&str> = targets.iter().map(|(r, _)| r.as_str()).collect();

        assert!(routes.contains(&"/"));
        assert!(routes.contains(&"/about"));
        assert!(routes.contains(&"/featured"));
        assert!(routes.contains(&"/writings/conducting-meetings"));
        // root + 5 literals + 8 articles
        assert_eq!(targets.len(), 14);
    }

    #[test]
    fn test_build_writes_every_route() {
        let dir = tempdir().unwrap();
        let config = export_config(dir.path());

        build_site(&config).unwrap();

        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("about/index.html").exists());
        assert!(dir.path().join("writings/index.html").exists());
        assert!(dir.path().join("writings/good-to-great/index.html").exists());
        assert!(dir.path().join("style.css").exists());
        assert!(dir.path().join("404.html").exists());
    }

    #[test]
    fn test_root_index_is_default_page() {
        let dir = tempdir().unwrap();
        let config = export_config(dir.path());

        build_site(&config).unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("About Me"));
    }

    #[test]
    fn test_pages_json_index() {
        let dir = tempdir().unwrap();
        let config = export_config(dir.path());

        build_site(&config).unwrap();

        let json = fs::read_to_string(dir.path().join("pages.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();

        assert_eq!(entries.len(), 5);
        assert!(entries.iter().any(|e| e["url"] == "/writings/good-to-great"));
    }

    #[test]
    fn test_rss_written_when_enabled() {
        let dir = tempdir().unwrap();
        let mut config = export_config(dir.path());
        config.build.rss.enable = true;

        build_site(&config).unwrap();

        let xml = fs::read_to_string(dir.path().join("feed.xml")).unwrap();
        assert!(xml.contains("<rss"));
        assert!(xml.contains("Conducting Meetings"));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = tempdir().unwrap();
        let mut config = export_config(dir.path());
        config.build.clean = true;

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("stale.html"), "old").unwrap();

        build_site(&config).unwrap();

        assert!(!dir.path().join("stale.html").exists());
        assert!(dir.path().join("index.html").exists());
    }

    #[test]
    fn test_404_shim_encodes_redirect() {
        let dir = tempdir().unwrap();
        let config = export_config(dir.path());

        build_site(&config).unwrap();

        let shim = fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert!(shim.contains("~and~"));
        assert!(shim.contains("'/?/'"));
    }

    #[test]
    fn test_minified_export_is_smaller() {
        let plain_dir = tempdir().unwrap();
        let plain = export_config(plain_dir.path());
        build_site(&plain).unwrap();

        let min_dir = tempdir().unwrap();
        let mut minified = export_config(min_dir.path());
        minified.build.minify = true;
        build_site(&minified).unwrap();

        let plain_len = fs::metadata(plain_dir.path().join("about/index.html")).unwrap().len();
        let min_len = fs::metadata(min_dir.path().join("about/index.html")).unwrap().len();
        assert!(min_len < plain_len);
    }
}
