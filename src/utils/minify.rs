//! HTML minification for the static export.
//!
//! Thin wrapper around `minify_html` so callers only deal with the
//! config-controlled enable switch.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify an HTML document when `[build].minify` is on.
///
/// Returns `Cow::Borrowed` when minification is disabled.
pub fn minify_page<'a>(html: &'a str, config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(html.as_bytes());
    }

    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;

    Cow::Owned(minify_html::minify(html.as_bytes(), &cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(minify: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = minify;
        config
    }

    #[test]
    fn test_disabled_is_borrowed() {
        let html = "<html>  <body>  hi  </body>  </html>";
        let out = minify_page(html, &config(false));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, html.as_bytes());
    }

    #[test]
    fn test_enabled_shrinks_whitespace() {
        let html = "<html>\n  <body>\n    <p>hi</p>\n  </body>\n</html>";
        let out = minify_page(html, &config(true));
        assert!(out.len() < html.len());
    }

    #[test]
    fn test_enabled_strips_comments() {
        let html = "<html><body><!-- gone --><p>kept</p></body></html>";
        let out = minify_page(html, &config(true));
        let out = String::from_utf8(out.into_owned()).unwrap();
        assert!(!out.contains("gone"));
        assert!(out.contains("kept"));
    }
}
