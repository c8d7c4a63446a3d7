//! The logical in-app location.
//!
//! A location is an opaque path string that always starts with `/`. The
//! empty and root paths normalize to the default page so that the rest of
//! the router never sees them.

use std::fmt;

/// Path of the page every unknown location falls back to.
pub const DEFAULT_PATH: &str = "/about";

/// Placeholder the static-host redirect uses so `&` survives rewriting.
const AMP_TOKEN: &str = "~and~";

/// A normalized in-app path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Normalize a raw path. Empty or `/` becomes the default page; a
    /// missing leading slash is restored.
    pub fn new(path: &str) -> Self {
        let path = path.trim();
        match path {
            "" | "/" => Self(DEFAULT_PATH.to_owned()),
            p if p.starts_with('/') => Self(p.to_owned()),
            p => Self(format!("/{p}")),
        }
    }

    /// Read the startup location from the environment's path and query.
    ///
    /// Implements the legacy static-hosting redirect convention: when the
    /// query encodes a path (`?/writings/x`), the decoded value wins and
    /// the literal query string is discarded.
    pub fn from_env(path: &str, query: &str) -> Self {
        match decode_redirect_query(query) {
            Some(decoded) => Self::new(&decoded),
            None => Self::new(path),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decode the `?/<path>` redirect form produced by the 404 shim.
///
/// The shim turns `/writings/x?a=1&b=2` into `?/writings/x&a=1~and~b=2`
/// so a static host's rewrite keeps a single query parameter; this undoes
/// it: split on `&`, restore `&` from the placeholder, re-join with `?`.
///
/// Returns `None` when the query does not carry an encoded path.
pub fn decode_redirect_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if !query.starts_with('/') {
        return None;
    }

    let decoded = query
        .split('&')
        .map(|part| part.replace(AMP_TOKEN, "&"))
        .collect::<Vec<_>>()
        .join("?");

    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_root_normalize_to_default() {
        assert_eq!(Location::new("").as_str(), DEFAULT_PATH);
        assert_eq!(Location::new("/").as_str(), DEFAULT_PATH);
    }

    #[test]
    fn test_leading_slash_restored() {
        assert_eq!(Location::new("writings").as_str(), "/writings");
    }

    #[test]
    fn test_path_kept_verbatim() {
        assert_eq!(
            Location::new("/writings/good-to-great").as_str(),
            "/writings/good-to-great"
        );
    }

    #[test]
    fn test_from_env_plain_path() {
        let loc = Location::from_env("/featured", "");
        assert_eq!(loc.as_str(), "/featured");
    }

    #[test]
    fn test_from_env_root_defaults() {
        assert_eq!(Location::from_env("/", "").as_str(), DEFAULT_PATH);
        assert_eq!(Location::from_env("", "").as_str(), DEFAULT_PATH);
    }

    #[test]
    fn test_from_env_redirect_query_wins() {
        let loc = Location::from_env("/", "?/writings/good-to-great");
        assert_eq!(loc.as_str(), "/writings/good-to-great");
    }

    #[test]
    fn test_decode_no_encoded_path() {
        assert_eq!(decode_redirect_query(""), None);
        assert_eq!(decode_redirect_query("?q=search"), None);
        assert_eq!(decode_redirect_query("utm_source=x"), None);
    }

    #[test]
    fn test_decode_simple_path() {
        assert_eq!(
            decode_redirect_query("?/writings/good-to-great"),
            Some("/writings/good-to-great".to_owned())
        );
    }

    #[test]
    fn test_decode_without_question_mark() {
        assert_eq!(
            decode_redirect_query("/writings/good-to-great"),
            Some("/writings/good-to-great".to_owned())
        );
    }

    #[test]
    fn test_decode_restores_query_params() {
        // 404 shim output for `/writings/x?a=1&b=2`
        assert_eq!(
            decode_redirect_query("?/writings/x&a=1~and~b=2"),
            Some("/writings/x?a=1&b=2".to_owned())
        );
    }
}
