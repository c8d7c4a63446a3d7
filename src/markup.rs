//! Article body text → typed rendering units.
//!
//! Bodies use a deliberately tiny markup: blank lines separate paragraphs,
//! a paragraph of the form `"quoted text" - Attribution` is a pull quote,
//! and `**bold**` marks emphasized spans inside ordinary paragraphs.
//! Content is trusted static data; no escaping happens here.

use regex::Regex;
use std::sync::LazyLock;

/// `**…**` pairs, shortest match. A lone `**` stays plain text.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Separates the quoted text from its attribution: `"…" - Author`.
const QUOTE_DELIM: &str = "\" - ";

/// An inline run within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(String),
}

/// A block-level unit of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    Quote {
        /// Quoted text without the surrounding double quotes.
        text: String,
        attribution: String,
    },
}

/// Split a raw body into typed blocks.
pub fn parse(body: &str) -> Vec<Block> {
    body.split("\n\n")
        .filter(|unit| !unit.trim().is_empty())
        .map(parse_block)
        .collect()
}

/// Classify one paragraph unit.
///
/// Quotes must open with `"` and carry the `" - ` delimiter; everything
/// else is an ordinary paragraph scanned for emphasis.
fn parse_block(unit: &str) -> Block {
    if let Some(quoted) = unit.strip_prefix('"')
        && let Some((text, attribution)) = quoted.split_once(QUOTE_DELIM)
    {
        return Block::Quote {
            text: text.to_owned(),
            attribution: attribution.trim_end().to_owned(),
        };
    }

    Block::Paragraph(parse_spans(unit))
}

/// Split paragraph text into plain and emphasized spans.
fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS.captures_iter(text) {
        let matched = caps.get(0).unwrap();
        if matched.start() > last {
            spans.push(Span::Text(text[last..matched.start()].to_owned()));
        }
        spans.push(Span::Strong(caps[1].to_owned()));
        last = matched.end();
    }

    if last < text.len() {
        spans.push(Span::Text(text[last..].to_owned()));
    }

    spans
}
