//! HTML rendering of resolved views.
//!
//! One embedded layout template with `{placeholder}` substitution; page
//! bodies are assembled as HTML fragments. Content is trusted static data,
//! so nothing is escaped on the way through.

use crate::{
    config::SiteConfig,
    content::{Article, Registry},
    markup::{self, Block, Span},
    router::{Page, View},
};

/// Page layout template (embedded at compile time)
const LAYOUT_TEMPLATE: &str = include_str!("../embed/layout.html");

/// Site stylesheet, exported as `/style.css`
pub const STYLESHEET: &str = include_str!("../embed/style.css");

/// Static-host redirect shim, exported as `/404.html`
pub const REDIRECT_SHIM: &str = include_str!("../embed/404.html");

/// Render a resolved view into a full HTML document.
pub fn render_view(view: View, registry: &Registry, config: &SiteConfig) -> String {
    let (title, content) = match view {
        View::Page(Page::About) => ("About".to_owned(), render_about(registry)),
        View::Page(Page::Writings) => ("Writings".to_owned(), render_writings(registry)),
        View::Page(Page::Featured) => ("Featured".to_owned(), render_featured(registry)),
        View::Page(Page::Education) => ("Education".to_owned(), render_education(registry)),
        View::Page(Page::Career) => ("Career".to_owned(), render_career(registry)),
        View::Article(article) => (article.title.to_owned(), render_article(article)),
        View::NotFound => ("Not Found".to_owned(), render_not_found()),
    };

    let document_title = if config.base.title.is_empty() {
        title
    } else {
        format!("{title} · {}", config.base.title)
    };

    let head_extra = if config.build.rss.enable {
        format!(
            "\n    <link rel=\"alternate\" type=\"application/rss+xml\" href=\"/{}\">",
            config.build.rss.path.display()
        )
    } else {
        String::new()
    };

    LAYOUT_TEMPLATE
        .replace("{lang}", &config.base.language)
        .replace("{title}", &document_title)
        .replace("{description}", &config.base.description)
        .replace("{head_extra}", &head_extra)
        .replace("{site_title}", &config.base.title)
        .replace("{tagline}", &config.base.tagline)
        .replace("{social}", &social_links(config))
        .replace("{nav}", &nav_links(view))
        .replace("{content}", &content)
        .replace("{copyright}", &config.base.copyright)
}

// ============================================================================
// Chrome
// ============================================================================

fn social_links(config: &SiteConfig) -> String {
    let mut links = String::new();
    for (label, url) in [
        ("LinkedIn", &config.base.social.linkedin),
        ("Twitter", &config.base.social.twitter),
    ] {
        if let Some(url) = url {
            links.push_str(&format!(
                r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{label}</a>"#
            ));
        }
    }
    links
}

/// Header navigation. Only About and Writings are advertised; article and
/// not-found views highlight nothing, like the original nav behavior.
fn nav_links(view: View) -> String {
    [Page::About, Page::Writings]
        .iter()
        .map(|page| {
            let class = if view == View::Page(*page) {
                r#" class="active""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{class}>{}</a>"#, page.path(), page.title())
        })
        .collect()
}

// ============================================================================
// Page Bodies
// ============================================================================

fn render_about(registry: &Registry) -> String {
    let writings: String = registry
        .featured_writings()
        .iter()
        .map(|article| {
            format!(
                r#"<div class="card">
<h4>{title}</h4>
<p class="meta">{summary}</p>
<a class="more" href="{path}">Read More</a>
</div>"#,
                title = article.title,
                summary = article.summary,
                path = article.path(),
            )
        })
        .collect();

    let timeline: String = registry
        .timeline()
        .iter()
        .map(|company| {
            let stints: String = company
                .stints
                .iter()
                .map(|stint| {
                    let notes: String = stint
                        .notes
                        .iter()
                        .map(|note| format!("<p>{note}</p>\n"))
                        .collect();
                    format!(
                        r#"<div class="stint">
<span class="period">{period} &bull; {location}</span>
{notes}</div>"#,
                        period = stint.period,
                        location = stint.location,
                    )
                })
                .collect();
            format!("<h4>{}</h4>\n{stints}", company.name)
        })
        .collect();

    format!(
        r#"<div class="sheet">
<div class="columns">
<div>
<h2>About Me</h2>
<p>{intro}</p>
<h3>Featured Writings</h3>
{writings}
</div>
<div>
<h2>Timeline</h2>
<div class="timeline">
{timeline}</div>
</div>
</div>
</div>"#,
        intro = registry.about_intro(),
    )
}

fn render_writings(registry: &Registry) -> String {
    let cards: String = registry
        .articles()
        .iter()
        .map(|article| {
            format!(
                r#"<div class="card">
<h3>{title}</h3>
<p class="meta">{date}</p>
<hr>
<p>{summary}</p>
<a class="more" href="{path}">Read More</a>
</div>"#,
                title = article.title,
                date = article.date,
                summary = article.summary,
                path = article.path(),
            )
        })
        .collect();

    format!("<div class=\"sheet\">\n<h2>Writings</h2>\n{cards}</div>")
}

fn render_article(article: &Article) -> String {
    format!(
        r#"<div class="sheet article">
<h1>{title}</h1>
<p class="date">{date}</p>
{body}</div>"#,
        title = article.title,
        date = article.date,
        body = render_blocks(&markup::parse(article.body)),
    )
}

fn render_featured(registry: &Registry) -> String {
    let cards: String = registry
        .featured_media()
        .iter()
        .map(|media| {
            format!(
                r#"<div class="card">
<h3>{title}</h3>
<p class="meta">{source} &bull; {date}</p>
<hr>
<p>{blurb}</p>
<a class="more" href="{url}" target="_blank" rel="noopener noreferrer">Watch / Read</a>
</div>"#,
                title = media.title,
                source = media.source,
                date = media.date,
                blurb = media.blurb,
                url = media.url,
            )
        })
        .collect();

    format!("<div class=\"sheet\">\n<h2>Featured</h2>\n{cards}</div>")
}

fn render_education(registry: &Registry) -> String {
    let cards: String = registry
        .education()
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="card">
<h3>{institution}</h3>
<p>{degree}</p>
<p class="meta">{years}</p>
<hr>
<p>{description}</p>
</div>"#,
                institution = entry.institution,
                degree = entry.degree,
                years = entry.years,
                description = entry.description,
            )
        })
        .collect();

    format!("<div class=\"sheet\">\n<h2>Education</h2>\n{cards}</div>")
}

fn render_career(registry: &Registry) -> String {
    let cards: String = registry
        .career()
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="card">
<h3>{company}</h3>
<p>{position}</p>
<p class="meta">{years}</p>
<hr>
<p>{description}</p>
</div>"#,
                company = entry.company,
                position = entry.position,
                years = entry.years,
                description = entry.description,
            )
        })
        .collect();

    format!("<div class=\"sheet\">\n<h2>Career</h2>\n{cards}</div>")
}

fn render_not_found() -> String {
    r#"<div class="sheet article">
<h1>Writing not found</h1>
<p>That piece doesn't exist (yet). Head back to the <a href="/writings">writings</a>.</p>
</div>"#
        .to_owned()
}

// ============================================================================
// Article Body
// ============================================================================

fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Quote { text, attribution } => format!(
                "<blockquote>\n<p>\"{text}\"</p>\n<footer>- {attribution}</footer>\n</blockquote>\n"
            ),
            Block::Paragraph(spans) => format!("<p>{}</p>\n", render_spans(spans)),
        })
        .collect()
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) => text.clone(),
            Span::Strong(text) => format!("<strong>{text}</strong>"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Siddhant Ekale".to_owned();
        config.base.tagline = "Eternally aching to build.".to_owned();
        config.base.social.linkedin = Some("https://www.linkedin.com/in/someone/".to_owned());
        config
    }

    fn render(view: View) -> String {
        render_view(view, Registry::get(), &test_config())
    }

    #[test]
    fn test_layout_placeholders_filled() {
        let html = render(View::Page(Page::About));

        assert!(html.contains("<title>About · Siddhant Ekale</title>"));
        assert!(html.contains("Eternally aching to build."));
        assert!(html.contains("linkedin.com"));
        assert!(!html.contains('{'), "unfilled template placeholder");
    }

    #[test]
    fn test_about_page_sections() {
        let html = render(View::Page(Page::About));

        assert!(html.contains("About Me"));
        assert!(html.contains("Featured Writings"));
        assert!(html.contains("Timeline"));
        assert!(html.contains("Palantir Technologies"));
        assert!(html.contains("Helitrak Inc."));
        // Six featured writings cards
        assert_eq!(html.matches("Read More").count(), 6);
    }

    #[test]
    fn test_writings_listing_has_all_articles() {
        let html = render(View::Page(Page::Writings));

        for article in Registry::get().articles() {
            assert!(html.contains(article.title), "missing {}", article.slug);
            assert!(html.contains(&article.path()));
        }
    }

    #[test]
    fn test_article_page_renders_quote_and_emphasis() {
        let article = Registry::get().article("conducting-meetings").unwrap();
        let html = render(View::Article(article));

        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<footer>- Aristotle</footer>"));
        assert!(html.contains("<strong>when and how</strong>"));
    }

    #[test]
    fn test_placeholder_article_renders_stub() {
        let article = Registry::get().article("understanding-mcp").unwrap();
        let html = render(View::Article(article));

        assert!(html.contains("<p>Coming soon...</p>"));
    }

    #[test]
    fn test_featured_page_links_out() {
        let html = render(View::Page(Page::Featured));

        assert!(html.contains("<h2>Featured</h2>"));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_nav_active_state() {
        let about = render(View::Page(Page::About));
        assert!(about.contains(r#"<a href="/about" class="active">About</a>"#));

        let writings = render(View::Page(Page::Writings));
        assert!(writings.contains(r#"<a href="/writings" class="active">Writings</a>"#));

        // Articles highlight nothing
        let article = Registry::get().article("good-to-great").unwrap();
        let html = render(View::Article(article));
        assert!(!html.contains("class=\"active\""));
    }

    #[test]
    fn test_not_found_view() {
        let html = render(View::NotFound);

        assert!(html.contains("Writing not found"));
        assert!(html.contains(r#"href="/writings""#));
    }

    #[test]
    fn test_feed_link_follows_config() {
        let mut config = test_config();
        let registry = Registry::get();

        let html = render_view(View::Page(Page::About), registry, &config);
        assert!(!html.contains("application/rss+xml"));

        config.build.rss.enable = true;
        let html = render_view(View::Page(Page::About), registry, &config);
        assert!(html.contains(r#"type="application/rss+xml" href="/feed.xml""#));
    }

    #[test]
    fn test_education_and_career_pages() {
        let education = render(View::Page(Page::Education));
        assert!(education.contains("Master of Science in Computer Science"));

        let career = render(View::Page(Page::Career));
        assert!(career.contains("Tech Innovation Corp"));
    }
}
