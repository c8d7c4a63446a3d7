//! Development server.
//!
//! A lightweight `tiny_http` server that drives every request through the
//! path router instead of a file tree:
//!
//! 1. Legacy `?/path` redirect form → 301 to the decoded location
//! 2. Site assets (stylesheet, feed, article index) → served directly
//! 3. Routable location → rendered view (articles with unknown slugs 404)
//! 4. Anything else → 302 to the default page, mirroring the router's
//!    self-heal
//!
//! The server blocks until Ctrl+C is received.

use crate::{
    config::SiteConfig,
    content::Registry,
    feed, log,
    render::{self, STYLESHEET},
    router::{self, DEFAULT_PATH, Location, Route, View},
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Start the development server.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let interface: std::net::IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface: {}", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Set up Ctrl+C handler for graceful shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, config) {
            log!("serve"; "request error: {err}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: std::net::IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < max_retries => continue,
            Err(err) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    max_retries,
                    base_port,
                    port,
                    err
                ));
            }
        }
    }
    unreachable!()
}

// ============================================================================
// Request Handling
// ============================================================================

fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    let registry = Registry::get();

    // Decode URL-encoded characters (e.g., %20 → space)
    let url = urlencoding::decode(request.url())
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| request.url().to_owned());

    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url.as_str(), ""),
    };

    // Legacy static-host redirect form: answer with the decoded location
    if let Some(decoded) = router::location::decode_redirect_query(query) {
        return respond_redirect(request, &decoded, 301);
    }

    // Site assets outside the route surface
    match path.trim_start_matches('/') {
        "style.css" => return respond(request, 200, "text/css; charset=utf-8", STYLESHEET.into()),
        asset if config.build.rss.enable && asset == config.build.rss.path.to_string_lossy() => {
            let xml = feed::render_feed(registry, config)?;
            return respond(request, 200, "application/rss+xml; charset=utf-8", xml);
        }
        asset if config.build.pages_json.enable
            && asset == config.build.pages_json.path.to_string_lossy() =>
        {
            let json = serde_json::to_string_pretty(&registry.article_index())?;
            return respond(request, 200, "application/json; charset=utf-8", json);
        }
        _ => {}
    }

    let location = Location::new(path);
    match router::match_path(&location) {
        // Off the route surface: the self-heal redirect, made visible
        None => respond_redirect(request, DEFAULT_PATH, 302),
        Some(Route::Page(_)) | Some(Route::Article { .. }) => {
            let view = router::resolve(&location, registry);
            let status = if view == View::NotFound { 404 } else { 200 };
            let html = render::render_view(view, registry, config);
            respond(request, status, "text/html; charset=utf-8", html)
        }
    }
}

fn respond(
    request: Request,
    status: u16,
    content_type: &str,
    body: String,
) -> Result<()> {
    let response = Response::from_string(body)
        .with_status_code(StatusCode(status))
        .with_header(Header::from_bytes("Content-Type", content_type).unwrap());
    request.respond(response)?;
    Ok(())
}

fn respond_redirect(request: Request, location: &str, status: u16) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(Header::from_bytes("Location", location).unwrap());
    request.respond(response)?;
    Ok(())
}
