//! folio - a personal portfolio/blog site in a single binary.

mod build;
mod cli;
mod config;
mod content;
mod feed;
mod logger;
mod markup;
mod render;
mod router;
mod serve;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use serve::serve_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_site(config),
        Commands::Serve { .. } => serve_site(config),
        Commands::Routes => print_routes(),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// The config file is optional: the content is compiled in, so a missing
/// folio.toml just means defaults.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Walk the route surface with a live router and print what each route
/// resolves to.
fn print_routes() -> Result<()> {
    use crate::content::Registry;
    use crate::router::{History, MemoryHistory, Page, Router, View};
    use std::sync::Arc;

    let history: Arc<dyn History> = Arc::new(MemoryHistory::new());
    let router = Router::new(history, Registry::get());
    let _guard = router.listen();

    let mut paths: Vec<String> = Page::ALL.iter().map(|page| page.path().to_owned()).collect();
    paths.extend(Registry::get().articles().iter().map(|article| article.path()));

    for path in paths {
        router.navigate(&path);
        let resolved = match router.resolve_current() {
            View::Page(page) => format!("page: {}", page.title()),
            View::Article(article) => format!("article: {}", article.title),
            View::NotFound => "not found".to_owned(),
        };
        log!("routes"; "{path} -> {resolved}");
    }

    Ok(())
}
