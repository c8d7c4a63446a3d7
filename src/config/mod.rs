//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, tagline, url)    |
//! | `[build]`   | Static export (output dir, minify, rss, index) |
//! | `[serve]`   | Development server (port, interface)           |
//! | `[extra]`   | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Siddhant Ekale"
//! tagline = "Eternally aching to build."
//! url = "https://example.com"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [build.rss]
//! enable = true
//!
//! [serve]
//! port = 4173
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod serve;

pub use base::{BaseConfig, SocialConfig};
pub use build::BuildConfig;
pub use error::ConfigError;
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Static export settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf());
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.config_path = root.join(&cli.config);
        self.set_root(&root);

        match &cli.command {
            Commands::Build { build_args } | Commands::Serve { build_args, .. } => {
                Self::update_option(&mut self.build.output, build_args.output.as_ref());
                Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
                Self::update_option(&mut self.build.rss.enable, build_args.rss.as_ref());
                if build_args.clean {
                    self.build.clean = true;
                }
                if let Some(base_url) = &build_args.base_url {
                    self.base.url = Some(base_url.clone());
                }
            }
            Commands::Routes => {}
        }

        if let Commands::Serve {
            interface, port, ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            // Local preview links should point at the dev server
            self.base.url = Some(format!(
                "http://{}:{}",
                self.serve.interface, self.serve.port
            ));
        }

        // Resolve the output dir against the project root
        if self.build.output.is_relative() {
            self.build.output = root.join(&self.build.output);
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if self.build.rss.enable {
            match &self.base.url {
                None => bail!("[base.url] is required for RSS generation"),
                Some(url) if !url.starts_with("http") => {
                    bail!(ConfigError::Validation(
                        "[base.url] must start with http:// or https://".into()
                    ))
                }
                _ => {}
            }
        }

        for (field, link) in [
            ("[base.social.linkedin]", &self.base.social.linkedin),
            ("[base.social.twitter]", &self.base.social.twitter),
        ] {
            if let Some(link) = link
                && !link.starts_with("http")
            {
                bail!(ConfigError::Validation(format!(
                    "{field} must be an absolute http(s) link"
                )));
            }
        }

        if self.serve.port == 0 {
            bail!(ConfigError::Validation("[serve.port] must be non-zero".into()));
        }

        Ok(())
    }
}
