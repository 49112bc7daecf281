//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/politigraph/config.toml` (XDG) or platform config dir
//! 2. Project config: `.politigraph.toml`
//! 3. Environment variables: `POLITIGRAPH_*`
//!
//! # Intended Usage
//!
//! **Global config** (`~/.config/politigraph/config.toml`):
//! ```toml
//! [graphql]
//! endpoint = "https://graphql.politigraph.jp/"
//! token = "..."
//! ```
//!
//! The token is optional. Without it the client can still execute read
//! queries; merge mutations require the endpoint to accept the request,
//! so write paths are expected to be skipped in token-less environments.
//!
//! Every field has a default, so a bare environment (no config files at
//! all) still loads: `POLITIGRAPH_GRAPHQL_ENDPOINT` and
//! `POLITIGRAPH_GRAPHQL_TOKEN` are enough to point the client anywhere.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graphql: GraphqlConfig,
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer token for write (merge) operations. Optional; read paths
    /// work without it.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            timeout: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://graphql.politigraph.jp/".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".politigraph.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("POLITIGRAPH_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/politigraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("politigraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("politigraph").join("config.toml"))
            .unwrap_or_default()
    }
}
