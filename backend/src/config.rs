//! Server configuration, read from the environment with sensible local defaults.

use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_UI_ORIGIN: &str = "http://localhost:3000";

/// Runtime settings for the backend binary
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to (`ZOO_ADMIN_ADDR`)
    pub bind_addr: SocketAddr,
    /// Origin allowed by CORS, i.e. where the admin UI is served (`ZOO_ADMIN_UI_ORIGIN`)
    pub ui_origin: String,
    /// Load demo animals and cares on startup (`ZOO_ADMIN_SEED`)
    pub seed_demo_data: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("ZOO_ADMIN_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("ZOO_ADMIN_ADDR must be a socket address like 127.0.0.1:5000")?;

        let ui_origin = lookup("ZOO_ADMIN_UI_ORIGIN").unwrap_or_else(|| DEFAULT_UI_ORIGIN.to_string());

        let seed_demo_data = match lookup("ZOO_ADMIN_SEED") {
            None => true,
            Some(value) => parse_flag(&value)
                .with_context(|| format!("ZOO_ADMIN_SEED must be true or false, got '{}'", value))?,
        };

        Ok(Self {
            bind_addr,
            ui_origin,
            seed_demo_data,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            ui_origin: DEFAULT_UI_ORIGIN.to_string(),
            seed_demo_data: true,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("unrecognized flag value"),
    }
}
