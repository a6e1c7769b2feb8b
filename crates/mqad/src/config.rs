//! Configuration for mqad.
//!
//! Loads settings from /etc/mqa/config.toml (falling back to
//! /var/lib/mqa/config.toml), then applies environment overrides so the
//! original deployment variables keep working.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/mqa/config.toml";

/// Default config file path for fallback
pub const DEFAULT_CONFIG_PATH: &str = "/var/lib/mqa/config.toml";

/// Upstream messaging API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_messages_url")]
    pub messages_url: String,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_messages_url() -> String {
    "https://november7-730026606190.europe-west1.run.app/messages".to_string()
}

fn default_http_timeout() -> u64 {
    20
}

fn default_cache_ttl() -> u64 {
    900
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            messages_url: default_messages_url(),
            http_timeout_secs: default_http_timeout(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load config from file, or return defaults, then apply env overrides.
    pub fn load() -> Self {
        let mut config = Self::load_from_path(CONFIG_PATH)
            .or_else(|_| Self::load_from_path(DEFAULT_CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            });
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path);
        Ok(config)
    }

    /// Apply environment overrides. The lookup is injected so tests
    /// don't mutate the process environment.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("MESSAGES_API_URL") {
            self.upstream.messages_url = url;
        }
        if let Some(ttl) = lookup("CACHE_TTL_SECONDS") {
            match ttl.parse() {
                Ok(secs) => self.upstream.cache_ttl_secs = secs,
                Err(_) => warn!("Ignoring non-numeric CACHE_TTL_SECONDS: {}", ttl),
            }
        }
        if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(port) => {
                    let host = self
                        .server
                        .bind
                        .rsplit_once(':')
                        .map(|(host, _)| host)
                        .unwrap_or("0.0.0.0");
                    self.server.bind = format!("{host}:{port}");
                }
                Err(_) => warn!("Ignoring non-numeric PORT: {}", port),
            }
        }
    }
}
