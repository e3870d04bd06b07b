//! Configuration types for Banter.
//!
//! `BanterConfig` represents the `config.toml` that controls the listening
//! address and optional per-session history limits.

use serde::{Deserialize, Serialize};

/// Top-level configuration. All fields have defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanterConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sessions: SessionConfig,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Session store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Upper bound on messages kept per session. `None` keeps everything.
    ///
    /// The store rounds this down to whole user/bot exchanges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_messages: Option<usize>,
}
