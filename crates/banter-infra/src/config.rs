//! Configuration loader for Banter.
//!
//! Reads `config.toml` and deserializes it into [`BanterConfig`]. Falls back to
//! defaults when the file is missing or malformed, so the server always starts.

use std::path::{Path, PathBuf};

use banter_types::config::BanterConfig;

/// File name looked up inside the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve which config file to read.
///
/// Priority:
/// 1. An explicit path (from `--config` or `BANTER_CONFIG`)
/// 2. `<platform config dir>/banter/config.toml`
/// 3. `./banter.toml` when the platform has no config directory
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(dir) = dirs::config_dir() {
        return dir.join("banter").join(CONFIG_FILE_NAME);
    }

    PathBuf::from("banter.toml")
}

/// Load configuration from `path`.
///
/// - Missing file: returns [`BanterConfig::default()`].
/// - Unreadable or invalid file: logs a warning and returns the default.
/// - Otherwise: the parsed config.
pub async fn load_config(path: &Path) -> BanterConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return BanterConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return BanterConfig::default();
        }
    };

    match toml::from_str::<BanterConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            BanterConfig::default()
        }
    }
}
