pub mod schema;
pub mod watcher;

pub use schema::{SensorsConfig, VtopConfig};
pub use watcher::ConfigWatcher;

use std::path::{Path, PathBuf};
use vtop_core::{Result, VtopError};

/// Load configuration from a TOML file.  Returns `VtopConfig::default()` if
/// the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<VtopConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(VtopConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| VtopError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a config document.
pub fn parse(raw: &str) -> Result<VtopConfig> {
    toml::from_str(raw).map_err(|e| VtopError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    config_dir().join("vtop.toml")
}

/// Directory searched for user theme files (`<name>.toml`).
pub fn themes_dir() -> PathBuf {
    config_dir().join("themes")
}

/// Directory for runtime state such as the log file, honouring `$XDG_STATE_HOME`.
pub fn state_dir() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"]).join("vtop")
}

fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).join("vtop")
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            fallback.iter().fold(PathBuf::from(home), |p, part| p.join(part))
        })
}
