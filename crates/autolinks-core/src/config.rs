use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page fetch parameters (`[fetch]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with the page request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: concat!("autolinks/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Which clipboard strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Native clipboard utility if one is on PATH, else OSC 52.
    #[default]
    Auto,
    /// Native clipboard utility only.
    Command,
    /// OSC 52 terminal escape only.
    Osc52,
}

/// Clipboard settings (`[clipboard]` section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
    /// Explicit clipboard command, e.g. `["xclip", "-selection", "clipboard"]`.
    /// Overrides PATH detection when set.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

/// Global configuration loaded from `~/.config/autolinks/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutolinksConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    /// Default directory for saved playlists (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("autolinks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AutolinksConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AutolinksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AutolinksConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
