//! Project configuration for the CLI host (`vendo.toml`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// URL prefix used when the project does not configure one.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Host-side settings: which app directories to probe and what URL prefix
/// the static-file server exposes collected files under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// URL prefix of the static-file server.
    #[serde(default = "default_static_url")]
    pub static_url: String,
    /// App directories probed for `vendor.toml`, in order.
    #[serde(default)]
    pub apps: Vec<PathBuf>,
}

fn default_static_url() -> String {
    DEFAULT_STATIC_URL.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            static_url: default_static_url(),
            apps: Vec::new(),
        }
    }
}

impl ProjectConfig {
    /// Loads the configuration at `path`. Relative app paths resolve
    /// against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut cfg: ProjectConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let Some(dir) = path.parent() {
            cfg.apps = cfg
                .apps
                .into_iter()
                .map(|app| if app.is_absolute() { app } else { dir.join(app) })
                .collect();
        }
        Ok(cfg)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
