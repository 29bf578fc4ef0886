//! Vendor manifest discovery.
//!
//! The finder only depends on the `VendorRegistry` trait and does not
//! know where declarations come from. `DirRegistry` probes app
//! directories for `vendor.toml`; `StaticRegistry` serves in-memory
//! declarations for hosts that register files in code.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Conventional manifest file name inside an app directory.
pub const MANIFEST_FILE: &str = "vendor.toml";

/// Key holding the declaration list inside the manifest.
pub const FILES_KEY: &str = "files";

/// Raw vendor declarations of one app: the app name plus the unvalidated
/// `files` value from its manifest.
#[derive(Debug, Clone)]
pub struct AppManifest {
    pub app: String,
    pub files: toml::Value,
}

/// Failure while reading or parsing a manifest that does exist.
///
/// Apps without a manifest (or without the `files` key) are skipped and
/// never produce an error.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Source of raw vendor declarations.
pub trait VendorRegistry {
    /// Raw manifests of every app that declares vendor files, in app order.
    fn manifests(&self) -> Result<Vec<AppManifest>, RegistryError>;
}

/// Probes a fixed list of app directories for `vendor.toml`.
#[derive(Debug, Clone)]
pub struct DirRegistry {
    apps: Vec<PathBuf>,
}

impl DirRegistry {
    pub fn new(apps: Vec<PathBuf>) -> Self {
        Self { apps }
    }
}

impl VendorRegistry for DirRegistry {
    fn manifests(&self) -> Result<Vec<AppManifest>, RegistryError> {
        let mut found = Vec::new();
        for app in &self.apps {
            let path = app.join(MANIFEST_FILE);
            if !path.exists() {
                tracing::debug!("no {} in {}", MANIFEST_FILE, app.display());
                continue;
            }
            let data = fs::read_to_string(&path).map_err(|source| RegistryError::Read {
                path: path.clone(),
                source,
            })?;
            let manifest: toml::Value =
                toml::from_str(&data).map_err(|source| RegistryError::Parse {
                    path: path.clone(),
                    source,
                })?;
            let files = match manifest.get(FILES_KEY) {
                Some(files) => files.clone(),
                None => {
                    tracing::debug!("{} has no `{}` key", path.display(), FILES_KEY);
                    continue;
                }
            };
            let name = app
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| app.display().to_string());
            found.push(AppManifest { app: name, files });
        }
        Ok(found)
    }
}

/// In-memory registry, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    manifests: Vec<AppManifest>,
}

impl StaticRegistry {
    pub fn new(manifests: Vec<AppManifest>) -> Self {
        Self { manifests }
    }
}

impl VendorRegistry for StaticRegistry {
    fn manifests(&self) -> Result<Vec<AppManifest>, RegistryError> {
        Ok(self.manifests.clone())
    }
}
