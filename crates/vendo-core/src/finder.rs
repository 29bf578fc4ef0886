//! The remote-file finder: enumerate, resolve, download, validate.
//!
//! Every operation re-scans the registry and rebuilds its entry list as a
//! local value; nothing is cached on the finder between calls.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use thiserror::Error;

use crate::checks::{self, Diagnostic};
use crate::download::DownloadError;
use crate::manifest::{self, ParseError, VendorFile};
use crate::registry::{RegistryError, VendorRegistry};

/// Failure of a finder operation.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
    #[error("app {app}: {source}")]
    Parse {
        app: String,
        #[source]
        source: ParseError,
    },
    #[error("download of {file_name} failed: {source}")]
    Download {
        file_name: String,
        #[source]
        source: DownloadError,
    },
    #[error("no vendor file declared with tag {0:?}")]
    UnknownTag(String),
}

/// Finds vendor files declared by the registry's apps and downloads them
/// on demand into the temp directory.
pub struct RemoteFileFinder<R> {
    registry: R,
    temp_dir: PathBuf,
}

impl<R: VendorRegistry> RemoteFileFinder<R> {
    /// Finder downloading into the system temp directory.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            temp_dir: env::temp_dir(),
        }
    }

    /// Overrides the download directory (collection roots, tests).
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    /// Re-scans all manifests and parses each app's declarations,
    /// preserving app order and declaration order within an app.
    pub fn app_entries(&self) -> Result<Vec<(String, Vec<VendorFile>)>, FinderError> {
        let mut apps = Vec::new();
        for m in self.registry.manifests()? {
            let parsed = manifest::parse_entries(&m.files).map_err(|source| FinderError::Parse {
                app: m.app.clone(),
                source,
            })?;
            tracing::debug!("app {} declares {} vendor files", m.app, parsed.len());
            apps.push((m.app, parsed));
        }
        Ok(apps)
    }

    /// All declared entries across all apps, in discovery order.
    pub fn entries(&self) -> Result<Vec<VendorFile>, FinderError> {
        Ok(self
            .app_entries()?
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .collect())
    }

    /// One `(file_name, entry)` pair per declared asset, in discovery
    /// order. `ignore_patterns` is accepted for interface compatibility
    /// and not applied; the host filters on its side.
    pub fn list(&self, _ignore_patterns: &[String]) -> Result<Vec<(String, VendorFile)>, FinderError> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|entry| (entry.file_name.clone(), entry))
            .collect())
    }

    /// Downloads the first entry matching `path` and returns the local
    /// path, or `None` when nothing matches. At most one download.
    pub fn find_first(&self, path: &str) -> Result<Option<PathBuf>, FinderError> {
        for entry in self.entries()? {
            if entry.matches(path) {
                return self.download(&entry).map(Some);
            }
        }
        Ok(None)
    }

    /// Downloads every entry matching `path`, duplicates included, and
    /// returns the local paths (empty when nothing matches).
    pub fn find_all(&self, path: &str) -> Result<Vec<PathBuf>, FinderError> {
        let mut found = Vec::new();
        for entry in self.entries()? {
            if entry.matches(path) {
                found.push(self.download(&entry)?);
            }
        }
        Ok(found)
    }

    /// Downloads the first entry matching `path` and opens the local copy.
    pub fn open(&self, path: &str) -> Result<Option<File>, FinderError> {
        for entry in self.entries()? {
            if entry.matches(path) {
                let file = entry.open(&self.temp_dir).map_err(|source| {
                    FinderError::Download {
                        file_name: entry.file_name.clone(),
                        source,
                    }
                })?;
                return Ok(Some(file));
            }
        }
        Ok(None)
    }

    /// First entry whose tag matches, without downloading.
    pub fn by_tag(&self, tag: &str) -> Result<Option<VendorFile>, FinderError> {
        Ok(self.entries()?.into_iter().find(|entry| entry.tag == tag))
    }

    /// Validates every manifest in discovery order.
    ///
    /// The first app with any problem short-circuits: its diagnostics are
    /// the overall result and later apps are not checked in that run. A
    /// well-formed configuration yields an empty list.
    pub fn check(&self) -> Result<Vec<Diagnostic>, FinderError> {
        for m in self.registry.manifests()? {
            let diagnostics = checks::check_manifest(&m);
            if !diagnostics.is_empty() {
                return Ok(diagnostics);
            }
        }
        Ok(Vec::new())
    }

    /// Downloads one declared entry into the finder's temp directory.
    pub fn download(&self, entry: &VendorFile) -> Result<PathBuf, FinderError> {
        tracing::info!("downloading {} from {}", entry.file_name, entry.url);
        entry
            .download_to(&self.temp_dir)
            .map_err(|source| FinderError::Download {
                file_name: entry.file_name.clone(),
                source,
            })
    }
}
