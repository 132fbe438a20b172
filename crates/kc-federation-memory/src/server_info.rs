//! Server info page contribution.
//!
//! The delegate reads a `.properties` resource and hands its entries to the
//! host. Loading is best effort: a missing or malformed resource is logged
//! and yields an empty map, never an error the host has to handle.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::properties::{self, PropertiesError};

/// Name of the info resource.
pub const INFO_RESOURCE: &str = "info.properties";

/// The info resource generated at build time.
const BUNDLED_INFO: &str = include_str!(concat!(env!("OUT_DIR"), "/info.properties"));

/// Errors while loading the info resource.
#[derive(Debug, Error)]
pub enum ServerInfoError {
    /// The resource file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The resource is not a valid properties document.
    #[error("malformed info resource: {0}")]
    Malformed(#[from] PropertiesError),
}

/// Where the info resource comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoSource {
    /// The resource compiled into the crate.
    Bundled,
    /// A file on disk, read on every call.
    File(PathBuf),
}

/// Loads operational info from a properties resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesServerInfoDelegate {
    source: InfoSource,
}

impl Default for PropertiesServerInfoDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertiesServerInfoDelegate {
    /// Uses the resource generated at build time.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: InfoSource::Bundled,
        }
    }

    /// Uses a file on disk.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: InfoSource::File(path.as_ref().to_path_buf()),
        }
    }

    /// Returns the configured source.
    #[must_use]
    pub const fn source(&self) -> &InfoSource {
        &self.source
    }

    /// Loads the resource.
    ///
    /// ## Errors
    ///
    /// Returns [`ServerInfoError`] if the resource cannot be read or parsed.
    pub fn try_load(&self) -> Result<HashMap<String, String>, ServerInfoError> {
        match &self.source {
            InfoSource::Bundled => Ok(properties::parse(BUNDLED_INFO.as_bytes())?),
            InfoSource::File(path) => {
                let content = fs::read(path).map_err(|source| ServerInfoError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(properties::parse(content.as_slice())?)
            }
        }
    }

    /// Returns the resource entries, or an empty map if loading failed.
    #[must_use]
    pub fn properties(&self) -> HashMap<String, String> {
        match self.try_load() {
            Ok(info) => info,
            Err(error) => {
                tracing::warn!(%error, "Could not load {INFO_RESOURCE}");
                HashMap::new()
            }
        }
    }
}
