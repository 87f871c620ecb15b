//! Installer configuration.
//!
//! The binary runs with `InstallerConfig::default()` only; the builder
//! methods exist for library callers and tests.

use crate::extension::request::ExtensionRequest;
use std::path::PathBuf;

/// File name of the disposable database created under the system temp dir.
pub const SCRATCH_DB_FILE_NAME: &str = "install_extensions.duckdb";
/// Extensions installed from the default registry, in order.
pub const CORE_EXTENSIONS: &[&str] = &["spatial", "httpfs", "json", "parquet"];
/// Extensions installed from the community registry, in order.
pub const COMMUNITY_EXTENSIONS: &[&str] = &["h3"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    /// Backing file of the scratch database; deleted after every run.
    pub db_path: PathBuf,
    pub core: Vec<String>,
    pub community: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(SCRATCH_DB_FILE_NAME),
            core: CORE_EXTENSIONS.iter().map(|name| name.to_string()).collect(),
            community: COMMUNITY_EXTENSIONS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl InstallerConfig {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_core<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_community<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.community = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns all requests in processing order: core first, then community.
    pub fn requests(&self) -> Vec<ExtensionRequest> {
        self.core
            .iter()
            .map(ExtensionRequest::core)
            .chain(self.community.iter().map(ExtensionRequest::community))
            .collect()
    }
}
