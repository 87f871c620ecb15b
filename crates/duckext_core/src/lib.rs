//! Best-effort DuckDB extension installer.
//! Installs and loads a fixed extension set into a throwaway database.

pub mod config;
pub mod db;
pub mod extension;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{InstallerConfig, COMMUNITY_EXTENSIONS, CORE_EXTENSIONS};
pub use db::{open_db, DbError, DbResult, DuckDbEngine, DuckDbSession, ScratchDatabase};
pub use extension::engine::{EngineSession, ExtensionEngine};
pub use extension::request::{ExtensionRequest, ExtensionSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::outcome::{InstallReport, Outcome};
pub use service::install_service::{
    install_extensions, BatchInstaller, InstallError, InstallResult,
};
pub use service::status::StatusReporter;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
