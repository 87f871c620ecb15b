//! Best-effort batch extension installer.
//!
//! # Responsibility
//! - Install then load every configured extension, core list first.
//! - Isolate per-extension failures, panics included, so later extensions
//!   are still attempted.
//! - Turn batch-level failures (open errors, panics outside an item) into a
//!   status message.
//!
//! # Invariants
//! - `run` never panics or returns an error to its caller.
//! - The scratch database is released by `ScratchDatabase::drop` on every
//!   path out of the batch, unwinding included.
//! - The start and completion lines are always printed.

use crate::config::InstallerConfig;
use crate::db::{DbError, DuckDbEngine, ScratchDatabase};
use crate::extension::engine::{EngineSession, ExtensionEngine};
use crate::extension::request::ExtensionRequest;
use crate::logging::{panic_message, sanitize_message};
use crate::model::outcome::{InstallReport, Outcome};
use crate::service::status::StatusReporter;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::Instant;

const MAX_ERROR_CHARS: usize = 240;

pub type InstallResult<T> = Result<T, InstallError>;

/// Batch-level failures. Per-extension failures are `Outcome::Failed` instead.
#[derive(Debug)]
pub enum InstallError {
    Open { path: PathBuf, source: DbError },
    Panicked(String),
}

impl Display for InstallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, .. } => write!(
                f,
                "failed to open scratch database `{}`",
                path.display()
            ),
            Self::Panicked(message) => write!(f, "installer panicked: {message}"),
        }
    }
}

impl Error for InstallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Panicked(_) => None,
        }
    }
}

pub struct BatchInstaller<E: ExtensionEngine> {
    engine: E,
    config: InstallerConfig,
}

impl<E: ExtensionEngine> BatchInstaller<E> {
    pub fn new(engine: E, config: InstallerConfig) -> Self {
        Self { engine, config }
    }

    /// Runs the whole batch, writing status lines to `out`.
    ///
    /// # Contract
    /// - Returns normally on every path; failures live in the report.
    /// - The scratch database file does not exist when this returns.
    pub fn run<W: Write>(&self, out: W) -> InstallReport {
        let started_at = Instant::now();
        info!(
            "event=install_batch module=service status=start core={} community={} db_path={}",
            self.config.core.len(),
            self.config.community.len(),
            self.config.db_path.display()
        );

        let mut reporter = StatusReporter::new(out);
        reporter.started();
        let mut report = InstallReport::default();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.install_all(&mut reporter, &mut report)
        }));
        let failure = match result {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(err),
            Err(payload) => Some(InstallError::Panicked(panic_message(payload.as_ref()))),
        };

        if let Some(err) = failure {
            error!(
                "event=install_batch module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                sanitize_message(&err.to_string(), MAX_ERROR_CHARS)
            );
            reporter.fatal(&err);
            report.fatal = Some(err.to_string());
        }

        reporter.completed();
        info!(
            "event=install_batch module=service status={} installed={} failed={} duration_ms={}",
            batch_status(&report),
            report.installed_count(),
            report.failed_count(),
            started_at.elapsed().as_millis()
        );
        report
    }

    fn install_all<W: Write>(
        &self,
        reporter: &mut StatusReporter<W>,
        report: &mut InstallReport,
    ) -> InstallResult<()> {
        let mut scratch = ScratchDatabase::<E::Session>::new(self.config.db_path.clone());
        let session = scratch
            .open(&self.engine)
            .map_err(|source| InstallError::Open {
                path: self.config.db_path.clone(),
                source,
            })?;

        for request in self.config.requests() {
            let outcome = install_one(session, &request);
            reporter.outcome(&request, &outcome);
            report.record(request, outcome);
        }

        Ok(())
    }
}

/// Installs the default extension set into a scratch DuckDB database.
pub fn install_extensions<W: Write>(out: W) -> InstallReport {
    BatchInstaller::new(DuckDbEngine, InstallerConfig::default()).run(out)
}

fn install_one<S: EngineSession>(session: &mut S, request: &ExtensionRequest) -> Outcome {
    let started_at = Instant::now();
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        session
            .install(&request.name, request.source)
            .and_then(|()| session.load(&request.name))
            .map_err(|err| err.to_string())
    }))
    .unwrap_or_else(|payload| Err(format!("panicked: {}", panic_message(payload.as_ref()))));

    match attempt {
        Ok(()) => {
            info!(
                "event=extension_install module=service status=ok extension={} source={} duration_ms={}",
                request.name,
                request.source,
                started_at.elapsed().as_millis()
            );
            Outcome::Installed
        }
        Err(err) => {
            warn!(
                "event=extension_install module=service status=error extension={} source={} duration_ms={} error={}",
                request.name,
                request.source,
                started_at.elapsed().as_millis(),
                sanitize_message(&err, MAX_ERROR_CHARS)
            );
            Outcome::Failed(err)
        }
    }
}

fn batch_status(report: &InstallReport) -> &'static str {
    if report.fatal.is_some() {
        "error"
    } else if report.failed_count() > 0 {
        "partial"
    } else {
        "ok"
    }
}
