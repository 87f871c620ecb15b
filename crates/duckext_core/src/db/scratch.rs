//! Scoped ownership of the disposable install database.
//!
//! # Invariants
//! - The session, if opened, is closed exactly once, from `Drop`.
//! - The backing file and its `.wal` sibling are removed on drop even when
//!   opening failed; removal errors are ignored.

use super::DbResult;
use crate::extension::engine::{EngineSession, ExtensionEngine};
use crate::logging::sanitize_message;
use log::{debug, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const MAX_ERROR_CHARS: usize = 240;

pub struct ScratchDatabase<S: EngineSession> {
    path: PathBuf,
    session: Option<S>,
}

impl<S: EngineSession> ScratchDatabase<S> {
    /// Claims `path` for cleanup. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            session: None,
        }
    }

    /// Opens the session through `engine` and keeps ownership of it.
    pub fn open<E>(&mut self, engine: &E) -> DbResult<&mut S>
    where
        E: ExtensionEngine<Session = S>,
    {
        let session = engine.open(&self.path)?;
        Ok(self.session.insert(session))
    }

    fn release(&mut self) {
        if let Some(session) = self.session.take() {
            match session.close() {
                Ok(()) => debug!("event=db_close module=db status=ok"),
                Err(err) => warn!(
                    "event=db_close module=db status=error error={}",
                    sanitize_message(&err.to_string(), MAX_ERROR_CHARS)
                ),
            }
        }

        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(wal_path(&self.path));
    }
}

impl<S: EngineSession> Drop for ScratchDatabase<S> {
    fn drop(&mut self) {
        self.release();
    }
}

fn wal_path(path: &Path) -> PathBuf {
    let mut wal = OsString::from(path.as_os_str());
    wal.push(".wal");
    PathBuf::from(wal)
}
