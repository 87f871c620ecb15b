//! Engine seam used by the batch installer.

use crate::db::DbResult;
use crate::extension::request::ExtensionSource;
use std::path::Path;

/// Opens sessions against a file-backed database.
pub trait ExtensionEngine {
    type Session: EngineSession;

    fn open(&self, path: &Path) -> DbResult<Self::Session>;
}

/// An open database session that can install and load extensions.
pub trait EngineSession {
    fn install(&mut self, name: &str, source: ExtensionSource) -> DbResult<()>;
    fn load(&mut self, name: &str) -> DbResult<()>;
    /// Releases the session. Consuming `self` makes a second close unrepresentable.
    fn close(self) -> DbResult<()>;
}
