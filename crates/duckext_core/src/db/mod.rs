//! DuckDB session bootstrap for the extension installer.
//!
//! # Responsibility
//! - Open file-backed DuckDB connections used as disposable install targets.
//! - Adapt a DuckDB connection to the installer's engine seam.
//! - Guarantee the scratch database is closed and deleted after a run.
//!
//! # Invariants
//! - A session is closed at most once; `close` consumes it.
//! - Extension names reach SQL only as quoted identifiers.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod scratch;
mod session;

pub use open::open_db;
pub use scratch::ScratchDatabase;
pub use session::{DuckDbEngine, DuckDbSession};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    DuckDb(duckdb::Error),
    InvalidIdentifier(String),
    /// Failure reported by a non-DuckDB engine implementation.
    Engine(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuckDb(err) => write!(f, "{err}"),
            Self::InvalidIdentifier(value) => {
                write!(f, "extension identifier is invalid: `{value}`")
            }
            Self::Engine(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuckDb(err) => Some(err),
            Self::InvalidIdentifier(_) => None,
            Self::Engine(_) => None,
        }
    }
}

impl From<duckdb::Error> for DbError {
    fn from(value: duckdb::Error) -> Self {
        Self::DuckDb(value)
    }
}
