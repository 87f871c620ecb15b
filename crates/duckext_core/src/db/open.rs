//! Connection bootstrap utilities for DuckDB.
//!
//! # Responsibility
//! - Open file-backed DuckDB connections.
//! - Report open duration and status through `db_open` log events.
//!
//! # See also
//! - crate::logging

use super::DbResult;
use crate::logging::sanitize_message;
use duckdb::Connection;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

const MAX_ERROR_CHARS: usize = 240;

/// Opens (creating if needed) a DuckDB database file.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file path={}",
        path.display()
    );

    match Connection::open(path) {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                sanitize_message(&err.to_string(), MAX_ERROR_CHARS)
            );
            Err(err.into())
        }
    }
}
