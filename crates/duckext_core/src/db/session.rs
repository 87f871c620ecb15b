//! DuckDB implementation of the extension engine seam.

use super::open::open_db;
use super::{DbError, DbResult};
use crate::extension::engine::{EngineSession, ExtensionEngine};
use crate::extension::request::{install_statement, load_statement, ExtensionSource};
use duckdb::Connection;
use log::debug;
use std::path::Path;

/// Engine that opens real DuckDB connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuckDbEngine;

impl ExtensionEngine for DuckDbEngine {
    type Session = DuckDbSession;

    fn open(&self, path: &Path) -> DbResult<DuckDbSession> {
        open_db(path).map(DuckDbSession::new)
    }
}

/// One open DuckDB connection.
pub struct DuckDbSession {
    conn: Connection,
}

impl DuckDbSession {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl EngineSession for DuckDbSession {
    fn install(&mut self, name: &str, source: ExtensionSource) -> DbResult<()> {
        let sql = install_statement(name, source)?;
        debug!("event=sql_exec module=db statement={sql}");
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    fn load(&mut self, name: &str) -> DbResult<()> {
        let sql = load_statement(name)?;
        debug!("event=sql_exec module=db statement={sql}");
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    fn close(self) -> DbResult<()> {
        self.conn.close().map_err(|(_conn, err)| DbError::from(err))
    }
}
