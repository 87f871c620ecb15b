//! Extension request declaration and statement rendering.

use crate::db::{DbError, DbResult};
use std::fmt::{Display, Formatter};

/// Registry an extension is installed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionSource {
    /// DuckDB's built-in default registry.
    Default,
    /// Community-maintained registry; install must name it explicitly.
    Community,
}

impl ExtensionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Community => "community",
        }
    }
}

impl Display for ExtensionSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extension to install then load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRequest {
    /// Extension name, e.g. `spatial`. Not interpreted beyond emptiness.
    pub name: String,
    pub source: ExtensionSource,
}

impl ExtensionRequest {
    pub fn new(name: impl Into<String>, source: ExtensionSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    pub fn core(name: impl Into<String>) -> Self {
        Self::new(name, ExtensionSource::Default)
    }

    pub fn community(name: impl Into<String>) -> Self {
        Self::new(name, ExtensionSource::Community)
    }
}

/// Renders the `INSTALL` statement for `name` from `source`.
///
/// # Errors
/// - Returns `DbError::InvalidIdentifier` for empty or blank names.
pub fn install_statement(name: &str, source: ExtensionSource) -> DbResult<String> {
    let ident = quote_identifier(name)?;
    Ok(match source {
        ExtensionSource::Default => format!("INSTALL {ident};"),
        ExtensionSource::Community => format!("INSTALL {ident} FROM community;"),
    })
}

/// Renders the `LOAD` statement for `name`.
///
/// # Errors
/// - Returns `DbError::InvalidIdentifier` for empty or blank names.
pub fn load_statement(name: &str) -> DbResult<String> {
    Ok(format!("LOAD {};", quote_identifier(name)?))
}

fn quote_identifier(name: &str) -> DbResult<String> {
    if name.trim().is_empty() {
        return Err(DbError::InvalidIdentifier(name.to_string()));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}
