//! Extension request model and engine contracts.
//!
//! Requests are opaque names tagged with the registry they install from.
//! The engine traits are the only seam between the installer and DuckDB.

pub mod engine;
pub mod request;
