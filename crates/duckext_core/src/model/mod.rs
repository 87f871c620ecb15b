//! Core domain model types.

pub mod outcome;
