//! Use-case services for core callers.

pub mod install_service;
pub mod status;
