//! Per-extension outcomes and the run summary.
//!
//! # Invariants
//! - Outcomes are kept in processing order.
//! - A report with a batch-level error carries no outcomes recorded after it.

use crate::extension::request::ExtensionRequest;

/// Result of one install-then-load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Failed(String),
}

impl Outcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

/// In-memory summary of one run. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub outcomes: Vec<(ExtensionRequest, Outcome)>,
    /// Batch-level failure message, when the run could not proceed.
    pub fatal: Option<String>,
}

impl InstallReport {
    pub fn record(&mut self, request: ExtensionRequest, outcome: Outcome) {
        self.outcomes.push((request, outcome));
    }

    pub fn installed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_installed())
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.installed_count()
    }

    pub fn failed_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_installed())
            .map(|(request, _)| request.name.as_str())
            .collect()
    }

    /// True when the run reached every request and all of them installed.
    pub fn is_complete_success(&self) -> bool {
        self.fatal.is_none() && self.failed_count() == 0
    }
}
