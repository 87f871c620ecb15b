//! `duckext` entry point.
//!
//! # Responsibility
//! - Install the default DuckDB extension set with no arguments.
//! - Always exit successfully; failures are reported as status lines only.

use log::info;

fn main() {
    if let Err(err) = duckext_core::init_logging(duckext_core::default_log_level()) {
        eprintln!("logging disabled: {err}");
    }

    let stdout = std::io::stdout();
    let report = duckext_core::install_extensions(stdout.lock());
    info!(
        "event=app_exit module=cli status=ok installed={} failed={} fatal={} version={}",
        report.installed_count(),
        report.failed_count(),
        report.fatal.is_some(),
        duckext_core::core_version()
    );
}
