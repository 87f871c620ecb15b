//! Human-readable console status lines.
//!
//! Write errors are ignored: a closed stdout must not abort the batch.

use crate::extension::request::{ExtensionRequest, ExtensionSource};
use crate::model::outcome::Outcome;
use std::error::Error;
use std::io::Write;

pub const START_BANNER: &str = "🦆 Installing DuckDB extensions...";
pub const COMPLETION_BANNER: &str = "🎉 DuckDB extension installation completed";
pub const SUCCESS_MARK: &str = "✓";
pub const WARNING_MARK: &str = "⚠";
pub const ERROR_MARK: &str = "❌";

pub struct StatusReporter<W: Write> {
    out: W,
}

impl<W: Write> StatusReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn started(&mut self) {
        self.line(START_BANNER);
    }

    pub fn completed(&mut self) {
        self.line(COMPLETION_BANNER);
        let _ = self.out.flush();
    }

    pub fn outcome(&mut self, request: &ExtensionRequest, outcome: &Outcome) {
        let name = request.name.as_str();
        match (outcome, request.source) {
            (Outcome::Installed, ExtensionSource::Default) => {
                self.line(&format!("{SUCCESS_MARK} {name} extension installed"));
            }
            (Outcome::Installed, ExtensionSource::Community) => {
                self.line(&format!(
                    "{SUCCESS_MARK} {name} extension installed from community"
                ));
            }
            (Outcome::Failed(reason), source) => {
                self.line(&format!("{WARNING_MARK} {name} extension failed: {reason}"));
                if source == ExtensionSource::Community {
                    self.line(&format!(
                        "  {name} will need to be loaded manually downstream"
                    ));
                }
            }
        }
    }

    /// Prints a batch-level failure with its `source()` chain.
    pub fn fatal(&mut self, err: &(dyn Error + 'static)) {
        self.line(&format!("{ERROR_MARK} Extension installation error: {err}"));
        let mut previous = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let message = cause.to_string();
            // Wrapper errors often display their inner error verbatim.
            if message != previous {
                self.line(&format!("  caused by: {message}"));
            }
            previous = message;
            source = cause.source();
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::StatusReporter;
    use crate::extension::request::ExtensionRequest;
    use crate::model::outcome::Outcome;
    use std::error::Error;
    use std::fmt::{Display, Formatter};

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl Display for Layer {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.1.as_deref().map(|inner| inner as &(dyn Error + 'static))
        }
    }

    fn render(f: impl FnOnce(&mut StatusReporter<Vec<u8>>)) -> String {
        let mut reporter = StatusReporter::new(Vec::new());
        f(&mut reporter);
        String::from_utf8(reporter.into_inner()).expect("status output is UTF-8")
    }

    #[test]
    fn core_and_community_success_lines_differ() {
        let output = render(|r| {
            r.outcome(&ExtensionRequest::core("json"), &Outcome::Installed);
            r.outcome(&ExtensionRequest::community("h3"), &Outcome::Installed);
        });
        assert_eq!(
            output,
            "✓ json extension installed\n✓ h3 extension installed from community\n"
        );
    }

    #[test]
    fn community_failure_adds_manual_load_hint() {
        let output = render(|r| {
            r.outcome(
                &ExtensionRequest::community("h3"),
                &Outcome::Failed("HTTP 404".to_string()),
            );
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "⚠ h3 extension failed: HTTP 404");
        assert!(lines[1].contains("loaded manually"));
    }

    #[test]
    fn core_failure_is_a_single_line() {
        let output = render(|r| {
            r.outcome(
                &ExtensionRequest::core("httpfs"),
                &Outcome::Failed("offline".to_string()),
            );
        });
        assert_eq!(output, "⚠ httpfs extension failed: offline\n");
    }

    #[test]
    fn fatal_prints_distinct_causes_only() {
        let err = Layer(
            "outer",
            Some(Box::new(Layer(
                "disk full",
                Some(Box::new(Layer("disk full", None))),
            ))),
        );
        let output = render(|r| r.fatal(&err));
        assert_eq!(
            output,
            "❌ Extension installation error: outer\n  caused by: disk full\n"
        );
    }
}
