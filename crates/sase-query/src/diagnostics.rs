//! Diagnostic reporting for non-fatal evaluation failures
//!
//! Evaluation never returns raw errors to the automaton; failures that
//! terminate a candidate (malformed predicates, ordering over
//! non-numeric operands) are reported here instead. The sink is injected
//! into predicates at construction time so evaluation stays testable
//! without capturing global logger output.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The affected candidate match was terminated
    Error,
    /// Potential issue, evaluation continued
    Warning,
    /// Informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic emitted on an evaluation error path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Query text of the predicate that raised the diagnostic
    pub query_text: String,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(query_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            query_text: query_text.into(),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic
    pub fn warning(query_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            query_text: query_text.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.severity, self.query_text, self.message)
    }
}

/// Fire-and-forget sink for evaluation diagnostics.
///
/// Implementations must not block; `report` is called from evaluation
/// hot paths, possibly from many threads at once.
pub trait DiagnosticSink: Send + Sync {
    /// Report one diagnostic; no return value is consumed
    fn report(&self, diagnostic: &Diagnostic);
}

/// Shared handle to a diagnostic sink
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Sink forwarding to the `log` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => {
                log::error!("[{}] {}", diagnostic.query_text, diagnostic.message);
            }
            Severity::Warning => {
                log::warn!("[{}] {}", diagnostic.query_text, diagnostic.message);
            }
            Severity::Info => {
                log::info!("[{}] {}", diagnostic.query_text, diagnostic.message);
            }
        }
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Sink that collects diagnostics in memory, for tests and tooling
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics reported so far
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Remove and return all collected diagnostics
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(&Diagnostic::error("a.x > 5", "boom"));
        sink.report(&Diagnostic::warning("a.x > 5", "hmm"));

        let entries = sink.drain();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].severity, Severity::Error);
        assert_eq!(entries[0].message, "boom");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::error("a.x > 5", "non-numeric operand");
        assert_eq!(d.to_string(), "error: [a.x > 5] non-numeric operand");
    }
}
