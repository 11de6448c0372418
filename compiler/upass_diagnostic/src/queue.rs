//! Diagnostic sinks.
//!
//! Components that must report a problem without failing (duplicate pass
//! registration is the main one) take a `&mut dyn DiagnosticSink` instead of
//! returning an error. [`DiagnosticQueue`] is the standard sink: it keeps
//! every diagnostic in order and mirrors each one to `tracing`.

use crate::{Diagnostic, Severity};

/// Destination for reported diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diag: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diag: Diagnostic) {
        self.push(diag);
    }
}

/// Ordered collection of reported diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of error-severity diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take every queued diagnostic, resetting the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Error => {
                self.error_count += 1;
                tracing::warn!(code = %diag.code, "{}", diag.message);
            }
            Severity::Warning | Severity::Note => {
                tracing::debug!(code = %diag.code, "{}", diag.message);
            }
        }
        self.diagnostics.push(diag);
    }
}
