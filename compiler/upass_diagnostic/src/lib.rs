//! Diagnostic system for the upass pass framework.
//!
//! - Error codes for searchability ([`ErrorCode`])
//! - Structured diagnostics ([`Diagnostic`])
//! - A reporting facility that never aborts ([`DiagnosticSink`],
//!   [`DiagnosticQueue`])
//!
//! Registration conflicts and pipeline failures are reported here rather
//! than unwinding: the caller decides whether an error count is fatal.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{budget_exceeded, duplicate_pass, unknown_pass, Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticQueue, DiagnosticSink};
