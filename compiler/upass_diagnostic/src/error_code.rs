//! Error codes for pass-framework diagnostics.
//!
//! Each code is a stable identifier (e.g., `E2001`); the first digit names
//! the layer that reports it.

use std::fmt;

/// Error codes for all upass diagnostics.
///
/// Format: E#### where the first digit indicates the layer:
/// - E2xxx: Pass registry
/// - E3xxx: Pipelines and traversal
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Registry (E2xxx)
    /// Pass name already registered
    E2001,

    // Pipeline / traversal (E3xxx)
    /// Pipeline names a pass the registry does not know
    E3001,
    /// Traversal exceeded its node-visit budget
    E3002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 3] = [
        ErrorCode::E2001,
        ErrorCode::E3001,
        ErrorCode::E3002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
        }
    }

    /// One-line explanation, for `--explain`-style tooling.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "pass name is already registered",
            ErrorCode::E3001 => "unknown pass in pipeline",
            ErrorCode::E3002 => "traversal exceeded its node-visit budget",
        }
    }

    /// Parse a code string like `"E2001"`.
    pub fn parse(s: &str) -> Option<ErrorCode> {
        Self::ALL.into_iter().find(|code| code.as_str() == s)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
