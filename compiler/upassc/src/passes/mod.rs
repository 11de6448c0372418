//! Builtin passes.
//!
//! | Name | Role | What it does |
//! |------|------|--------------|
//! | `noop` | node | nothing; the identity pass |
//! | `census` | struct | counts nodes per semantic category |
//! | `const_norm` | node | rewrites integer literal text to plain decimal |

mod census;
mod const_norm;
mod noop;

pub use census::{Census, CensusPlugin};
pub use const_norm::{normalize_int_literal, ConstNorm, ConstNormPlugin};
pub use noop::{Noop, NoopPlugin};

use upass_core::PassRegistry;
use upass_diagnostic::DiagnosticSink;

/// Register every builtin pass, in a fixed order.
pub fn register_builtins(registry: &mut PassRegistry, sink: &mut dyn DiagnosticSink) {
    registry.register_plugin::<NoopPlugin>(sink);
    registry.register_plugin::<CensusPlugin>(sink);
    registry.register_plugin::<ConstNormPlugin>(sink);
}
