//! upassc - the upass session
//!
//! [`Session`] is the composition root: it owns the pass registry and the
//! diagnostics reported while filling and using it. Builtin passes are
//! registered by an explicit list in [`passes::register_builtins`], so the
//! registry contents never depend on link or initialization order.
//!
//! ```
//! use upass_core::DriverConfig;
//! use upass_ir::{Lnast, LnastManager, NodeKind};
//! use upassc::Session;
//!
//! let mut tree = Lnast::with_top("");
//! let stmts = tree.add_child(tree.root(), NodeKind::Stmts, "");
//! tree.add_child(stmts, NodeKind::Assign, "0x1_0");
//! let mut manager = LnastManager::new(tree);
//!
//! let mut session = Session::new();
//! let runs = session
//!     .run_pipeline(&["const_norm", "census"], &mut manager, &DriverConfig::default())
//!     .unwrap();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(manager.tree().dump(), "top\n  stmts\n    assign \"16\"\n");
//! ```

pub mod passes;

use std::sync::Once;

use tracing::debug;
use upass_core::{
    DriverConfig, PassRegistry, PassRole, PassRun, Pipeline, PipelineError, SetupFn,
    TraversalError, TreeCursor, UPassPlugin,
};
use upass_diagnostic::{
    budget_exceeded, unknown_pass, Diagnostic, DiagnosticQueue, DiagnosticSink,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=upass_core=debug` or
/// `RUST_LOG=upass_core=trace` (per-hook dispatch).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Owns the pass registry and the diagnostics reported against it.
#[derive(Debug)]
pub struct Session {
    registry: PassRegistry,
    diagnostics: DiagnosticQueue,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with every builtin pass registered.
    pub fn new() -> Self {
        let mut session = Self::empty();
        passes::register_builtins(&mut session.registry, &mut session.diagnostics);
        debug!(passes = session.registry.len(), "session ready");
        session
    }

    /// A session with an empty registry.
    pub fn empty() -> Self {
        Session {
            registry: PassRegistry::new(),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    /// Register a plugin; a name clash is queued as `E2001`.
    pub fn register_plugin<P: UPassPlugin>(&mut self) {
        self.registry.register_plugin::<P>(&mut self.diagnostics);
    }

    pub fn register(&mut self, name: &str, role: PassRole, setup: SetupFn) {
        self.registry.register(name, role, setup, &mut self.diagnostics);
    }

    pub fn registry(&self) -> &PassRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    /// Take every queued diagnostic.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    /// One line per registered pass: `name (role): description`.
    pub fn pass_summary(&self) -> Vec<String> {
        self.registry
            .iter()
            .map(|(name, entry)| {
                if entry.description.is_empty() {
                    format!("{name} ({})", entry.role)
                } else {
                    format!("{name} ({}): {}", entry.role, entry.description)
                }
            })
            .collect()
    }

    /// Run the named passes over `cursor`'s tree, in order.
    ///
    /// A failure is also queued as a diagnostic (`E3001` for an unknown
    /// name, `E3002` for an exhausted visit budget).
    pub fn run_pipeline(
        &mut self,
        names: &[&str],
        cursor: &mut dyn TreeCursor,
        config: &DriverConfig,
    ) -> Result<Vec<PassRun>, PipelineError> {
        let result = Pipeline::new()
            .add_all(names)
            .run(&self.registry, cursor, config);

        if let Err(err) = &result {
            let diag = match err {
                PipelineError::UnknownPass(name) => unknown_pass(name),
                PipelineError::Traversal {
                    pass,
                    source: TraversalError::BudgetExceeded { budget },
                } => budget_exceeded(pass, *budget),
            };
            self.diagnostics.emit(diag);
        }

        result
    }

    /// [`Session::run_pipeline`] with the driver settings read from the
    /// environment (`UPASS_VISIT_BUDGET`).
    pub fn run_pipeline_from_env(
        &mut self,
        names: &[&str],
        cursor: &mut dyn TreeCursor,
    ) -> Result<Vec<PassRun>, PipelineError> {
        let config = DriverConfig::from_env();
        debug!(budget = ?config.visit_budget, "driver config from environment");
        self.run_pipeline(names, cursor, &config)
    }
}
