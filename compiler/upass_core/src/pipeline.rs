//! Name-based pass pipelines.
//!
//! A [`Pipeline`] is an ordered list of registry names. Running it resolves
//! every name up front, then builds and traverses each pass in turn. Each
//! pass holds the manager's cursor only for its own traversal.
//!
//! # Example
//! ```
//! # use upass_core::{CursorToken, DriverConfig, PassRegistry, PassRole, Pipeline, UPass, UPassPlugin};
//! # use upass_diagnostic::Diagnostic;
//! # use upass_ir::{Lnast, LnastManager, NodeKind};
//! # struct Shout<'lm> { lm: CursorToken<'lm> }
//! # impl<'lm> UPass<'lm> for Shout<'lm> {
//! #     fn lm(&mut self) -> &mut CursorToken<'lm> { &mut self.lm }
//! #     fn lm_ref(&self) -> &CursorToken<'lm> { &self.lm }
//! #     fn process_assign(&mut self) {
//! #         let text = self.current_text().to_uppercase();
//! #         self.set_text(&text);
//! #         self.write_node();
//! #     }
//! # }
//! # struct ShoutPlugin;
//! # impl UPassPlugin for ShoutPlugin {
//! #     const NAME: &'static str = "shout";
//! #     const ROLE: PassRole = PassRole::Node;
//! #     type Instance<'lm> = Shout<'lm>;
//! #     fn setup<'lm>(lm: CursorToken<'lm>) -> Shout<'lm> { Shout { lm } }
//! # }
//! # fn main() -> Result<(), upass_core::PipelineError> {
//! let mut registry = PassRegistry::new();
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! registry.register_plugin::<ShoutPlugin>(&mut diagnostics);
//!
//! let mut tree = Lnast::with_top("");
//! tree.add_child(tree.root(), NodeKind::Assign, "x");
//! let mut manager = LnastManager::new(tree);
//!
//! let runs = Pipeline::new()
//!     .add("shout")
//!     .add("shout")
//!     .run(&registry, &mut manager, &DriverConfig::default())?;
//!
//! assert_eq!(runs.len(), 2);
//! assert_eq!(manager.tree().dump(), "top\n  assign \"X\"\n");
//! # Ok(())
//! # }
//! ```

use thiserror::Error;
use tracing::debug_span;
use upass_ir::TreeCursor;

use crate::{
    traverse, CursorToken, DriverConfig, PassRegistry, SetupFn, TraversalError, TraversalStats,
};

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PipelineError {
    #[error("unknown upass `{0}`")]
    UnknownPass(String),
    #[error("upass `{pass}` failed: {source}")]
    Traversal {
        pass: String,
        #[source]
        source: TraversalError,
    },
}

/// Result of one pass in a pipeline run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PassRun {
    pub name: String,
    pub stats: TraversalStats,
}

/// Ordered list of pass names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pipeline {
    passes: Vec<String>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass by name.
    #[must_use]
    pub fn add(mut self, name: &str) -> Self {
        self.passes.push(name.to_owned());
        self
    }

    #[must_use]
    pub fn add_all(mut self, names: &[&str]) -> Self {
        self.passes.extend(names.iter().map(|name| (*name).to_owned()));
        self
    }

    pub fn names(&self) -> &[String] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Look up every name; fails on the first unknown one.
    pub fn resolve<'a>(
        &'a self,
        registry: &PassRegistry,
    ) -> Result<Vec<(&'a str, SetupFn)>, PipelineError> {
        self.passes
            .iter()
            .map(|name| {
                registry
                    .setup(name)
                    .map(|setup| (name.as_str(), setup))
                    .ok_or_else(|| PipelineError::UnknownPass(name.clone()))
            })
            .collect()
    }

    /// Run every pass over `cursor`'s tree, in order.
    ///
    /// Nothing runs if a name is unknown. A traversal error stops the
    /// pipeline; edits committed by earlier passes stay in the tree.
    pub fn run(
        &self,
        registry: &PassRegistry,
        cursor: &mut dyn TreeCursor,
        config: &DriverConfig,
    ) -> Result<Vec<PassRun>, PipelineError> {
        let resolved = self.resolve(registry)?;
        let mut runs = Vec::with_capacity(resolved.len());

        for (name, setup) in resolved {
            let _span = debug_span!("upass", name).entered();
            let mut pass = setup(CursorToken::new(&mut *cursor));
            let stats =
                traverse(pass.as_mut(), config).map_err(|source| PipelineError::Traversal {
                    pass: name.to_owned(),
                    source,
                })?;
            runs.push(PassRun {
                name: name.to_owned(),
                stats,
            });
        }

        Ok(runs)
    }
}

#[cfg(test)]
mod tests;
