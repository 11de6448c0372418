//! upass core - the micro-pass framework
//!
//! Passes ("upasses") walk and rewrite an LNAST tree through the single
//! cursor of a tree manager. This crate provides:
//!
//! - [`UPass`]: the dispatch base, one no-op hook per [`NodeKind`] plus
//!   cursor utilities that act on "the node under the cursor"
//! - [`dispatch`]: routes the current node to its hook
//! - [`CursorToken`]: the exclusive, lifetime-bound cursor capability a pass
//!   is built from
//! - [`UPassPlugin`] / [`get_upass`]: the factory adapter that turns a pass
//!   type into a uniform setup function
//! - [`PassRegistry`]: name-keyed registry of setup functions
//! - [`traverse`] and [`Pipeline`]: a pre-order driver and name-based
//!   pipelines on top of it
//!
//! # Writing a pass
//!
//! ```
//! use upass_core::{CursorToken, PassRole, UPass, UPassPlugin};
//!
//! pub struct CountPlus<'lm> {
//!     lm: CursorToken<'lm>,
//!     seen: usize,
//! }
//!
//! impl<'lm> UPass<'lm> for CountPlus<'lm> {
//!     fn lm(&mut self) -> &mut CursorToken<'lm> {
//!         &mut self.lm
//!     }
//!     fn lm_ref(&self) -> &CursorToken<'lm> {
//!         &self.lm
//!     }
//!     fn process_plus(&mut self) {
//!         self.seen += 1;
//!     }
//! }
//!
//! pub struct CountPlusPlugin;
//!
//! impl UPassPlugin for CountPlusPlugin {
//!     const NAME: &'static str = "count_plus";
//!     const ROLE: PassRole = PassRole::Node;
//!     type Instance<'lm> = CountPlus<'lm>;
//!
//!     fn setup<'lm>(lm: CursorToken<'lm>) -> CountPlus<'lm> {
//!         CountPlus { lm, seen: 0 }
//!     }
//! }
//! ```

mod driver;
mod pipeline;
mod plugin;
mod registry;
mod token;

use std::fmt;

use tracing::trace;
pub use upass_ir::{NodeId, NodeKind, SemanticKind, TreeCursor};

pub use driver::{traverse, DriverConfig, TraversalError, TraversalStats};
pub use pipeline::{PassRun, Pipeline, PipelineError};
pub use plugin::{get_upass, SetupFn, UPassPlugin};
pub use registry::{PassEntry, PassRegistry};
pub use token::CursorToken;

/// Granularity a pass works at.
///
/// Carried on every registry entry so tooling can group passes; it adds
/// nothing to the hook contract.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PassRole {
    /// Individual expression-level nodes (operators, assignments, calls).
    Node,
    /// Aggregate nodes (statement lists, function bodies, the top node).
    Struct,
}

impl PassRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            PassRole::Node => "node",
            PassRole::Struct => "struct",
        }
    }
}

impl fmt::Display for PassRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! declare_upass {
    ($( $variant:ident => $name:tt, $hook:ident: $sem:ident; )*) => {
        /// The dispatch base every pass implements.
        ///
        /// Hooks take no node argument: they act on the node currently under
        /// the cursor, through the utility methods below. Every hook is a
        /// no-op by default, so a pass overrides only the kinds it cares
        /// about.
        ///
        /// Hooks assume the cursor is valid. A hook may move the cursor;
        /// [`traverse`] puts it back on the visited node afterwards.
        pub trait UPass<'lm> {
            /// The pass's cursor token.
            fn lm(&mut self) -> &mut CursorToken<'lm>;

            fn lm_ref(&self) -> &CursorToken<'lm>;

            $(
                #[doc = concat!("Called on `", stringify!($name), "` nodes.")]
                fn $hook(&mut self) {}
            )*

            /// Called once after a complete traversal.
            fn finish(&mut self) {}

            fn move_to_nid(&mut self, nid: NodeId) {
                self.lm().move_to_nid(nid);
            }

            fn move_to_child(&mut self) -> bool {
                self.lm().move_to_child()
            }

            fn move_to_sibling(&mut self) -> bool {
                self.lm().move_to_sibling()
            }

            fn move_to_parent(&mut self) {
                self.lm().move_to_parent();
            }

            fn current_nid(&self) -> NodeId {
                self.lm_ref().current_nid()
            }

            fn current_text<'a>(&'a self) -> &'a str
            where
                'lm: 'a,
            {
                self.lm_ref().current_text()
            }

            fn get_ntype(&self) -> SemanticKind {
                self.lm_ref().get_ntype()
            }

            fn get_raw_ntype(&self) -> NodeKind {
                self.lm_ref().get_raw_ntype()
            }

            fn is_invalid(&self) -> bool {
                self.lm_ref().is_invalid()
            }

            fn is_last_child(&self) -> bool {
                self.lm_ref().is_last_child()
            }

            /// Stage new text for the current node; see [`UPass::write_node`].
            fn set_text(&mut self, text: &str) {
                self.lm().set_text(text);
            }

            /// Commit the current node's staged content to the tree.
            fn write_node(&mut self) {
                self.lm().write_node();
            }

            /// Returns `true` if the current raw kind is one of `kinds`.
            ///
            /// An empty list never matches (and does not read the cursor).
            fn is_type(&self, kinds: &[NodeKind]) -> bool {
                !kinds.is_empty() && kinds.contains(&self.get_raw_ntype())
            }
        }

        /// Invoke the hook matching the raw kind of the current node.
        ///
        /// Kinds this version does not know fall through to the default arm
        /// and are ignored.
        pub fn dispatch<'lm, P: UPass<'lm> + ?Sized>(pass: &mut P) {
            let kind = pass.get_raw_ntype();
            trace!(nid = ?pass.current_nid(), hook = kind.hook_name(), "dispatch");
            match kind {
                $( NodeKind::$variant => pass.$hook(), )*
                _ => {}
            }
        }
    };
}

upass_ir::for_each_node_kind!(declare_upass);

#[cfg(test)]
mod test_helpers;
