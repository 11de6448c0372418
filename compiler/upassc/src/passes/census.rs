//! Node census.
//!
//! Counts every visited node by [`SemanticKind`], plus statement lists. The
//! totals are reported through `tracing` when the traversal finishes.

use rustc_hash::FxHashMap;
use tracing::info;
use upass_core::{CursorToken, NodeKind, PassRole, SemanticKind, UPass, UPassPlugin};

pub struct Census<'lm> {
    lm: CursorToken<'lm>,
    counts: FxHashMap<SemanticKind, usize>,
    statement_lists: usize,
    total: usize,
}

impl Census<'_> {
    /// Nodes seen in `kind`.
    pub fn count(&self, kind: SemanticKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// `stmts` nodes seen.
    pub fn statement_lists(&self) -> usize {
        self.statement_lists
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn record(&mut self, kind: NodeKind) {
        *self.counts.entry(kind.semantic()).or_insert(0) += 1;
        self.total += 1;
        if kind == NodeKind::Stmts {
            self.statement_lists += 1;
        }
    }
}

macro_rules! census_hooks {
    ($( $variant:ident => $name:tt, $hook:ident: $sem:ident; )*) => {
        impl<'lm> UPass<'lm> for Census<'lm> {
            fn lm(&mut self) -> &mut CursorToken<'lm> {
                &mut self.lm
            }

            fn lm_ref(&self) -> &CursorToken<'lm> {
                &self.lm
            }

            $(
                fn $hook(&mut self) {
                    self.record(NodeKind::$variant);
                }
            )*

            fn finish(&mut self) {
                for kind in SemanticKind::ALL {
                    let count = self.count(kind);
                    if count > 0 {
                        info!(category = %kind, count, "census");
                    }
                }
                info!(
                    total = self.total,
                    statement_lists = self.statement_lists,
                    "census complete"
                );
            }
        }
    };
}

upass_ir::for_each_node_kind!(census_hooks);

pub struct CensusPlugin;

impl UPassPlugin for CensusPlugin {
    const NAME: &'static str = "census";
    const ROLE: PassRole = PassRole::Struct;
    const DESCRIPTION: &'static str = "counts nodes per semantic category";
    type Instance<'lm> = Census<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Census<'lm> {
        Census {
            lm,
            counts: FxHashMap::default(),
            statement_lists: 0,
            total: 0,
        }
    }
}
