//! Shared fixtures for upass_core tests.

use upass_ir::{Lnast, LnastManager, LnastNode, NodeKind};

use crate::{CursorToken, PassRole, UPass, UPassPlugin};

/// Root `stmts` with children `assign "x"` and `plus`.
pub(crate) fn three_node_tree() -> Lnast {
    let mut tree = Lnast::new(LnastNode::new(NodeKind::Stmts, ""));
    tree.add_child(tree.root(), NodeKind::Assign, "x");
    tree.add_child(tree.root(), NodeKind::Plus, "");
    tree
}

pub(crate) fn three_node_manager() -> LnastManager {
    LnastManager::new(three_node_tree())
}

/// Implements the two accessor methods for a pass with an `lm` field.
macro_rules! lm_accessors {
    ($lm:lifetime) => {
        fn lm(&mut self) -> &mut CursorToken<$lm> {
            &mut self.lm
        }
        fn lm_ref(&self) -> &CursorToken<$lm> {
            &self.lm
        }
    };
}

/// Records every hook invocation, in order.
pub(crate) struct Recorder<'lm> {
    lm: CursorToken<'lm>,
    pub(crate) calls: Vec<NodeKind>,
    pub(crate) finished: usize,
}

impl<'lm> Recorder<'lm> {
    pub(crate) fn new(lm: CursorToken<'lm>) -> Self {
        Recorder {
            lm,
            calls: Vec::new(),
            finished: 0,
        }
    }

    pub(crate) fn count(&self, kind: NodeKind) -> usize {
        self.calls.iter().filter(|&&call| call == kind).count()
    }
}

macro_rules! recording_hooks {
    ($( $variant:ident => $name:tt, $hook:ident: $sem:ident; )*) => {
        impl<'lm> UPass<'lm> for Recorder<'lm> {
            lm_accessors!('lm);

            $(
                fn $hook(&mut self) {
                    self.calls.push(NodeKind::$variant);
                }
            )*

            fn finish(&mut self) {
                self.finished += 1;
            }
        }
    };
}

upass_ir::for_each_node_kind!(recording_hooks);

/// Overrides nothing.
pub(crate) struct Noop<'lm> {
    lm: CursorToken<'lm>,
}

impl<'lm> UPass<'lm> for Noop<'lm> {
    lm_accessors!('lm);
}

pub(crate) struct NoopPlugin;

impl UPassPlugin for NoopPlugin {
    const NAME: &'static str = "noop";
    const ROLE: PassRole = PassRole::Node;
    const DESCRIPTION: &'static str = "does nothing";
    type Instance<'lm> = Noop<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Noop<'lm> {
        Noop { lm }
    }
}

/// Upper-cases the text of `assign` nodes and commits it.
pub(crate) struct Upper<'lm> {
    lm: CursorToken<'lm>,
}

impl<'lm> UPass<'lm> for Upper<'lm> {
    lm_accessors!('lm);

    fn process_assign(&mut self) {
        let text = self.current_text().to_uppercase();
        self.set_text(&text);
        self.write_node();
    }
}

pub(crate) struct UpperPlugin;

impl UPassPlugin for UpperPlugin {
    const NAME: &'static str = "upper";
    const ROLE: PassRole = PassRole::Node;
    type Instance<'lm> = Upper<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Upper<'lm> {
        Upper { lm }
    }
}

/// Stamps its tag into the root `stmts` text, so tests can tell which
/// factory built a pass.
pub(crate) struct Stamp<'lm> {
    lm: CursorToken<'lm>,
    tag: &'static str,
}

impl<'lm> UPass<'lm> for Stamp<'lm> {
    lm_accessors!('lm);

    fn process_stmts(&mut self) {
        self.set_text(self.tag);
        self.write_node();
    }
}

pub(crate) struct StampOne;

impl UPassPlugin for StampOne {
    const NAME: &'static str = "fold_const";
    const ROLE: PassRole = PassRole::Node;
    type Instance<'lm> = Stamp<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Stamp<'lm> {
        Stamp { lm, tag: "one" }
    }
}

pub(crate) struct StampTwo;

impl UPassPlugin for StampTwo {
    const NAME: &'static str = "fold_const";
    const ROLE: PassRole = PassRole::Struct;
    type Instance<'lm> = Stamp<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Stamp<'lm> {
        Stamp { lm, tag: "two" }
    }
}

/// Moves the cursor around inside its hooks; the driver must still visit
/// every node exactly once.
pub(crate) struct Wanderer<'lm> {
    lm: CursorToken<'lm>,
    pub(crate) visits: usize,
}

impl<'lm> Wanderer<'lm> {
    pub(crate) fn new(lm: CursorToken<'lm>) -> Self {
        Wanderer { lm, visits: 0 }
    }
}

impl<'lm> UPass<'lm> for Wanderer<'lm> {
    lm_accessors!('lm);

    fn process_assign(&mut self) {
        self.visits += 1;
        self.move_to_parent();
        self.move_to_child();
    }

    fn process_plus(&mut self) {
        self.visits += 1;
        self.move_to_sibling();
    }

    fn process_stmts(&mut self) {
        self.visits += 1;
        self.move_to_parent();
    }
}
