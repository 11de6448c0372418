#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end behavior of the session, registry, and driver.
//!
//! The "pass outlives its manager" case is a `compile_fail` doctest on
//! `upass_core::CursorToken`; it cannot be expressed as a runtime test.

use pretty_assertions::assert_eq;
use upass_core::{
    traverse, CursorToken, DriverConfig, NodeKind, PassRole, UPass, UPassPlugin,
};
use upass_diagnostic::ErrorCode;
use upass_ir::{Lnast, LnastManager, LnastNode};
use upassc::Session;

fn three_node_tree() -> Lnast {
    let mut tree = Lnast::new(LnastNode::new(NodeKind::Stmts, ""));
    tree.add_child(tree.root(), NodeKind::Assign, "x");
    tree.add_child(tree.root(), NodeKind::Plus, "");
    tree
}

/// Writes `tag` into the root `stmts` text.
struct Tagger<'lm> {
    lm: CursorToken<'lm>,
    tag: &'static str,
}

impl<'lm> UPass<'lm> for Tagger<'lm> {
    fn lm(&mut self) -> &mut CursorToken<'lm> {
        &mut self.lm
    }
    fn lm_ref(&self) -> &CursorToken<'lm> {
        &self.lm
    }
    fn process_stmts(&mut self) {
        self.set_text(self.tag);
        self.write_node();
    }
}

struct FoldConstA;

impl UPassPlugin for FoldConstA {
    const NAME: &'static str = "fold_const";
    const ROLE: PassRole = PassRole::Node;
    type Instance<'lm> = Tagger<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Tagger<'lm> {
        Tagger { lm, tag: "first" }
    }
}

struct FoldConstB;

impl UPassPlugin for FoldConstB {
    const NAME: &'static str = "fold_const";
    const ROLE: PassRole = PassRole::Node;
    type Instance<'lm> = Tagger<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Tagger<'lm> {
        Tagger { lm, tag: "second" }
    }
}

#[test]
fn test_duplicate_name_keeps_first_factory() {
    let mut session = Session::empty();
    session.register_plugin::<FoldConstA>();
    session.register_plugin::<FoldConstB>();

    let entries: Vec<&str> = session
        .registry()
        .get_registry()
        .keys()
        .map(String::as_str)
        .filter(|name| *name == "fold_const")
        .collect();
    assert_eq!(entries, vec!["fold_const"]);

    assert_eq!(session.diagnostics().error_count(), 1);
    assert_eq!(session.diagnostics().diagnostics()[0].code, ErrorCode::E2001);

    let mut manager = LnastManager::new(three_node_tree());
    session
        .run_pipeline(&["fold_const"], &mut manager, &DriverConfig::default())
        .unwrap();
    let tree = manager.tree();
    assert_eq!(tree.node(tree.root()).unwrap().text, "first");
}

/// Counts `assign` and `plus` only.
struct Counter<'lm> {
    lm: CursorToken<'lm>,
    assign: usize,
    plus: usize,
    stmts: usize,
}

impl<'lm> UPass<'lm> for Counter<'lm> {
    fn lm(&mut self) -> &mut CursorToken<'lm> {
        &mut self.lm
    }
    fn lm_ref(&self) -> &CursorToken<'lm> {
        &self.lm
    }
    fn process_assign(&mut self) {
        self.assign += 1;
    }
    fn process_plus(&mut self) {
        self.plus += 1;
    }
}

#[test]
fn test_counting_pass_over_three_nodes() {
    let mut manager = LnastManager::new(three_node_tree());
    let mut counter = Counter {
        lm: CursorToken::new(&mut manager),
        assign: 0,
        plus: 0,
        stmts: 0,
    };
    traverse(&mut counter, &DriverConfig::default()).unwrap();
    assert_eq!(
        (counter.assign, counter.plus, counter.stmts),
        (1, 1, 0)
    );
}

#[test]
fn test_noop_keeps_serialized_tree_identical() {
    let before = three_node_tree().dump();
    let mut manager = LnastManager::new(three_node_tree());
    let mut session = Session::new();
    session
        .run_pipeline(&["noop"], &mut manager, &DriverConfig::default())
        .unwrap();
    assert_eq!(manager.tree().dump(), before);
}

/// Overrides `eq` and checks membership in {eq, ne, lt} on every node.
struct EqWatcher<'lm> {
    lm: CursorToken<'lm>,
    eq_hook_calls: usize,
    membership: Vec<(NodeKind, bool)>,
}

impl<'lm> UPass<'lm> for EqWatcher<'lm> {
    fn lm(&mut self) -> &mut CursorToken<'lm> {
        &mut self.lm
    }
    fn lm_ref(&self) -> &CursorToken<'lm> {
        &self.lm
    }
    fn process_eq(&mut self) {
        self.eq_hook_calls += 1;
    }
    fn process_gt(&mut self) {
        let matched = self.is_type(&[NodeKind::Eq, NodeKind::Ne, NodeKind::Lt]);
        self.membership.push((NodeKind::Gt, matched));
    }
}

#[test]
fn test_membership_predicate_on_gt_node() {
    let mut tree = Lnast::with_top("");
    tree.add_child(tree.root(), NodeKind::Gt, "");
    let mut manager = LnastManager::new(tree);
    let mut watcher = EqWatcher {
        lm: CursorToken::new(&mut manager),
        eq_hook_calls: 0,
        membership: Vec::new(),
    };
    traverse(&mut watcher, &DriverConfig::default()).unwrap();

    assert_eq!(watcher.membership, vec![(NodeKind::Gt, false)]);
    assert_eq!(watcher.eq_hook_calls, 0);
}

#[test]
fn test_pipeline_of_builtins() {
    let mut tree = Lnast::with_top("");
    let stmts = tree.add_child(tree.root(), NodeKind::Stmts, "");
    let assign = tree.add_child(stmts, NodeKind::Assign, "0xff");
    tree.add_child(assign, NodeKind::Eq, "0b0");
    let mut manager = LnastManager::new(tree);

    let mut session = Session::new();
    let runs = session
        .run_pipeline(
            &["const_norm", "census", "noop"],
            &mut manager,
            &DriverConfig::default(),
        )
        .unwrap();

    assert_eq!(runs.len(), 3);
    assert!(runs.iter().all(|run| run.stats.visited == 4));
    assert_eq!(
        manager.tree().dump(),
        "top\n  stmts\n    assign \"255\"\n      eq \"0\"\n"
    );
    assert!(session.diagnostics().is_empty());
}
