//! Reference tree manager.
//!
//! [`LnastManager`] owns an [`Lnast`] and implements [`TreeCursor`] over it.
//! The node under the cursor is loaded into a staged copy on every move;
//! `set_text`/`set_ntype` edit the copy and `write_node` commits it. Moving
//! away without committing drops the edits.

use tracing::trace;

use crate::{Lnast, LnastNode, NodeId, NodeKind, TreeCursor};

/// Owner of one LNAST tree and its single cursor.
#[derive(Clone, Debug)]
pub struct LnastManager {
    tree: Lnast,
    pos: NodeId,
    /// Staged copy of the node at `pos`; `None` iff the cursor is invalid.
    staged: Option<LnastNode>,
}

impl LnastManager {
    /// Take ownership of `tree`, with the cursor on its root.
    pub fn new(tree: Lnast) -> Self {
        let mut manager = LnastManager {
            tree,
            pos: NodeId::INVALID,
            staged: None,
        };
        manager.load(NodeId::ROOT);
        manager
    }

    /// The committed tree. Staged, uncommitted edits are not visible here.
    pub fn tree(&self) -> &Lnast {
        &self.tree
    }

    pub fn into_tree(self) -> Lnast {
        self.tree
    }

    /// Returns `true` if the staged copy differs from the committed node.
    pub fn has_pending_write(&self) -> bool {
        match &self.staged {
            Some(staged) => self.tree.node(self.pos) != Some(staged),
            None => false,
        }
    }

    fn load(&mut self, nid: NodeId) {
        self.staged = self.tree.node(nid).cloned();
        self.pos = if self.staged.is_some() {
            nid
        } else {
            trace!(?nid, "cursor moved off tree");
            NodeId::INVALID
        };
    }

    #[track_caller]
    fn staged(&self, op: &str) -> &LnastNode {
        match &self.staged {
            Some(node) => node,
            None => panic!("LnastManager::{op} called on an invalid cursor"),
        }
    }

    #[track_caller]
    fn staged_mut(&mut self, op: &str) -> &mut LnastNode {
        match &mut self.staged {
            Some(node) => node,
            None => panic!("LnastManager::{op} called on an invalid cursor"),
        }
    }
}

impl TreeCursor for LnastManager {
    fn move_to_nid(&mut self, nid: NodeId) {
        self.load(nid);
    }

    fn move_to_root(&mut self) {
        self.load(NodeId::ROOT);
    }

    fn move_to_child(&mut self) -> bool {
        let child = self.tree.first_child(self.pos).unwrap_or(NodeId::INVALID);
        self.load(child);
        !self.is_invalid()
    }

    fn move_to_sibling(&mut self) -> bool {
        let sibling = self.tree.next_sibling(self.pos).unwrap_or(NodeId::INVALID);
        self.load(sibling);
        !self.is_invalid()
    }

    fn move_to_parent(&mut self) {
        let parent = self.tree.parent(self.pos).unwrap_or(NodeId::INVALID);
        self.load(parent);
    }

    fn current_nid(&self) -> NodeId {
        self.pos
    }

    #[track_caller]
    fn get_raw_ntype(&self) -> NodeKind {
        self.staged("get_raw_ntype").kind
    }

    #[track_caller]
    fn current_text(&self) -> &str {
        &self.staged("current_text").text
    }

    fn is_invalid(&self) -> bool {
        self.staged.is_none()
    }

    fn is_last_child(&self) -> bool {
        self.tree.is_last_child(self.pos)
    }

    #[track_caller]
    fn set_text(&mut self, text: &str) {
        let node = self.staged_mut("set_text");
        node.text.clear();
        node.text.push_str(text);
    }

    #[track_caller]
    fn set_ntype(&mut self, kind: NodeKind) {
        self.staged_mut("set_ntype").kind = kind;
    }

    #[track_caller]
    fn write_node(&mut self) {
        let node = self.staged("write_node").clone();
        trace!(nid = ?self.pos, kind = %node.kind, text = %node.text, "write_node");
        let written = self.tree.replace(self.pos, node);
        debug_assert!(written, "staged node without a slot at {:?}", self.pos);
    }
}
