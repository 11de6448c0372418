//! The cursor contract between passes and a tree manager.
//!
//! A tree manager owns an LNAST tree and exactly one cursor position into
//! it. Passes never touch storage directly: they move the cursor, read the
//! node under it, edit a staged copy of that node, and commit the copy back
//! with [`TreeCursor::write_node`].
//!
//! # Invalid position
//!
//! Failed moves leave the cursor *invalid* (it designates no node). Reading
//! or writing node content while invalid is a caller bug; implementations
//! fail fast with a panic naming the operation. Check [`is_invalid`] first
//! when a move may fail.
//!
//! [`is_invalid`]: TreeCursor::is_invalid

use crate::{NodeId, NodeKind, SemanticKind};

/// Cursor operations a pass may invoke against a tree manager.
///
/// Not thread-safe: every mutating operation takes `&mut self`, and a
/// manager has a single position shared by whoever holds it.
pub trait TreeCursor {
    /// Move to an explicit node. Unknown ids leave the cursor invalid.
    fn move_to_nid(&mut self, nid: NodeId);

    /// Move to the root of the tree.
    fn move_to_root(&mut self);

    /// Move to the first child. Returns `false` (cursor invalid) if the
    /// current node has no children.
    fn move_to_child(&mut self) -> bool;

    /// Move to the next sibling. Returns `false` (cursor invalid) if the
    /// current node is the last sibling.
    fn move_to_sibling(&mut self) -> bool;

    /// Move to the parent. At the root, or when already invalid, the cursor
    /// becomes invalid.
    fn move_to_parent(&mut self);

    /// Id of the node under the cursor, [`NodeId::INVALID`] when invalid.
    fn current_nid(&self) -> NodeId;

    /// Exact tag of the current node.
    fn get_raw_ntype(&self) -> NodeKind;

    /// Category of the current node.
    fn get_ntype(&self) -> SemanticKind {
        self.get_raw_ntype().semantic()
    }

    /// Text payload of the current node (staged edits included).
    fn current_text(&self) -> &str;

    /// Returns `true` if the cursor designates no node.
    fn is_invalid(&self) -> bool;

    /// Returns `true` if the current node has no following sibling.
    /// An invalid cursor reports `true`.
    fn is_last_child(&self) -> bool;

    /// Returns `true` if the cursor is on the root.
    fn is_root(&self) -> bool {
        !self.is_invalid() && self.current_nid() == NodeId::ROOT
    }

    /// Replace the staged text of the current node.
    fn set_text(&mut self, text: &str);

    /// Replace the staged kind of the current node.
    fn set_ntype(&mut self, kind: NodeKind);

    /// Commit the staged copy of the current node into the tree.
    /// The cursor does not move.
    fn write_node(&mut self);
}
