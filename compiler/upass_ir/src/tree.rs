//! Reference LNAST tree storage.
//!
//! [`Lnast`] is a flat arena of nodes indexed by [`NodeId`]. Each slot keeps
//! its parent, its position among its siblings, and its children, which is
//! everything the cursor in [`LnastManager`](crate::LnastManager) needs to
//! navigate in O(1).
//!
//! Trees are built top-down with [`Lnast::add_child`]; nodes are never
//! removed. Only node content (kind and text) changes after construction,
//! and only through a cursor commit.

use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::{NodeId, NodeKind};

/// Content of one LNAST node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LnastNode {
    pub kind: NodeKind,
    /// Textual payload (variable name, literal, function name, ...).
    pub text: String,
}

impl LnastNode {
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        LnastNode {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    node: LnastNode,
    parent: NodeId,
    /// Position in the parent's child list.
    sibling_index: u32,
    children: SmallVec<[NodeId; 4]>,
}

/// An LNAST tree.
#[derive(Clone, Debug)]
pub struct Lnast {
    slots: Vec<Slot>,
}

#[inline]
#[track_caller]
fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("{what} exceeds u32::MAX"))
}

impl Lnast {
    /// Create a tree holding only its root.
    pub fn new(root: LnastNode) -> Self {
        Lnast {
            slots: vec![Slot {
                node: root,
                parent: NodeId::INVALID,
                sibling_index: 0,
                children: SmallVec::new(),
            }],
        }
    }

    /// Create a tree rooted at a `top` node.
    pub fn with_top(text: impl Into<String>) -> Self {
        Self::new(LnastNode::new(NodeKind::Top, text))
    }

    /// The root node id (always valid).
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Append a child under `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    #[track_caller]
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind, text: impl Into<String>) -> NodeId {
        assert!(self.contains(parent), "add_child: {parent:?} is not in this tree");
        let id = NodeId::new(to_u32(self.slots.len(), "LNAST node count"));
        let siblings = &mut self.slots[parent.index()].children;
        let sibling_index = to_u32(siblings.len(), "LNAST child count");
        siblings.push(id);
        self.slots.push(Slot {
            node: LnastNode::new(kind, text),
            parent,
            sibling_index,
            children: SmallVec::new(),
        });
        id
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.is_valid() && id.index() < self.slots.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&LnastNode> {
        self.slot(id).map(|slot| &slot.node)
    }

    /// Parent of `id`, or `None` for the root and for unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id)
            .map(|slot| slot.parent)
            .filter(|parent| parent.is_valid())
    }

    /// Children of `id` in order (empty for unknown ids).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map_or(&[], |slot| slot.children.as_slice())
    }

    /// First child of `id`.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// The sibling following `id`, if any.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let slot = self.slot(id)?;
        let parent = self.slot(slot.parent)?;
        parent
            .children
            .get(slot.sibling_index as usize + 1)
            .copied()
    }

    /// Returns `true` if `id` has no following sibling (the root counts as last).
    pub fn is_last_child(&self, id: NodeId) -> bool {
        self.next_sibling(id).is_none()
    }

    /// Pre-order list of every node id.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.slots.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Overwrite the content of `id`. Returns `false` for unknown ids.
    pub(crate) fn replace(&mut self, id: NodeId, node: LnastNode) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(slot) if id.is_valid() => {
                slot.node = node;
                true
            }
            _ => false,
        }
    }

    /// Render the tree as indented text, one node per line.
    ///
    /// ```text
    /// top
    ///   stmts
    ///     assign "x"
    /// ```
    ///
    /// Nodes with empty text print only their kind.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(node.kind.name());
            if !node.text.is_empty() {
                let _ = write!(out, " {:?}", node.text);
            }
            out.push('\n');
            stack.extend(
                self.children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, depth + 1)),
            );
        }
        out
    }

    #[inline]
    fn slot(&self, id: NodeId) -> Option<&Slot> {
        if id.is_valid() {
            self.slots.get(id.index())
        } else {
            None
        }
    }
}
