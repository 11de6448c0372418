//! Node identities for LNAST trees.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a node inside one [`Lnast`](crate::Lnast).
///
/// Ids are only meaningful for the tree that issued them. Moving a cursor
/// to an id the tree does not contain leaves the cursor invalid.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node" (invalid cursor, missing parent).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Index into the tree's node storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Hash for NodeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}
