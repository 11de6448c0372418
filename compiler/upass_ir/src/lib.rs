//! upass IR - LNAST types shared by every pass
//!
//! This crate contains:
//! - The closed node-kind taxonomy ([`NodeKind`], [`SemanticKind`])
//! - Node identities ([`NodeId`])
//! - The cursor contract passes use to walk and edit a tree ([`TreeCursor`])
//! - A reference tree ([`Lnast`]) and tree manager ([`LnastManager`])
//!
//! # Design
//!
//! - **Flat storage**: nodes live in one arena, referenced by `NodeId(u32)`.
//! - **One cursor per manager**: position lives in the manager, never in a
//!   pass. Passes read and write "the node under the cursor".
//! - **Staged writes**: edits go to a copy of the current node and reach
//!   the tree only through `write_node`.

mod cursor;
mod kind;
mod manager;
mod node_id;
mod tree;

pub use cursor::TreeCursor;
pub use kind::{NodeKind, SemanticKind};
pub use manager::LnastManager;
pub use node_id::NodeId;
pub use tree::{Lnast, LnastNode};
