//! LNAST node kinds.
//!
//! Every node in an LNAST tree carries exactly one [`NodeKind`] (the raw tag).
//! Kinds are grouped into coarser [`SemanticKind`] categories for passes that
//! want to reason about a whole class of operators at once.
//!
//! The taxonomy lives in a single list, [`for_each_node_kind!`], so the enum
//! here and the per-kind hooks in `upass_core` can never drift apart.

use std::fmt;

/// Invoke `$callback!` with the full node-kind list.
///
/// Each entry has the form `Variant => lnast_name, hook_name: Category;`.
/// Adding a kind here adds the enum variant, its name, its category, and
/// its dispatch hook in one place.
#[macro_export]
macro_rules! for_each_node_kind {
    ($callback:ident) => {
        $callback! {
            // Assignment
            Assign => assign, process_assign: Assign;

            // Bitwidth
            BitAnd => bit_and, process_bit_and: Bitwise;
            BitOr => bit_or, process_bit_or: Bitwise;
            BitNot => bit_not, process_bit_not: Bitwise;
            BitXor => bit_xor, process_bit_xor: Bitwise;

            // Bitwidth insensitive reduce
            RedOr => red_or, process_red_or: Reduce;
            RedAnd => red_and, process_red_and: Reduce;
            RedXor => red_xor, process_red_xor: Reduce;

            // Logical
            LogAnd => log_and, process_log_and: Logical;
            LogOr => log_or, process_log_or: Logical;
            LogNot => log_not, process_log_not: Logical;

            // Arithmetic
            Plus => plus, process_plus: Arithmetic;
            Minus => minus, process_minus: Arithmetic;
            Mult => mult, process_mult: Arithmetic;
            Div => div, process_div: Arithmetic;
            Mod => mod, process_mod: Arithmetic;

            // Shift
            Shl => shl, process_shl: Shift;
            Sra => sra, process_sra: Shift;

            // Bit manipulation
            Sext => sext, process_sext: BitManip;
            SetMask => set_mask, process_set_mask: BitManip;
            GetMask => get_mask, process_get_mask: BitManip;
            MaskAnd => mask_and, process_mask_and: BitManip;
            MaskPopcount => mask_popcount, process_mask_popcount: BitManip;
            MaskXor => mask_xor, process_mask_xor: BitManip;

            // Comparison
            Ne => ne, process_ne: Comparison;
            Eq => eq, process_eq: Comparison;
            Lt => lt, process_lt: Comparison;
            Le => le, process_le: Comparison;
            Gt => gt, process_gt: Comparison;
            Ge => ge, process_ge: Comparison;

            // Function call
            FuncCall => func_call, process_func_call: FuncCall;

            // Structure
            Top => top, process_top: Structure;
            Stmts => stmts, process_stmts: Structure;
        }
    };
}

macro_rules! define_node_kinds {
    ($( $variant:ident => $name:tt, $hook:ident: $sem:ident; )*) => {
        /// Raw LNAST node tag.
        ///
        /// Marked `#[non_exhaustive]`: matches outside this crate need a
        /// default arm, so a kind added later is ignored rather than
        /// breaking downstream passes.
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[non_exhaustive]
        pub enum NodeKind {
            $( $variant, )*
        }

        impl NodeKind {
            /// Every kind, in taxonomy order.
            pub const ALL: &'static [NodeKind] = &[$( NodeKind::$variant, )*];

            /// The lowercase LNAST name (`"bit_and"`, `"func_call"`, ...).
            pub const fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$variant => stringify!($name), )*
                }
            }

            /// Name of the dispatch hook that handles this kind.
            pub const fn hook_name(self) -> &'static str {
                match self {
                    $( NodeKind::$variant => stringify!($hook), )*
                }
            }

            /// The coarse category this kind belongs to.
            pub const fn semantic(self) -> SemanticKind {
                match self {
                    $( NodeKind::$variant => SemanticKind::$sem, )*
                }
            }
        }
    };
}

for_each_node_kind!(define_node_kinds);

impl NodeKind {
    /// Look up a kind by its LNAST name.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Returns `true` for the structural kinds (`top`, `stmts`).
    #[inline]
    pub const fn is_structural(self) -> bool {
        matches!(self.semantic(), SemanticKind::Structure)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse node category, used for class-level matching.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SemanticKind {
    Assign,
    Bitwise,
    /// Bitwidth insensitive reductions.
    Reduce,
    Logical,
    Arithmetic,
    Shift,
    BitManip,
    Comparison,
    FuncCall,
    /// `top` and `stmts`.
    Structure,
}

impl SemanticKind {
    /// Every category.
    pub const ALL: [SemanticKind; 10] = [
        SemanticKind::Assign,
        SemanticKind::Bitwise,
        SemanticKind::Reduce,
        SemanticKind::Logical,
        SemanticKind::Arithmetic,
        SemanticKind::Shift,
        SemanticKind::BitManip,
        SemanticKind::Comparison,
        SemanticKind::FuncCall,
        SemanticKind::Structure,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SemanticKind::Assign => "assign",
            SemanticKind::Bitwise => "bitwise",
            SemanticKind::Reduce => "reduce",
            SemanticKind::Logical => "logical",
            SemanticKind::Arithmetic => "arithmetic",
            SemanticKind::Shift => "shift",
            SemanticKind::BitManip => "bit_manip",
            SemanticKind::Comparison => "comparison",
            SemanticKind::FuncCall => "func_call",
            SemanticKind::Structure => "structure",
        }
    }

    /// The raw kinds in this category.
    pub fn members(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.semantic() == self)
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
