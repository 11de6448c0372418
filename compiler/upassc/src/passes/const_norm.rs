//! Integer literal normalization.
//!
//! Rewrites the text of `assign`, arithmetic, and comparison nodes that
//! holds an integer literal (`0x`, `0b`, `0o`, or decimal, with optional
//! `_` separators and a leading `-`) to plain decimal. Text that is not a
//! literal, or does not fit in 128 bits, is left alone. Running the pass
//! twice changes nothing the second time.

use tracing::{debug, trace};
use upass_core::{CursorToken, PassRole, UPass, UPassPlugin};

/// Canonical decimal form of an integer literal, or `None` if `text` is
/// not one.
///
/// ```
/// use upassc::passes::normalize_int_literal;
///
/// assert_eq!(normalize_int_literal("0xFF").as_deref(), Some("255"));
/// assert_eq!(normalize_int_literal("-0b1_01").as_deref(), Some("-5"));
/// assert_eq!(normalize_int_literal("1_000").as_deref(), Some("1000"));
/// assert_eq!(normalize_int_literal("x"), None);
/// ```
pub fn normalize_int_literal(text: &str) -> Option<String> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..]),
        Some("0b" | "0B") => (2, &body[2..]),
        Some("0o" | "0O") => (8, &body[2..]),
        _ => (10, body),
    };

    // A literal starts with a digit; `_` only separates.
    if !digits.chars().next()?.is_digit(radix) {
        return None;
    }
    if !digits.chars().all(|c| c == '_' || c.is_digit(radix)) {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    let value = u128::from_str_radix(&cleaned, radix).ok()?;

    if negative && value != 0 {
        Some(format!("-{value}"))
    } else {
        Some(value.to_string())
    }
}

pub struct ConstNorm<'lm> {
    lm: CursorToken<'lm>,
    rewritten: usize,
}

impl ConstNorm<'_> {
    /// Nodes whose text was rewritten so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    fn normalize_current(&mut self) {
        let Some(canonical) = normalize_int_literal(self.current_text()) else {
            return;
        };
        if canonical == self.current_text() {
            return;
        }
        trace!(
            nid = ?self.current_nid(),
            from = self.current_text(),
            to = %canonical,
            "normalize literal"
        );
        self.set_text(&canonical);
        self.write_node();
        self.rewritten += 1;
    }
}

macro_rules! literal_hooks {
    ($( $hook:ident ),* $(,)?) => {
        impl<'lm> UPass<'lm> for ConstNorm<'lm> {
            fn lm(&mut self) -> &mut CursorToken<'lm> {
                &mut self.lm
            }

            fn lm_ref(&self) -> &CursorToken<'lm> {
                &self.lm
            }

            $(
                fn $hook(&mut self) {
                    self.normalize_current();
                }
            )*

            fn finish(&mut self) {
                debug!(rewritten = self.rewritten, "const_norm complete");
            }
        }
    };
}

literal_hooks!(
    process_assign,
    process_plus,
    process_minus,
    process_mult,
    process_div,
    process_mod,
    process_ne,
    process_eq,
    process_lt,
    process_le,
    process_gt,
    process_ge,
);

pub struct ConstNormPlugin;

impl UPassPlugin for ConstNormPlugin {
    const NAME: &'static str = "const_norm";
    const ROLE: PassRole = PassRole::Node;
    const DESCRIPTION: &'static str = "rewrites integer literal text to decimal";
    type Instance<'lm> = ConstNorm<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> ConstNorm<'lm> {
        ConstNorm { lm, rewritten: 0 }
    }
}
