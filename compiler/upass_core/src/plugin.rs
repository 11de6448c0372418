//! Plugin factory adapter.
//!
//! The registry stores one homogeneous setup function per pass. A pass type
//! becomes a plugin by implementing [`UPassPlugin`]; [`get_upass`] then
//! erases it behind `dyn UPass`.

use crate::{CursorToken, PassRole, UPass};

/// Type-erased pass constructor stored in the registry.
///
/// Higher-ranked over the cursor lifetime: the same function can build a
/// pass for any manager, and the pass it returns borrows that manager.
pub type SetupFn = for<'lm> fn(CursorToken<'lm>) -> Box<dyn UPass<'lm> + 'lm>;

/// A pass type that can be registered by name.
///
/// Implemented on a unit struct standing for the pass family; the pass
/// itself (`Instance`) is generic over the cursor lifetime.
pub trait UPassPlugin {
    /// Registry name.
    const NAME: &'static str;

    const ROLE: PassRole;

    /// One-line description for listings.
    const DESCRIPTION: &'static str = "";

    type Instance<'lm>: UPass<'lm> + 'lm;

    /// Build a pass bound to `lm`.
    fn setup<'lm>(lm: CursorToken<'lm>) -> Self::Instance<'lm>;
}

/// Construct `P` and erase it; `get_upass::<P>` coerces to [`SetupFn`].
pub fn get_upass<'lm, P: UPassPlugin>(lm: CursorToken<'lm>) -> Box<dyn UPass<'lm> + 'lm> {
    Box::new(P::setup(lm))
}
