//! Exclusive cursor capability.

use std::fmt;
use std::ops::{Deref, DerefMut};

use upass_ir::TreeCursor;

/// Exclusive access to one tree manager's cursor.
///
/// A token holds `&'lm mut` to the manager, so while a pass built from it
/// is alive nothing else can move that cursor, and the pass cannot outlive
/// the manager.
///
/// ```compile_fail
/// use upass_core::CursorToken;
/// use upass_ir::{Lnast, LnastManager};
///
/// let mut manager = LnastManager::new(Lnast::with_top(""));
/// let token = CursorToken::new(&mut manager);
/// drop(manager); // manager is still borrowed by `token`
/// let _ = token.current_nid();
/// ```
pub struct CursorToken<'lm> {
    cursor: &'lm mut dyn TreeCursor,
}

impl<'lm> CursorToken<'lm> {
    pub fn new(cursor: &'lm mut dyn TreeCursor) -> Self {
        CursorToken { cursor }
    }
}

impl<'lm> Deref for CursorToken<'lm> {
    type Target = dyn TreeCursor + 'lm;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl DerefMut for CursorToken<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}

impl fmt::Debug for CursorToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorToken")
            .field("nid", &self.cursor.current_nid())
            .finish()
    }
}
