use upass_core::{CursorToken, PassRole, UPass, UPassPlugin};

/// The identity pass. Overrides no hook, so a traversal leaves the tree
/// exactly as it found it.
pub struct Noop<'lm> {
    lm: CursorToken<'lm>,
}

impl<'lm> UPass<'lm> for Noop<'lm> {
    fn lm(&mut self) -> &mut CursorToken<'lm> {
        &mut self.lm
    }

    fn lm_ref(&self) -> &CursorToken<'lm> {
        &self.lm
    }
}

pub struct NoopPlugin;

impl UPassPlugin for NoopPlugin {
    const NAME: &'static str = "noop";
    const ROLE: PassRole = PassRole::Node;
    const DESCRIPTION: &'static str = "identity pass; changes nothing";
    type Instance<'lm> = Noop<'lm>;

    fn setup<'lm>(lm: CursorToken<'lm>) -> Noop<'lm> {
        Noop { lm }
    }
}
