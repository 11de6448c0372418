//! Pre-order traversal driver.
//!
//! Walks the whole tree through the pass's own cursor token, calling
//! [`dispatch`] on every node. Hooks may move the cursor freely; before
//! advancing, the driver returns to the node it just visited.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::{dispatch, UPass};

/// Environment variable read by [`DriverConfig::from_env`].
pub const VISIT_BUDGET_ENV: &str = "UPASS_VISIT_BUDGET";

/// Traversal settings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DriverConfig {
    /// Upper bound on hook invocations per traversal. `None` = unbounded.
    pub visit_budget: Option<usize>,
}

impl DriverConfig {
    /// Unbounded traversal.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_budget(budget: usize) -> Self {
        DriverConfig {
            visit_budget: Some(budget),
        }
    }

    /// Read `UPASS_VISIT_BUDGET`; unset or unparsable means unbounded.
    pub fn from_env() -> Self {
        Self::from_budget_var(std::env::var(VISIT_BUDGET_ENV).ok().as_deref())
    }

    fn from_budget_var(value: Option<&str>) -> Self {
        let visit_budget = value.and_then(|raw| match raw.trim().parse() {
            Ok(budget) => Some(budget),
            Err(_) => {
                tracing::warn!(value = raw, "ignoring invalid {VISIT_BUDGET_ENV}");
                None
            }
        });
        DriverConfig { visit_budget }
    }
}

/// What a traversal did.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TraversalStats {
    /// Nodes dispatched.
    pub visited: usize,
    pub duration: Duration,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TraversalError {
    #[error("traversal exceeded its budget of {budget} node visits")]
    BudgetExceeded { budget: usize },
}

/// Visit every node in pre-order, then call [`UPass::finish`].
///
/// A tree whose root cannot be reached is visited as empty. On
/// [`TraversalError::BudgetExceeded`] `finish` is not called.
pub fn traverse<'lm, P: UPass<'lm> + ?Sized>(
    pass: &mut P,
    config: &DriverConfig,
) -> Result<TraversalStats, TraversalError> {
    let start = Instant::now();
    let mut visited = 0usize;

    pass.lm().move_to_root();
    if !pass.is_invalid() {
        loop {
            if let Some(budget) = config.visit_budget {
                if visited >= budget {
                    debug!(budget, "traversal budget exhausted");
                    return Err(TraversalError::BudgetExceeded { budget });
                }
            }

            let nid = pass.current_nid();
            dispatch(pass);
            visited += 1;

            let lm = pass.lm();
            lm.move_to_nid(nid);
            if lm.move_to_child() {
                continue;
            }

            // Climb until some ancestor-or-self has a next sibling.
            lm.move_to_nid(nid);
            let mut done = false;
            loop {
                if lm.is_invalid() || lm.is_root() {
                    done = true;
                    break;
                }
                if !lm.is_last_child() {
                    lm.move_to_sibling();
                    break;
                }
                lm.move_to_parent();
            }
            if done {
                break;
            }
        }
    }

    pass.finish();
    let stats = TraversalStats {
        visited,
        duration: start.elapsed(),
    };
    debug!(visited, duration = ?stats.duration, "traversal finished");
    Ok(stats)
}
