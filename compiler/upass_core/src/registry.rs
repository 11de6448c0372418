//! Pass registry.
//!
//! Maps a unique pass name to its setup function. The first registration of
//! a name wins: a later one is reported through the caller's
//! [`DiagnosticSink`] and otherwise ignored, so registration lists never
//! abort half-way.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;
use upass_diagnostic::{duplicate_pass, DiagnosticSink};

use crate::{get_upass, PassRole, SetupFn, UPassPlugin};

/// Entry in the pass registry.
#[derive(Copy, Clone)]
pub struct PassEntry {
    pub role: PassRole,
    pub description: &'static str,
    /// Builds a pass bound to a cursor token.
    pub setup: SetupFn,
}

impl fmt::Debug for PassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassEntry")
            .field("role", &self.role)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Name-keyed registry of passes, ordered by name.
///
/// Owned by whatever assembles pipelines; populate it once at startup and
/// share it read-only afterwards.
#[derive(Debug, Default)]
pub struct PassRegistry {
    passes: BTreeMap<String, PassEntry>,
}

impl PassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `setup` under `name`.
    ///
    /// If `name` is taken, reports `E2001` to `sink` and leaves the existing
    /// entry untouched. Names are not otherwise validated.
    pub fn register(
        &mut self,
        name: &str,
        role: PassRole,
        setup: SetupFn,
        sink: &mut dyn DiagnosticSink,
    ) {
        self.insert(
            name,
            PassEntry {
                role,
                description: "",
                setup,
            },
            sink,
        );
    }

    /// Register a plugin type under its own name, role, and description.
    pub fn register_plugin<P: UPassPlugin>(&mut self, sink: &mut dyn DiagnosticSink) {
        self.insert(
            P::NAME,
            PassEntry {
                role: P::ROLE,
                description: P::DESCRIPTION,
                setup: get_upass::<P>,
            },
            sink,
        );
    }

    fn insert(&mut self, name: &str, entry: PassEntry, sink: &mut dyn DiagnosticSink) {
        if self.passes.contains_key(name) {
            sink.emit(duplicate_pass(name));
            return;
        }
        debug!(name, role = %entry.role, "registered upass");
        self.passes.insert(name.to_owned(), entry);
    }

    /// The full mapping, for enumeration.
    pub fn get_registry(&self) -> &BTreeMap<String, PassEntry> {
        &self.passes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PassEntry)> {
        self.passes.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn get(&self, name: &str) -> Option<&PassEntry> {
        self.passes.get(name)
    }

    /// Setup function registered under `name`.
    pub fn setup(&self, name: &str) -> Option<SetupFn> {
        self.passes.get(name).map(|entry| entry.setup)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.passes.contains_key(name)
    }

    /// Names of every pass with the given role, in name order.
    pub fn names_with_role(&self, role: PassRole) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, entry)| entry.role == role)
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}
