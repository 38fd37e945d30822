//! Captured-event bindings for in-progress candidate matches

use crate::Event;
use indexmap::IndexMap;
use std::sync::Arc;

/// The alias-to-event binding accumulated by one candidate match.
///
/// Owned and extended by the automaton; the predicate subsystem only
/// reads it. Extension is copy-on-write: [`CapturedEvents::extend`]
/// returns a new snapshot and leaves the receiver untouched, so an
/// in-flight evaluation never races with the capture of a later event.
/// Events themselves are shared between snapshots via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CapturedEvents {
    bindings: IndexMap<String, Arc<Event>>,
}

impl CapturedEvents {
    /// An empty binding, the starting state of every candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new snapshot with `event` bound to `alias`.
    ///
    /// Rebinding an existing alias replaces it; capture order of the
    /// remaining aliases is preserved.
    #[must_use]
    pub fn extend(&self, alias: impl Into<String>, event: Event) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(alias.into(), Arc::new(event));
        Self { bindings }
    }

    /// Look up the event bound to `alias`, if any
    pub fn lookup(&self, alias: &str) -> Option<&Event> {
        self.bindings.get(alias).map(Arc::as_ref)
    }

    /// Whether `alias` has a binding yet
    pub fn contains_alias(&self, alias: &str) -> bool {
        self.bindings.contains_key(alias)
    }

    /// Aliases in capture order
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of captured events
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no event has been captured yet
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
