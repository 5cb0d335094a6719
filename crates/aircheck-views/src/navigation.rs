//! Generation-counter guard against stale navigation results.
//!
//! A fetch abandoned by a newer navigation can still resolve later; applying
//! its result would clobber the view the user has already moved to. Each
//! navigation takes a token from the shared gate, and loaders refuse to
//! apply results for a token that is no longer current.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic navigation sequence shared by one browsing session.
#[derive(Debug, Clone, Default)]
pub struct NavigationGate {
    current: Arc<AtomicU64>,
}

impl NavigationGate {
    /// Creates a gate with no navigation started yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new navigation, superseding all earlier ones.
    #[must_use]
    pub fn begin(&self) -> NavigationToken {
        let generation = self.current.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        NavigationToken {
            gate: self.clone(),
            generation,
        }
    }
}

/// Identity of one navigation, checked before applying its results.
#[derive(Debug, Clone)]
pub struct NavigationToken {
    gate: NavigationGate,
    generation: u64,
}

impl NavigationToken {
    /// Whether this navigation is still the latest one on its gate.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.gate.current.load(Ordering::SeqCst) == self.generation
    }
}
