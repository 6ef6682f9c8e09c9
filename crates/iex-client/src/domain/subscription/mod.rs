//! Subscription Bookkeeping
//!
//! Domain types for tracking which listeners are registered against which
//! feed topics, and for detecting the empty/non-empty transitions that
//! drive upstream subscribe and unsubscribe commands.
//!
//! # Design
//!
//! Listeners are opaque callbacks compared by pointer identity
//! ([`Arc::ptr_eq`]). Registering the same `Arc` twice is accepted caller
//! error: it is invoked twice per dispatch, and one removal drops every
//! pointer-equal occurrence.
//!
//! A symbol's entry in [`SymbolListeners`] is created on first subscribe
//! and never removed afterwards; once all listeners are gone the entry
//! stays at length zero. Each mutation reports a [`Transition`] so the
//! owning service can emit exactly one upstream command per
//! empty-to-non-empty or non-empty-to-empty crossing.

use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Listener Set
// =============================================================================

/// An ordered collection of listeners with pointer-identity removal.
///
/// Dispatch order is registration order. `T` is unsized in practice
/// (`dyn Fn(&Message)`), so entries are held behind [`Arc`].
pub struct ListenerSet<T: ?Sized> {
    entries: Vec<Arc<T>>,
}

impl<T: ?Sized> ListenerSet<T> {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a listener.
    ///
    /// No deduplication: an already-registered `Arc` is appended again and
    /// will be invoked once per occurrence.
    pub fn add(&mut self, listener: Arc<T>) {
        self.entries.push(listener);
    }

    /// Remove every occurrence of `listener`, compared by pointer identity.
    pub fn remove(&mut self, listener: &Arc<T>) {
        self.entries.retain(|entry| !Arc::ptr_eq(entry, listener));
    }

    /// Drop all listeners.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the set holds no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered listeners (occurrences, not unique callbacks).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Clone the current entries for dispatch.
    ///
    /// Invocation happens on the snapshot, outside any lock guarding the
    /// set, so listeners may re-enter the owning registry.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.clone()
    }
}

impl<T: ?Sized> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Outcome of a subscription mutation.
///
/// Reported to the owning service so it can decide whether an upstream
/// command is due: exactly one subscribe per [`Transition::BecameActive`],
/// exactly one unsubscribe per [`Transition::BecameIdle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The symbol's listener list went from empty (or absent) to non-empty.
    BecameActive,
    /// The symbol's listener list went from non-empty to empty.
    BecameIdle,
    /// The listener list did not cross the empty/non-empty boundary.
    Unchanged,
}

// =============================================================================
// Per-Symbol Registry
// =============================================================================

/// Mapping from normalized symbol to its ordered listener list.
///
/// Callers normalize symbols before touching the registry; the registry
/// itself is case-preserving. Entries are never deleted, only emptied.
pub struct SymbolListeners<T: ?Sized> {
    entries: HashMap<String, ListenerSet<T>>,
}

impl<T: ?Sized> SymbolListeners<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `listener` under `symbol`, creating the entry if absent.
    pub fn add(&mut self, symbol: &str, listener: Arc<T>) -> Transition {
        let set = self.entries.entry(symbol.to_string()).or_default();
        let was_empty = set.is_empty();
        set.add(listener);
        if was_empty {
            Transition::BecameActive
        } else {
            Transition::Unchanged
        }
    }

    /// Remove `listener` from `symbol`'s list.
    ///
    /// Removing from an absent or already-empty entry reports
    /// [`Transition::Unchanged`], so double-unsubscribe never produces a
    /// second upstream command.
    pub fn remove(&mut self, symbol: &str, listener: &Arc<T>) -> Transition {
        let Some(set) = self.entries.get_mut(symbol) else {
            return Transition::Unchanged;
        };
        let was_empty = set.is_empty();
        set.remove(listener);
        if !was_empty && set.is_empty() {
            Transition::BecameIdle
        } else {
            Transition::Unchanged
        }
    }

    /// Drop every listener registered under `symbol`.
    pub fn remove_all(&mut self, symbol: &str) -> Transition {
        let Some(set) = self.entries.get_mut(symbol) else {
            return Transition::Unchanged;
        };
        let was_empty = set.is_empty();
        set.clear();
        if was_empty {
            Transition::Unchanged
        } else {
            Transition::BecameIdle
        }
    }

    /// Drop every listener for every symbol.
    ///
    /// Returns the symbols whose lists were non-empty, sorted for a
    /// deterministic upstream command order.
    pub fn clear(&mut self) -> Vec<String> {
        let mut idled: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(symbol, _)| symbol.clone())
            .collect();
        idled.sort();
        for set in self.entries.values_mut() {
            set.clear();
        }
        idled
    }

    /// Clone `symbol`'s listeners for dispatch (empty if none registered).
    #[must_use]
    pub fn snapshot(&self, symbol: &str) -> Vec<Arc<T>> {
        self.entries
            .get(symbol)
            .map_or_else(Vec::new, ListenerSet::snapshot)
    }

    /// Whether `symbol` has ever had a listener registered.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Number of listeners currently registered under `symbol`.
    #[must_use]
    pub fn listener_count(&self, symbol: &str) -> usize {
        self.entries.get(symbol).map_or(0, ListenerSet::len)
    }
}

impl<T: ?Sized> Default for SymbolListeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type Callback = dyn Fn() + Send + Sync;

    fn listener() -> Arc<Callback> {
        Arc::new(|| {})
    }

    #[test]
    fn first_listener_activates_symbol() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();

        assert_eq!(registry.add("spy", listener()), Transition::BecameActive);
    }

    #[test]
    fn second_listener_is_unchanged() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();

        registry.add("spy", listener());
        assert_eq!(registry.add("spy", listener()), Transition::Unchanged);
    }

    #[test]
    fn removing_last_listener_idles_symbol() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let first = listener();
        let second = listener();

        registry.add("spy", Arc::clone(&first));
        registry.add("spy", Arc::clone(&second));

        assert_eq!(registry.remove("spy", &first), Transition::Unchanged);
        assert_eq!(registry.remove("spy", &second), Transition::BecameIdle);
    }

    #[test]
    fn removing_from_empty_entry_is_unchanged() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let only = listener();

        registry.add("spy", Arc::clone(&only));
        registry.remove("spy", &only);

        // Double-unsubscribe must not report a second idle transition.
        assert_eq!(registry.remove("spy", &only), Transition::Unchanged);
    }

    #[test]
    fn removing_unknown_symbol_is_unchanged() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();

        assert_eq!(registry.remove("spy", &listener()), Transition::Unchanged);
    }

    #[test]
    fn entries_persist_at_length_zero() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let only = listener();

        registry.add("spy", Arc::clone(&only));
        registry.remove("spy", &only);

        assert!(registry.contains("spy"));
        assert_eq!(registry.listener_count("spy"), 0);
    }

    #[test]
    fn resubscribing_an_idled_symbol_activates_again() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let only = listener();

        registry.add("spy", Arc::clone(&only));
        registry.remove("spy", &only);

        assert_eq!(registry.add("spy", listener()), Transition::BecameActive);
    }

    #[test]
    fn duplicate_registration_is_kept_twice() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let duplicated = listener();

        registry.add("spy", Arc::clone(&duplicated));
        registry.add("spy", Arc::clone(&duplicated));

        assert_eq!(registry.listener_count("spy"), 2);
    }

    #[test]
    fn removal_drops_every_occurrence() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let duplicated = listener();

        registry.add("spy", Arc::clone(&duplicated));
        registry.add("spy", Arc::clone(&duplicated));

        assert_eq!(registry.remove("spy", &duplicated), Transition::BecameIdle);
        assert_eq!(registry.listener_count("spy"), 0);
    }

    #[test]
    fn removal_is_pointer_identity_not_equality() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let kept = listener();

        registry.add("spy", Arc::clone(&kept));
        // A different Arc over an identical closure is a different listener.
        registry.remove("spy", &listener());

        assert_eq!(registry.listener_count("spy"), 1);
    }

    #[test]
    fn remove_all_idles_only_non_empty_entries() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let only = listener();

        registry.add("spy", Arc::clone(&only));
        registry.remove("spy", &only);

        assert_eq!(registry.remove_all("spy"), Transition::Unchanged);

        registry.add("aapl", listener());
        assert_eq!(registry.remove_all("aapl"), Transition::BecameIdle);
    }

    #[test]
    fn clear_reports_active_symbols_sorted() {
        let mut registry: SymbolListeners<Callback> = SymbolListeners::new();
        let idled = listener();

        registry.add("msft", listener());
        registry.add("aapl", listener());
        registry.add("spy", Arc::clone(&idled));
        registry.remove("spy", &idled);

        assert_eq!(registry.clear(), vec!["aapl".to_string(), "msft".to_string()]);
        assert_eq!(registry.listener_count("msft"), 0);
        assert!(registry.contains("spy"));
    }

    #[test]
    fn snapshot_of_unknown_symbol_is_empty() {
        let registry: SymbolListeners<Callback> = SymbolListeners::new();

        assert!(registry.snapshot("spy").is_empty());
    }

    #[test]
    fn snapshot_preserves_registration_order() {
        let mut set: ListenerSet<Callback> = ListenerSet::new();
        let first = listener();
        let second = listener();

        set.add(Arc::clone(&first));
        set.add(Arc::clone(&second));

        let snapshot = set.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!(Arc::ptr_eq(&snapshot[0], &first));
        assert!(Arc::ptr_eq(&snapshot[1], &second));
    }
}
