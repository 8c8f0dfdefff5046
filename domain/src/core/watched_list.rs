//! Snapshot/diff tracking for owned collections.
//!
//! A [`WatchedList`] wraps a collection that is persisted as a whole but
//! edited as a set: it remembers the snapshot it was built from and, after an
//! [`update`](WatchedList::update), reports which items were added and which
//! were removed so the persistence layer can apply the difference instead of
//! rewriting the full collection.

use crate::core::entity_id::EntityId;
use std::collections::HashSet;

/// An item that a [`WatchedList`] can diff by identity.
pub trait Identified {
    /// The identity used when computing snapshot deltas.
    ///
    /// This is not necessarily the item's own row identity; an attachment,
    /// for instance, reconciles by the file it references.
    fn identity(&self) -> &EntityId;
}

/// A collection that tracks an original snapshot and a current state.
///
/// Deltas are computed by identity-set difference, never by value or address
/// equality. The computation is pure and synchronous; no I/O happens here.
///
/// Lifecycle: construct once from the persisted snapshot, call `update` at
/// most once per edit with the target state, then read the deltas and hand
/// them to the repository.
#[derive(Debug, Clone)]
pub struct WatchedList<T> {
    original: Vec<T>,
    current: Vec<T>,
}

impl<T: Identified + Clone> WatchedList<T> {
    /// Builds a list whose snapshot and current state are both `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            original: items.clone(),
            current: items,
        }
    }

    /// The live items, in order.
    pub fn items(&self) -> &[T] {
        &self.current
    }

    /// Replaces the current state with `items`.
    ///
    /// The previous current state becomes the new snapshot, so deltas always
    /// describe the most recent transition. Calling `update` again with an
    /// identical target therefore yields empty deltas.
    pub fn update(&mut self, items: Vec<T>) {
        self.original = std::mem::replace(&mut self.current, items);
    }

    /// Items present now but absent from the snapshot, in current order.
    pub fn new_items(&self) -> Vec<T> {
        let known: HashSet<&EntityId> = self.original.iter().map(Identified::identity).collect();
        self.current
            .iter()
            .filter(|item| !known.contains(item.identity()))
            .cloned()
            .collect()
    }

    /// Items present in the snapshot but absent now, in snapshot order.
    pub fn removed_items(&self) -> Vec<T> {
        let kept: HashSet<&EntityId> = self.current.iter().map(Identified::identity).collect();
        self.original
            .iter()
            .filter(|item| !kept.contains(item.identity()))
            .cloned()
            .collect()
    }

    /// True if the list holds no live items.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.current.len()
    }
}

impl<T: Identified + Clone> Default for WatchedList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Identified + Clone> From<Vec<T>> for WatchedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
