//! Priority queue kept as a sorted [`DoublyLinkedList`].
//!
//! Items are ordered by a key extracted at insertion time; the front of the
//! list always holds the smallest key. Insertion walks from the head and
//! splices the new node in place, so it is O(n) in the worst case but O(1)
//! when the item belongs at either end. Removal of the highest-priority
//! (smallest-key) item is O(1).
//!
//! Among equal keys, earlier insertions stay ahead of later ones.
//!
//! # Example
//!
//! ```
//! use linear_collections::PriorityQueue;
//!
//! struct Task {
//!     name: &'static str,
//!     priority: u8,
//! }
//!
//! let mut tasks = PriorityQueue::new(|t: &Task| t.priority);
//! tasks.insert_ordered(Task { name: "wash dishes", priority: 3 });
//! tasks.insert_ordered(Task { name: "pay bill", priority: 1 });
//! tasks.insert_ordered(Task { name: "study", priority: 2 });
//!
//! let order: Vec<_> = std::iter::from_fn(|| tasks.get_highest_priority().ok())
//!     .map(|t| t.name)
//!     .collect();
//! assert_eq!(order, ["pay bill", "study", "wash dishes"]);
//! ```

use core::fmt;

use crate::doubly::Iter;
use crate::{DoublyLinkedList, Error, Linear, Result};

/// A min-priority queue with stable ordering among equal keys.
///
/// Unordered pushes are not exposed; the only way in is
/// [`insert_ordered`](PriorityQueue::insert_ordered), so scanning from the
/// front always yields non-decreasing keys.
pub struct PriorityQueue<T, K, F = fn(&T) -> K>
where
    F: Fn(&T) -> K,
{
    list: DoublyLinkedList<T>,
    key: F,
}

impl<T, K, F> PriorityQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    /// Creates an empty queue ordered by `key`.
    #[inline]
    pub fn new(key: F) -> Self {
        Self {
            list: DoublyLinkedList::new(),
            key,
        }
    }

    /// Returns the number of queued items.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Inserts `item` after every queued item whose key is `<=` its own.
    pub fn insert_ordered(&mut self, item: T) {
        let key = &self.key;
        let k = key(&item);

        let Some(front) = self.list.front() else {
            self.list.push(item);
            return;
        };
        if k < key(front) {
            self.list.push(item);
            return;
        }
        if self.list.back().is_some_and(|back| k >= key(back)) {
            self.list.push_back(item);
            return;
        }

        // Head key <= k < tail key, so a strictly greater node exists.
        match self.list.position(|queued| key(queued) > k) {
            Some(before) => self.list.splice_before(before, item),
            None => self.list.push_back(item),
        }
    }

    /// Removes and returns the item with the smallest key.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the queue is empty.
    #[inline]
    pub fn get_highest_priority(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("priority queue"));
        }
        self.list.pop()
    }

    /// Returns the item with the smallest key without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.list.front().ok_or(Error::underflow("priority queue"))
    }

    /// Iterates in priority order without consuming the queue.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, u32> {
        self.list.iter()
    }

    /// Read-only view of the underlying sorted list.
    #[inline]
    pub fn as_list(&self) -> &DoublyLinkedList<T> {
        &self.list
    }

    /// Consumes the queue, returning the sorted list.
    #[inline]
    pub fn into_list(self) -> DoublyLinkedList<T> {
        self.list
    }
}

impl<T: fmt::Debug, K, F> fmt::Debug for PriorityQueue<T, K, F>
where
    F: Fn(&T) -> K,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.list)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, K, F> fmt::Display for PriorityQueue<T, K, F>
where
    F: Fn(&T) -> K,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T, K, F> Extend<T> for PriorityQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_ordered(item);
        }
    }
}

impl<T: PartialEq, K, F> Linear<T> for PriorityQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Query = T;

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.insert_ordered(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T> {
        self.get_highest_priority()
    }

    #[inline]
    fn find(&self, key: &T) -> Result<&T> {
        self.list.find(key)
    }
}
