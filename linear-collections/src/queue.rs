//! FIFO queue composed over [`DoublyLinkedList`].
//!
//! The front of the queue is the list head and the rear is the list tail.
//! Besides the usual enqueue/dequeue pair, a queue can drop an arbitrary
//! waiting item (someone leaving a line) through the list's
//! [`remove_first`](DoublyLinkedList::remove_first) primitive.
//!
//! # Example
//!
//! ```
//! use linear_collections::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("X");
//! queue.enqueue("Y");
//! queue.enqueue("Z");
//!
//! assert_eq!(queue.dequeue(), Ok("X"));
//! assert_eq!(queue.peek(), Ok(&"Y"));
//! assert_eq!(queue.len(), 2);
//!
//! assert!(queue.remove_item(&"Z"));
//! assert!(!queue.remove_item(&"Z"));
//! ```

use core::fmt;

use crate::doubly::{Iter, IterMut};
use crate::{DoublyLinkedList, Error, Linear, Result};

/// A first-in, first-out queue.
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of waiting items.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing is waiting.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `item` at the rear. O(1).
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.list.push_back(item);
    }

    /// Removes and returns the front item. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] (`"queue underflow"`) if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("queue"));
        }
        self.list.pop()
    }

    /// Returns the front item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.list.front().ok_or(Error::underflow("queue"))
    }

    /// Iterates from front to rear without consuming the queue.
    ///
    /// Each call starts a fresh pass.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, u32> {
        self.list.iter()
    }

    /// Iterates mutably from front to rear.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, u32> {
        self.list.iter_mut()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Removes the first waiting item equal to `target`.
    ///
    /// Returns `false` (queue unchanged) if no item matches: absence is an
    /// expected outcome, not an error.
    pub fn remove_item(&mut self, target: &T) -> bool {
        self.list.remove_first(|item| item == target).is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("items", &self.list).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue: {}", self.list)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Queue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Linear<T> for Queue<T> {
    type Query = ();

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.enqueue(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T> {
        self.dequeue()
    }

    /// A queue can only be searched at its front: this is [`Queue::peek`].
    #[inline]
    fn find(&self, _key: &()) -> Result<&T> {
        self.peek()
    }
}
