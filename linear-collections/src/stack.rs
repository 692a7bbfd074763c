//! LIFO stack composed over [`SinglyLinkedList`].
//!
//! The top of the stack is the list head, so every operation is O(1).

use core::fmt;

use crate::singly::Iter;
use crate::{Error, Linear, Result, SinglyLinkedList};

/// A last-in, first-out stack.
///
/// # Example
///
/// ```
/// use linear_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('A');
/// stack.push('B');
/// stack.push('C');
///
/// assert_eq!(stack.peek(), Ok(&'C'));
/// assert_eq!(stack.pop(), Ok('C'));
/// assert_eq!(stack.peek(), Ok(&'B'));
/// ```
pub struct Stack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `item` on top.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.list.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] (`"stack underflow"`) if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("stack"));
        }
        self.list.pop()
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::underflow("stack"));
        }
        self.list.find_at(0)
    }

    /// Iterates from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("top", &self.list).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack(top={})", self.list)
    }
}

impl<T> Linear<T> for Stack<T> {
    type Query = ();

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T> {
        self.pop()
    }

    /// A stack can only be searched at its top: this is [`Stack::peek`].
    #[inline]
    fn find(&self, _key: &()) -> Result<&T> {
        self.peek()
    }
}
