//! The capability set every linear structure supports.

use crate::Result;

/// Common contract for linear structures.
///
/// Each structure decides where `insert` and `remove` act (front of a
/// singly-linked list, top of a stack, rear/front of a queue, ...) and what
/// `find` looks up. Lists search by value (`Query = T`); stacks and queues
/// only ever look at their next item, so their `Query` is `()`.
///
/// The trait is object safe once `Query` is fixed:
///
/// ```
/// use linear_collections::{DoublyLinkedList, Linear, SinglyLinkedList};
///
/// let mut structures: Vec<Box<dyn Linear<u32, Query = u32>>> = vec![
///     Box::new(SinglyLinkedList::new()),
///     Box::new(DoublyLinkedList::<u32>::new()),
/// ];
///
/// for s in &mut structures {
///     s.insert(1);
///     s.insert(2);
///     assert_eq!(s.len(), 2);
///     assert_eq!(s.find(&1), Ok(&1));
/// }
/// ```
pub trait Linear<T> {
    /// What `find` is keyed by.
    type Query: ?Sized;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if no further item can be inserted.
    ///
    /// Every structure in this crate grows on demand, so this is `false`
    /// unless an implementation has a hard capacity.
    #[inline]
    fn is_full(&self) -> bool {
        false
    }

    /// Inserts at the structure's default insertion point.
    fn insert(&mut self, item: T);

    /// Removes from the structure's default removal point.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`](crate::Error::Underflow) if empty.
    fn remove(&mut self) -> Result<T>;

    /// Looks up an item.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) for keyed lookups with no
    /// match, [`Error::Underflow`](crate::Error::Underflow) for peeks on an
    /// empty structure.
    fn find(&self, key: &Self::Query) -> Result<&T>;
}
