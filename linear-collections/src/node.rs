//! Node types for the linked lists.
//!
//! Both are implementation details: callers only ever see `&T` / `&mut T`
//! through the list accessors.

use crate::Link;

/// A node in the singly-linked list.
///
/// `next` is the only owning edge; dropping a node drops its tail unless
/// the list unrolls the chain first (see `SinglyLinkedList`'s `Drop`).
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(value: T, next: Option<Box<Node<T>>>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// A node in the doubly-linked list.
///
/// Nodes live in the list's slab; `next` and `prev` are slot links. The
/// slab is the owner, so neither link participates in drop.
#[derive(Debug)]
pub(crate) struct DoubleNode<T, L: Link> {
    pub(crate) value: T,
    pub(crate) prev: L,
    pub(crate) next: L,
}

impl<T, L: Link> DoubleNode<T, L> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: L::NONE,
            next: L::NONE,
        }
    }
}
