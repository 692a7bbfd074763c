//! Linear data structures with explicit node ownership.
//!
//! This crate provides the classic linear collections (singly- and
//! doubly-linked lists, a stack, a FIFO queue and an ordered priority
//! queue) behind one shared capability trait, [`Linear`].
//!
//! # Ownership model
//!
//! ```text
//! SinglyLinkedList - head owns the chain: Option<Box<Node<T>>>
//! DoublyLinkedList - a slab arena owns every node; prev/next are slot links
//! ```
//!
//! The doubly-linked list never holds two owning edges to the same node.
//! Neighbours refer to each other by arena slot, so removing from the
//! middle is O(1) once the node is found and the back-references cannot
//! keep a node alive.
//!
//! # Quick Start
//!
//! ```
//! use linear_collections::{Linear, Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push('A');
//! stack.push('B');
//! assert_eq!(stack.pop(), Ok('B'));
//!
//! let mut queue = Queue::new();
//! queue.enqueue("first");
//! queue.enqueue("second");
//! assert_eq!(queue.dequeue(), Ok("first"));
//!
//! // Same contract, different insertion/removal points.
//! assert_eq!(Linear::len(&stack), 1);
//! assert_eq!(Linear::len(&queue), 1);
//! ```
//!
//! # Data Structures
//!
//! | Structure | Insert | Remove | `find` |
//! |-----------|--------|--------|--------|
//! | [`SinglyLinkedList`] | front, O(1) | front, O(1) | by value |
//! | [`DoublyLinkedList`] | back, O(1) | back, O(1) | by value |
//! | [`Stack`] | top, O(1) | top, O(1) | peek |
//! | [`Queue`] | rear, O(1) | front, O(1) | peek |
//! | [`PriorityQueue`] | ordered, O(n) | smallest key, O(1) | by value |
//! | [`Array`] | end, amortized O(1) | end, O(1) | by value |
//!
//! [`Matrix`] is a fixed-shape grid built from nested [`Array`]s.
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with a crate [`Error`]:
//! removing from an empty structure is [`Error::Underflow`], a bad
//! position is [`Error::IndexOutOfBounds`] or [`Error::InvalidArgument`],
//! and a keyed lookup with no match is [`Error::NotFound`].
//!
//! # Logging
//!
//! Link surgery (splices, swaps, sort passes, predicate removals) is
//! reported at `trace` level and array reallocation at `debug` level
//! through the [`log`] facade. No logger is installed by this crate.

#![warn(missing_docs)]

pub mod array;
pub mod doubly;
pub mod error;
pub mod linear;
pub mod link;
pub mod matrix;
pub mod priority;
pub mod queue;
pub mod singly;
pub mod stack;

mod node;

pub use array::Array;
pub use doubly::DoublyLinkedList;
pub use error::{Error, Result};
pub use linear::Linear;
pub use link::Link;
pub use matrix::Matrix;
pub use priority::PriorityQueue;
pub use queue::Queue;
pub use singly::SinglyLinkedList;
pub use stack::Stack;
