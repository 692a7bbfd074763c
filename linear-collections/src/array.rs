//! Dynamic array with explicit capacity doubling.
//!
//! Elements sit in a boxed slot buffer. When every slot is taken the buffer
//! is replaced by one twice as large and the elements are moved across.
//! Positional insertion and removal shift the tail of the buffer by one.

use core::fmt;
use core::ops;

use log::debug;

use crate::{Error, Linear, Result};

/// Capacity used by [`Array::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable array.
///
/// Invariant: slots `0..len` are `Some`, slots `len..capacity` are `None`.
///
/// # Example
///
/// ```
/// use linear_collections::Array;
///
/// let mut arr = Array::with_capacity(3);
/// arr.push(10);
/// arr.push(20);
/// arr.push(30);
/// arr.push(40); // grows to 6
/// assert_eq!(arr.capacity(), 6);
///
/// arr.insert_at(1, 5).unwrap();
/// assert_eq!(arr.remove_at(2), Ok(20));
/// arr[0] = 99;
/// assert_eq!(arr.to_string(), "[99, 5, 30, 40]");
/// ```
pub struct Array<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> Array<T> {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots before the next reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        debug!(
            "array resizing from {} to {}",
            self.capacity(),
            new_capacity
        );
        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::out_of_bounds(index, self.len));
        }
        self.slots[index]
            .as_ref()
            .ok_or(Error::out_of_bounds(index, self.len))
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        if index >= len {
            return Err(Error::out_of_bounds(index, len));
        }
        self.slots[index]
            .as_mut()
            .ok_or(Error::out_of_bounds(index, len))
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Appends `item`, growing if full.
    #[inline]
    pub fn push(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
    }

    /// Inserts `item` at `index`, shifting later elements right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index > len`.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(Error::out_of_bounds(index, self.len));
        }
        if self.len == self.capacity() {
            self.grow();
        }

        // Slot `len` is empty; rotating it down to `index` opens the gap.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::out_of_bounds(index, self.len));
        }

        let removed = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        removed.ok_or(Error::out_of_bounds(index, self.len + 1))
    }

    /// Returns an iterator over the stored elements.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }
}

impl<T: PartialEq> Array<T> {
    /// Returns the first element equal to `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches.
    pub fn find(&self, key: &T) -> Result<&T> {
        self.iter().find(|value| *value == key).ok_or(Error::NotFound)
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ops::Index<usize> for Array<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> ops::IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = Self::with_capacity(iter.size_hint().0.max(1));
        for item in iter {
            arr.push(item);
        }
        arr
    }
}

impl<T: PartialEq> Linear<T> for Array<T> {
    type Query = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.push(item);
    }

    /// Removes the last element.
    fn remove(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("array"));
        }
        self.remove_at(self.len - 1)
    }

    #[inline]
    fn find(&self, key: &T) -> Result<&T> {
        Array::find(self, key)
    }
}
