//! Sentinel-encoded links between arena slots.
//!
//! Doubly-linked nodes refer to their neighbours by slab slot rather than by
//! pointer. A reserved sentinel (`MAX`) stands in for "no neighbour", so a
//! node carries two plain integers instead of two `Option`s.

/// A copyable slot reference with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use linear_collections::Link;
///
/// let link: u32 = 5;
/// let none: u32 = u32::NONE;
///
/// assert!(link.is_some());
/// assert!(none.is_none());
/// assert_eq!(link.slot(), 5);
/// ```
pub trait Link: Copy + Eq {
    /// Sentinel value representing "no neighbour".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the arena slot this link points at.
    fn slot(self) -> usize;

    /// Builds a link from an arena slot.
    ///
    /// Callers must check [`Link::fits`] first; out-of-range slots truncate.
    fn from_slot(slot: usize) -> Self;

    /// Returns `true` if `slot` can be encoded without colliding with the
    /// sentinel.
    #[inline]
    fn fits(slot: usize) -> bool {
        slot < Self::NONE.slot()
    }
}

macro_rules! impl_link_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Link for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn slot(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_slot(slot: usize) -> Self {
                    slot as Self
                }
            }
        )*
    };
}

impl_link_for_unsigned!(u16, u32, usize);
