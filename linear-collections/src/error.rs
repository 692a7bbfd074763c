//! Error type shared by every structure in the crate.

/// Failure of a linear-structure operation.
///
/// Every variant is local and recoverable: the structure is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Removal or access on an empty structure.
    #[error("{structure} underflow")]
    Underflow {
        /// Name of the structure that was empty (`"stack"`, `"queue"`, ...).
        structure: &'static str,
    },

    /// A position outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The rejected position.
        index: usize,
        /// Length of the structure at the time of the call.
        len: usize,
    },

    /// Arguments that are individually plausible but not accepted together.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the arguments.
        reason: &'static str,
    },

    /// A keyed search found no matching item.
    #[error("key not found")]
    NotFound,
}

impl Error {
    #[inline]
    pub(crate) const fn underflow(structure: &'static str) -> Self {
        Self::Underflow { structure }
    }

    #[inline]
    pub(crate) const fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

/// Result alias for fallible collection operations.
pub type Result<T> = core::result::Result<T, Error>;
