//! Index links threaded through the slot array.
//!
//! A `Link` is a `u32` slot index with `u32::MAX` reserved as the chain
//! terminator. Keeping the sentinel in-band halves the per-slot link size
//! compared to `Option<usize>` and matches the free-list encoding used by the
//! other index-linked collections in this crate.

use core::fmt;

/// Largest number of slots a list can hold.
///
/// Every index in `0..MAX_CAPACITY` is representable; `u32::MAX` itself is the
/// terminator.
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// A slot index or the chain terminator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Link(u32);

impl Link {
    /// Marks the end of a chain.
    pub(crate) const NONE: Self = Self(u32::MAX);

    /// Wraps a slot index.
    ///
    /// Callers guarantee `index < MAX_CAPACITY`, which construction enforces
    /// for every index inside the slot array.
    #[inline(always)]
    pub(crate) const fn to(index: usize) -> Self {
        debug_assert!(index < MAX_CAPACITY);
        Self(index as u32)
    }

    /// Returns `true` if this is the terminator.
    #[inline(always)]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Returns the slot index, or `None` for the terminator.
    #[inline(always)]
    pub(crate) const fn get(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(index) => write!(f, "{index}"),
            None => f.write_str("NONE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_roundtrip() {
        assert_eq!(Link::to(0).get(), Some(0));
        assert_eq!(Link::to(41).get(), Some(41));
        assert_eq!(Link::NONE.get(), None);
        assert!(Link::NONE.is_none());
        assert!(!Link::to(MAX_CAPACITY - 1).is_none());
    }

    #[test]
    fn test_link_debug() {
        assert_eq!(format!("{:?}", Link::to(7)), "7");
        assert_eq!(format!("{:?}", Link::NONE), "NONE");
    }
}
