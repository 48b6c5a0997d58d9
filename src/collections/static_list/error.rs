//! Error values for `StaticLinkedList`.
//!
//! Only misuse and rejected inserts are errors. An empty list on delete and a
//! missing value on search are ordinary outcomes and come back as `None`.

use thiserror::Error;

/// Construction-time contract violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticListError {
    /// The requested slot count is zero or does not fit the link encoding.
    #[error("invalid capacity {requested}: expected 1..={max}")]
    InvalidCapacity {
        /// Capacity passed by the caller.
        requested: usize,
        /// Largest supported capacity.
        max: usize,
    },
}

/// A rejected insert. The value is handed back untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError<T> {
    /// The free chain is exhausted.
    #[error("static list is full")]
    Full(T),
    /// The requested chain position is past the end of the list.
    #[error("insert position {index} out of range 0..={len}")]
    OutOfBounds {
        /// Requested position.
        index: usize,
        /// List length at the time of the call.
        len: usize,
        /// The rejected value.
        value: T,
    },
}

impl<T> InsertError<T> {
    /// Recovers the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Full(value) | InsertError::OutOfBounds { value, .. } => value,
        }
    }

    /// Returns `true` for [`InsertError::Full`].
    pub fn is_full(&self) -> bool {
        matches!(self, InsertError::Full(_))
    }
}

/// Which of the two chains a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    /// Slots holding live values, reachable from `head`.
    Data,
    /// Unused slots, reachable from `free_head`.
    Free,
}

impl core::fmt::Display for ChainKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChainKind::Data => f.write_str("data"),
            ChainKind::Free => f.write_str("free"),
        }
    }
}

/// A broken structural invariant, reported by
/// [`StaticLinkedList::validate`](super::StaticLinkedList::validate).
///
/// None of these can arise through the public API; they exist so tests and
/// debugging sessions can name exactly what went wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Walking the data chain did not visit exactly `len` slots.
    #[error("data chain visits {walked} slots but len is {expected}")]
    LengthMismatch {
        /// Recorded element count.
        expected: usize,
        /// Slots actually reachable from `head`.
        walked: usize,
    },
    /// A chain revisits a slot.
    #[error("{chain} chain revisits slot {slot}")]
    Cycle {
        /// Chain containing the cycle.
        chain: ChainKind,
        /// First slot seen twice.
        slot: usize,
    },
    /// A slot is reachable from both chains.
    #[error("slot {slot} is on both the data and the free chain")]
    Overlap {
        /// Shared slot.
        slot: usize,
    },
    /// A slot is reachable from neither chain.
    #[error("slot {slot} is on neither chain")]
    Orphan {
        /// Unreachable slot.
        slot: usize,
    },
    /// A slot's payload disagrees with its chain membership.
    #[error("slot {slot} on the {chain} chain has the wrong payload state")]
    PayloadMismatch {
        /// Offending slot.
        slot: usize,
        /// Chain the slot belongs to.
        chain: ChainKind,
    },
    /// A link points outside the slot array.
    #[error("slot {slot} links to {next}, past capacity {capacity}")]
    LinkOutOfRange {
        /// Slot holding the bad link, or `capacity` for a bad chain head.
        slot: usize,
        /// The out-of-range target.
        next: usize,
        /// Number of slots.
        capacity: usize,
    },
}
