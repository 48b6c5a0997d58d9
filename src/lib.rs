//! # `static-chain` - Fixed-Capacity Index-Linked Lists
//!
//! A linked list that never allocates after construction. All nodes live in a
//! single pre-allocated slot array and link to each other by index, so the
//! list behaves like a classic singly linked list while keeping its storage
//! contiguous and bounded.
//!
//! ## Design
//!
//! One array carries two logically independent chains:
//!
//! 1. **Data chain** (`head`): slots holding live values, most recent insert
//!    first.
//! 2. **Free chain** (`free_head`): every other slot, ready for reuse.
//!
//! Inserting at the head pops the front of the free chain and pushes it onto
//! the data chain; deleting does the reverse. Both are `O(1)`. Search,
//! positional access and traversal walk the data chain in `O(len)`.
//!
//! ### Guarantees
//! - **Partition**: every slot is on exactly one chain at all times.
//! - **No-op failures**: a full insert or an empty delete changes nothing.
//! - **Bounded walks**: iteration never visits more than `len` slots; a chain
//!   that disagrees with `len` trips a debug assertion.
//! - **Inspectable**: [`StaticLinkedList::dump_structure`] and
//!   [`StaticLinkedList::validate`] expose the slot layout for tests and
//!   debugging. Nothing in the core prints.
//!
//! ## Example
//!
//! ```rust
//! use static_chain::{InsertError, StaticLinkedList};
//!
//! let mut list = StaticLinkedList::new(2).unwrap();
//! list.insert_at_head(1).unwrap();
//! list.insert_at_head(2).unwrap();
//!
//! // Out of slots: the value comes back and the list is untouched.
//! assert_eq!(list.insert_at_head(3), Err(InsertError::Full(3)));
//!
//! assert_eq!(list.delete_at_head(), Some(2));
//! assert_eq!(list.free_head_slot(), Some(1));
//! assert!(list.validate().is_ok());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace`-level events for every slot that changes chain.
//! - `demo`: build the `catalog` demo binary.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;

pub use collections::static_list::{
    ChainKind, FreeSlots, InsertError, InvariantViolation, Iter, SlotReport, SlotRole, SlotView,
    StaticLinkedList, StaticListError, StructureDump, Utilization, MAX_CAPACITY,
};

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // Boxed slot slice, two `u32` cursors and the length.
    assert!(
        mem::size_of::<StaticLinkedList<u64>>()
            <= mem::size_of::<usize>() * 3 + mem::size_of::<u64>()
    );
};
