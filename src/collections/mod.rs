//! Fixed-capacity collections.
//!
//! - `static_list`: singly linked list threaded through one pre-allocated
//!   slot array, with its free list in the same array.

pub mod static_list;

pub use static_list::StaticLinkedList;
