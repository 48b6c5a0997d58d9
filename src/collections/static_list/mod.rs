//! `StaticLinkedList` — a fixed-capacity singly linked list over one slot array.
//!
//! All slots are allocated once at construction. Two singly linked chains are
//! threaded through the same array by index:
//!
//! - the **data chain**, starting at `head`, holds live values with the most
//!   recent insert first;
//! - the **free chain**, starting at `free_head`, holds every other slot.
//!
//! Inserting moves the front slot of the free chain onto the data chain;
//! deleting moves it back. No slot is ever added to or removed from the array,
//! only its chain membership and payload change.
//!
//! # Invariants
//! - Every slot index belongs to exactly one chain.
//! - The data chain visits exactly `len` slots, all occupied; the free chain
//!   visits the remaining `capacity - len`, all vacant.
//! - Neither chain contains a cycle.
//!
//! Failed operations (full on insert, empty on delete) leave every field
//! untouched. [`StaticLinkedList::validate`] checks the invariants on demand.
//!
//! # Example
//!
//! ```rust
//! use static_chain::StaticLinkedList;
//!
//! let mut list = StaticLinkedList::new(8).unwrap();
//! for title in ["A", "B", "C"] {
//!     list.insert_at_head(title).unwrap();
//! }
//! assert_eq!(list.traverse(), ["C", "B", "A"]);
//! assert_eq!(list.search("B"), Some(1));
//! assert_eq!(list.delete_at_head(), Some("C"));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! Not synchronized. Wrap the list in a lock to share it across threads.

mod dump;
mod error;
mod invariants;
mod iter;
mod link;
mod slot;


use core::borrow::Borrow;
use core::fmt;

use invariants::chain_assert;
use link::Link;
use slot::Slot;

pub use dump::{SlotReport, SlotRole, StructureDump, Utilization};
pub use error::{ChainKind, InsertError, InvariantViolation, StaticListError};
pub use iter::{FreeSlots, Iter};
pub use link::MAX_CAPACITY;
pub use slot::SlotView;

const _: () = {
    use core::mem;

    // Links are a bare `u32`; the terminator lives in-band.
    assert!(mem::size_of::<Link>() == mem::size_of::<u32>());

    // A slot is its payload plus one link, with no extra tag.
    assert!(mem::size_of::<Slot<u32>>() == mem::size_of::<Option<u32>>() + mem::size_of::<u32>());
};

/// A fixed-capacity linked list backed by a single pre-allocated slot array.
#[derive(Clone)]
pub struct StaticLinkedList<T> {
    slots: Box<[Slot<T>]>,
    head: Link,
    free_head: Link,
    len: usize,
}

/// Link a fresh free chain uses at `index`: each slot points at its successor.
#[inline]
fn ascending(index: usize, capacity: usize) -> Link {
    if index + 1 < capacity {
        Link::to(index + 1)
    } else {
        Link::NONE
    }
}

impl<T> StaticLinkedList<T> {
    /// Creates an empty list with `capacity` slots.
    ///
    /// The free chain is threaded through every slot in ascending order, so the
    /// first insert lands in slot 0.
    ///
    /// # Errors
    /// Returns [`StaticListError::InvalidCapacity`] if `capacity` is zero or
    /// exceeds [`MAX_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self, StaticListError> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(StaticListError::InvalidCapacity {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }

        let slots = (0..capacity)
            .map(|index| Slot::vacant(ascending(index, capacity)))
            .collect();

        trace_event!(capacity, "static list created");

        Ok(Self {
            slots,
            head: Link::NONE,
            free_head: Link::to(0),
            len: 0,
        })
    }

    /// Returns the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the data chain is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if the free chain is exhausted.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_head.is_none()
    }

    /// Slot index at the front of the data chain.
    #[inline]
    pub fn head_slot(&self) -> Option<usize> {
        self.head.get()
    }

    /// Slot index at the front of the free chain. The next insert uses it.
    #[inline]
    pub fn free_head_slot(&self) -> Option<usize> {
        self.free_head.get()
    }

    /// Inserts `value` at the front of the list in `O(1)`.
    ///
    /// Returns the slot index that now holds the value.
    ///
    /// # Errors
    /// Returns [`InsertError::Full`] carrying `value` back if no free slot
    /// remains. The list is unchanged.
    pub fn insert_at_head(&mut self, value: T) -> Result<usize, InsertError<T>> {
        let Some(pos) = self.take_free() else {
            trace_event!(capacity = self.capacity(), "insert rejected: list full");
            return Err(InsertError::Full(value));
        };

        let slot = &mut self.slots[pos];
        slot.data = Some(value);
        slot.next = self.head;
        self.head = Link::to(pos);
        self.len += 1;

        trace_event!(slot = pos, len = self.len, "inserted at head");
        Ok(pos)
    }

    /// Inserts `value` so that it ends up at chain position `index`.
    ///
    /// `index == 0` is the same as [`insert_at_head`](Self::insert_at_head);
    /// `index == len` appends. Runs in `O(index)`.
    ///
    /// # Errors
    /// Returns [`InsertError::OutOfBounds`] if `index > len`, otherwise
    /// [`InsertError::Full`] if no free slot remains. Either way the value is
    /// handed back and the list is unchanged.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<usize, InsertError<T>> {
        if index > self.len {
            return Err(InsertError::OutOfBounds { index, len: self.len, value });
        }
        if index == 0 {
            return self.insert_at_head(value);
        }
        if self.is_full() {
            trace_event!(capacity = self.capacity(), "insert rejected: list full");
            return Err(InsertError::Full(value));
        }

        let Some(prev) = self.slot_at(index - 1) else {
            chain_assert(false, "data chain shorter than len");
            return Err(InsertError::OutOfBounds { index, len: self.len, value });
        };
        let Some(pos) = self.take_free() else {
            chain_assert(false, "free chain empty after fullness check");
            return Err(InsertError::Full(value));
        };

        let next = self.slots[prev].next;
        let slot = &mut self.slots[pos];
        slot.data = Some(value);
        slot.next = next;
        self.slots[prev].next = Link::to(pos);
        self.len += 1;

        trace_event!(slot = pos, position = index, len = self.len, "inserted");
        Ok(pos)
    }

    /// Removes and returns the value at the front of the list in `O(1)`.
    ///
    /// Returns `None` on an empty list, which is left unchanged. The freed slot
    /// becomes the front of the free chain.
    pub fn delete_at_head(&mut self) -> Option<T> {
        let pos = self.head.get()?;
        self.head = self.slots[pos].next;
        self.release(pos)
    }

    /// Removes the first value equal to `value` in chain order.
    ///
    /// Returns `None` if no value matches. Runs in `O(len)`.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut prev = Link::NONE;
        let mut current = self.head;

        for _ in 0..self.len {
            let pos = current.get()?;
            let slot = &self.slots[pos];
            let next = slot.next;

            if slot.data.as_ref().is_some_and(|data| Borrow::<Q>::borrow(data) == value) {
                match prev.get() {
                    Some(prev) => self.slots[prev].next = next,
                    None => self.head = next,
                }
                return self.release(pos);
            }

            prev = current;
            current = next;
        }
        None
    }

    /// Returns the chain position of the first value equal to `value`.
    ///
    /// Positions count from the head, starting at zero. Returns `None` if no
    /// value matches, including on an empty list.
    pub fn search<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter().position(|item| Borrow::<Q>::borrow(item) == value)
    }

    /// Returns `true` if some stored value equals `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.search(value).is_some()
    }

    /// Returns the value at chain position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the value at chain position `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let pos = self.slot_at(index)?;
        self.slots[pos].data.as_mut()
    }

    /// Returns the value at the head.
    pub fn front(&self) -> Option<&T> {
        let pos = self.head.get()?;
        self.slots[pos].data.as_ref()
    }

    /// Returns the value at the head mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let pos = self.head.get()?;
        self.slots[pos].data.as_mut()
    }

    /// Iterates over values in chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data_walk())
    }

    /// Applies `f` to every value in chain order.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut current = self.head;
        for _ in 0..self.len {
            let Some(pos) = current.get() else { break };
            let slot = &mut self.slots[pos];
            if let Some(data) = slot.data.as_mut() {
                f(data);
            }
            current = slot.next;
        }
    }

    /// Iterates over free slot indices, front of the free chain first.
    pub fn free_slots(&self) -> FreeSlots<'_, T> {
        FreeSlots::new(iter::LinkWalk::new(
            &self.slots,
            self.free_head,
            self.capacity() - self.len,
        ))
    }

    /// Returns a view of physical slot `index`, regardless of chain.
    pub fn slot(&self, index: usize) -> Option<SlotView<'_, T>> {
        self.slots.get(index).map(SlotView::of)
    }

    /// Drops every value and restores the freshly constructed layout.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = Slot::vacant(ascending(index, capacity));
        }
        self.head = Link::NONE;
        self.free_head = Link::to(0);
        self.len = 0;

        trace_event!(capacity, "static list cleared");
    }

    /// Reports slot usage.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            len: self.len,
            free: self.capacity() - self.len,
            capacity: self.capacity(),
        }
    }

    /// Checks every structural invariant.
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found. A list driven only
    /// through this API always validates.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        invariants::validate(&self.slots, self.head, self.free_head, self.len)
    }

    /// Detaches the front slot of the free chain and returns its index.
    ///
    /// The caller links the slot into the data chain and bumps `len`.
    #[inline]
    fn take_free(&mut self) -> Option<usize> {
        let pos = self.free_head.get()?;
        self.free_head = self.slots[pos].next;
        Some(pos)
    }

    /// Pushes an already unlinked data slot onto the free chain and takes its
    /// value.
    fn release(&mut self, pos: usize) -> Option<T> {
        let slot = &mut self.slots[pos];
        let value = slot.data.take();
        chain_assert(value.is_some(), "vacant slot on the data chain");
        slot.next = self.free_head;
        self.free_head = Link::to(pos);
        self.len -= 1;

        trace_event!(slot = pos, len = self.len, "slot returned to free chain");
        value
    }

    /// Slot index at chain position `index`.
    fn slot_at(&self, index: usize) -> Option<usize> {
        self.data_walk().nth(index).map(|(pos, _)| pos)
    }

    fn data_walk(&self) -> iter::LinkWalk<'_, T> {
        iter::LinkWalk::new(&self.slots, self.head, self.len)
    }
}

impl<T: Clone> StaticLinkedList<T> {
    /// Returns a fresh vector of the values in chain order.
    pub fn traverse(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Captures the role, payload and link of every slot.
    ///
    /// Each slot is classified by walking both chains, so a corrupted list
    /// shows which slots went missing instead of failing.
    pub fn dump_structure(&self) -> StructureDump<T> {
        dump::capture(&self.slots, self.head, self.free_head, self.len)
    }
}

impl<T: fmt::Debug> fmt::Debug for StaticLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two lists are equal when their chains hold equal values in the same order,
/// whatever slots those values occupy.
impl<T: PartialEq> PartialEq for StaticLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for StaticLinkedList<T> {}

impl<'a, T> IntoIterator for &'a StaticLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
