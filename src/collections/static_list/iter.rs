//! Bounded chain iterators.
//!
//! Every walk is capped by the number of slots the chain is supposed to hold.
//! Reaching the cap without hitting the terminator, or hitting the terminator
//! early, means a prior operation broke the partition; debug builds assert on
//! it.

use core::iter::FusedIterator;

use super::invariants::chain_assert;
use super::link::Link;
use super::slot::Slot;

/// Walks raw slot indices along one chain.
pub(crate) struct LinkWalk<'a, T> {
    slots: &'a [Slot<T>],
    current: Link,
    remaining: usize,
}

impl<T> Clone for LinkWalk<'_, T> {
    fn clone(&self) -> Self {
        Self { slots: self.slots, current: self.current, remaining: self.remaining }
    }
}

impl<'a, T> LinkWalk<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], start: Link, bound: usize) -> Self {
        Self { slots, current: start, remaining: bound }
    }
}

impl<'a, T> Iterator for LinkWalk<'a, T> {
    type Item = (usize, &'a Slot<T>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            chain_assert(self.current.is_none(), "chain longer than its recorded length");
            return None;
        }
        let Some(index) = self.current.get() else {
            chain_assert(false, "chain shorter than its recorded length");
            self.remaining = 0;
            return None;
        };
        let slot = self.slots.get(index)?;
        self.current = slot.next;
        self.remaining -= 1;
        Some((index, slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Borrowing iterator over values in chain order, most recent insert first.
///
/// Created by [`StaticLinkedList::iter`](super::StaticLinkedList::iter).
pub struct Iter<'a, T> {
    walk: LinkWalk<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { walk: self.walk.clone() }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(walk: LinkWalk<'a, T>) -> Self {
        Self { walk }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let (_, slot) = self.walk.next()?;
        chain_assert(slot.data.is_some(), "vacant slot on the data chain");
        slot.data.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining, Some(self.walk.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over free slot indices, front of the free chain first.
///
/// Created by [`StaticLinkedList::free_slots`](super::StaticLinkedList::free_slots).
/// The next insert at head will take the first index this yields.
pub struct FreeSlots<'a, T> {
    walk: LinkWalk<'a, T>,
}

impl<T> Clone for FreeSlots<'_, T> {
    fn clone(&self) -> Self {
        Self { walk: self.walk.clone() }
    }
}

impl<'a, T> FreeSlots<'a, T> {
    pub(crate) fn new(walk: LinkWalk<'a, T>) -> Self {
        Self { walk }
    }
}

impl<T> Iterator for FreeSlots<'_, T> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let (index, slot) = self.walk.next()?;
        chain_assert(slot.data.is_none(), "occupied slot on the free chain");
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining, Some(self.walk.remaining))
    }
}

impl<T> ExactSizeIterator for FreeSlots<'_, T> {}
impl<T> FusedIterator for FreeSlots<'_, T> {}
