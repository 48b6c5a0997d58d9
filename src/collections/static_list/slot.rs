//! Physical slots of the backing array.

use super::link::Link;

/// One element of the backing array.
///
/// `data` is `Some` exactly while the slot sits on the data chain. `next`
/// points along whichever chain currently owns the slot.
#[derive(Clone)]
pub(crate) struct Slot<T> {
    pub(crate) data: Option<T>,
    pub(crate) next: Link,
}

impl<T> Slot<T> {
    /// A free slot pointing at `next`.
    #[inline]
    pub(crate) const fn vacant(next: Link) -> Self {
        Self { data: None, next }
    }
}

/// Read-only view of a single physical slot.
///
/// Returned by [`StaticLinkedList::slot`](super::StaticLinkedList::slot) for
/// inspection; it says nothing about which chain owns the slot. Use
/// [`StaticLinkedList::dump_structure`](super::StaticLinkedList::dump_structure)
/// for that.
#[derive(Debug, PartialEq, Eq)]
pub struct SlotView<'a, T> {
    /// Stored value, `None` for a free slot.
    pub data: Option<&'a T>,
    /// Next slot index in the owning chain, `None` at the end of a chain.
    pub next: Option<usize>,
}

impl<T> Clone for SlotView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotView<'_, T> {}

impl<'a, T> SlotView<'a, T> {
    pub(crate) fn of(slot: &'a Slot<T>) -> Self {
        Self {
            data: slot.data.as_ref(),
            next: slot.next.get(),
        }
    }
}
