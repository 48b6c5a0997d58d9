//! Structural invariant checks.
//!
//! `validate` performs the full partition check on demand. The debug-only
//! assertion helper backs the bounded walks in the iterators so a corrupted
//! chain fails loudly in tests instead of being silently truncated.

use super::error::{ChainKind, InvariantViolation};
use super::link::Link;
use super::slot::Slot;

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn chain_assert(condition: bool, message: &str) {
    debug_assert!(condition, "static list invariant violated: {}", message);
}

/// Checks every structural invariant in `O(capacity)`.
///
/// The data chain must visit exactly `len` occupied slots, the free chain the
/// remaining vacant ones, and together they must cover the array once.
pub(crate) fn validate<T>(
    slots: &[Slot<T>],
    head: Link,
    free_head: Link,
    len: usize,
) -> Result<(), InvariantViolation> {
    let capacity = slots.len();
    let mut owner: Vec<Option<ChainKind>> = vec![None; capacity];

    let walked = mark_chain(slots, head, ChainKind::Data, &mut owner)?;
    if walked != len {
        return Err(InvariantViolation::LengthMismatch { expected: len, walked });
    }
    mark_chain(slots, free_head, ChainKind::Free, &mut owner)?;

    match owner.iter().position(Option::is_none) {
        Some(slot) => Err(InvariantViolation::Orphan { slot }),
        None => Ok(()),
    }
}

/// Walks one chain, recording ownership. Returns the number of slots visited.
fn mark_chain<T>(
    slots: &[Slot<T>],
    start: Link,
    chain: ChainKind,
    owner: &mut [Option<ChainKind>],
) -> Result<usize, InvariantViolation> {
    let capacity = slots.len();
    let mut from = capacity;
    let mut current = start;
    let mut visited = 0;

    while let Some(slot) = current.get() {
        if slot >= capacity {
            return Err(InvariantViolation::LinkOutOfRange { slot: from, next: slot, capacity });
        }
        match owner[slot] {
            Some(seen) if seen == chain => return Err(InvariantViolation::Cycle { chain, slot }),
            Some(_) => return Err(InvariantViolation::Overlap { slot }),
            None => owner[slot] = Some(chain),
        }

        let occupied = slots[slot].data.is_some();
        if occupied != (chain == ChainKind::Data) {
            return Err(InvariantViolation::PayloadMismatch { slot, chain });
        }

        visited += 1;
        from = slot;
        current = slots[slot].next;
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threaded(capacity: usize) -> Vec<Slot<u32>> {
        (0..capacity)
            .map(|i| Slot::vacant(if i + 1 < capacity { Link::to(i + 1) } else { Link::NONE }))
            .collect()
    }

    #[test]
    fn test_fresh_layout_is_valid() {
        let slots = threaded(4);
        assert_eq!(validate(&slots, Link::NONE, Link::to(0), 0), Ok(()));
    }

    #[test]
    fn test_detects_cycle() {
        let mut slots = threaded(4);
        slots[3].next = Link::to(1);
        assert_eq!(
            validate(&slots, Link::NONE, Link::to(0), 0),
            Err(InvariantViolation::Cycle { chain: ChainKind::Free, slot: 1 })
        );
    }

    #[test]
    fn test_detects_orphan() {
        let mut slots = threaded(4);
        slots[2].next = Link::NONE;
        assert_eq!(
            validate(&slots, Link::NONE, Link::to(0), 0),
            Err(InvariantViolation::Orphan { slot: 3 })
        );
    }

    #[test]
    fn test_detects_overlap_and_payload() {
        let mut slots = threaded(3);
        slots[0] = Slot { data: Some(7), next: Link::NONE };
        // Slot 0 heads the data chain and is also reachable from the free head.
        assert_eq!(
            validate(&slots, Link::to(0), Link::to(0), 1),
            Err(InvariantViolation::Overlap { slot: 0 })
        );

        let slots = threaded(3);
        assert_eq!(
            validate(&slots, Link::to(0), Link::NONE, 1),
            Err(InvariantViolation::PayloadMismatch { slot: 0, chain: ChainKind::Data })
        );
    }

    #[test]
    fn test_detects_length_mismatch_and_bad_link() {
        let mut slots = threaded(3);
        slots[0] = Slot { data: Some(1), next: Link::NONE };
        assert_eq!(
            validate(&slots, Link::to(0), Link::to(1), 2),
            Err(InvariantViolation::LengthMismatch { expected: 2, walked: 1 })
        );

        let slots = threaded(3);
        assert_eq!(
            validate(&slots, Link::NONE, Link::to(5), 0),
            Err(InvariantViolation::LinkOutOfRange { slot: 3, next: 5, capacity: 3 })
        );
    }
}
