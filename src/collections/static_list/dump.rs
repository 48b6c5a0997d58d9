//! Per-slot structure dumps and usage reports for inspection and debugging.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::link::Link;
use super::slot::Slot;

/// Which chain a slot was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    /// Reachable from `head`.
    Data,
    /// Reachable from `free_head`.
    Free,
    /// Reachable from neither. Never produced by a consistent list.
    Unlinked,
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            SlotRole::Data => "data",
            SlotRole::Free => "free",
            SlotRole::Unlinked => "unlinked",
        })
    }
}

/// One row of a [`StructureDump`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReport<T> {
    /// Physical index in the backing array.
    pub index: usize,
    /// Owning chain.
    pub role: SlotRole,
    /// Stored value.
    pub data: Option<T>,
    /// Next slot in the owning chain.
    pub next: Option<usize>,
}

/// Snapshot of the whole backing array, cursors included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDump<T> {
    /// First slot of the data chain.
    pub head: Option<usize>,
    /// First slot of the free chain.
    pub free_head: Option<usize>,
    /// Number of stored values.
    pub len: usize,
    /// Number of slots.
    pub capacity: usize,
    /// Every slot in index order.
    pub slots: Vec<SlotReport<T>>,
}

impl<T> StructureDump<T> {
    /// Returns the role of every slot in index order.
    pub fn roles(&self) -> impl Iterator<Item = SlotRole> + '_ {
        self.slots.iter().map(|report| report.role)
    }

    /// Counts slots with the given role.
    pub fn count(&self, role: SlotRole) -> usize {
        self.roles().filter(|r| *r == role).count()
    }
}

/// Slot usage at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utilization {
    /// Slots on the data chain.
    pub len: usize,
    /// Slots on the free chain.
    pub free: usize,
    /// Total slots.
    pub capacity: usize,
}

impl Utilization {
    /// Fraction of slots in use, in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }
}

impl fmt::Display for Utilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} slots in use ({:.1}%), {} free",
            self.len,
            self.capacity,
            self.ratio() * 100.0,
            self.free
        )
    }
}

/// Builds a dump. Walks tolerate corruption: a walk stops at the terminator,
/// an out-of-range link, or the first already-classified slot.
pub(crate) fn capture<T: Clone>(
    slots: &[Slot<T>],
    head: Link,
    free_head: Link,
    len: usize,
) -> StructureDump<T> {
    let mut roles = vec![SlotRole::Unlinked; slots.len()];
    mark(slots, head, SlotRole::Data, &mut roles);
    mark(slots, free_head, SlotRole::Free, &mut roles);

    let reports = slots
        .iter()
        .zip(roles)
        .enumerate()
        .map(|(index, (slot, role))| SlotReport {
            index,
            role,
            data: slot.data.clone(),
            next: slot.next.get(),
        })
        .collect();

    StructureDump {
        head: head.get(),
        free_head: free_head.get(),
        len,
        capacity: slots.len(),
        slots: reports,
    }
}

fn mark<T>(slots: &[Slot<T>], start: Link, role: SlotRole, roles: &mut [SlotRole]) {
    let mut current = start;
    while let Some(index) = current.get() {
        match roles.get_mut(index) {
            Some(entry) if *entry == SlotRole::Unlinked => *entry = role,
            _ => break,
        }
        current = slots[index].next;
    }
}

fn fmt_link(link: Option<usize>) -> String {
    link.map_or_else(|| "end".to_string(), |index| index.to_string())
}

impl<T: fmt::Debug> fmt::Display for StructureDump<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "head: {}  free_head: {}  len: {}/{}",
            fmt_link(self.head),
            fmt_link(self.free_head),
            self.len,
            self.capacity
        )?;
        writeln!(f, "{:>5}  {:<8}  {:>4}  data", "slot", "role", "next")?;
        for report in &self.slots {
            let data = match &report.data {
                Some(value) => format!("{value:?}"),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:>5}  {:<8}  {:>4}  {}",
                report.index,
                report.role,
                fmt_link(report.next),
                data
            )?;
        }
        Ok(())
    }
}
