//! Pending-event bookkeeping for the discrete-event simulations.
//!
//! [`FutureEventSet`] is a min-heap over event times with FIFO tie-breaks,
//! plus the departure-rescaling operation processor sharing needs when the
//! number of customers in service changes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A customer tracked through the queueing system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Customer {
    /// Identifier assigned in arrival order.
    pub id: u64,
    /// Time the customer joined the system.
    pub arrival_time: f64,
}

/// What happens when a scheduled event fires.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EventKind {
    /// A new customer joins the system.
    Arrival,
    /// The given customer completes service and leaves.
    Departure(Customer),
}

/// A scheduled simulation event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    /// Scheduled occurrence time.
    pub time: f64,
    /// What fires at `time`.
    pub kind: EventKind,
}

/// Heap entry wrapping an event with its scheduling sequence number.
///
/// Ordering is reversed so the `BinaryHeap` max-heap pops the earliest
/// time first; equal times pop in scheduling order.
#[derive(Clone, Debug)]
struct HeapEntry {
    seq: u64,
    event: Event,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .event
            .time
            .total_cmp(&self.event.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Time-ordered set of pending events.
///
/// # Examples
///
/// ```rust
/// use stochsim_queueing::event::{Event, EventKind, FutureEventSet};
///
/// let mut fes = FutureEventSet::new();
/// fes.schedule(Event { time: 2.0, kind: EventKind::Arrival });
/// fes.schedule(Event { time: 0.5, kind: EventKind::Arrival });
///
/// assert_eq!(fes.peek_time(), Some(0.5));
/// assert_eq!(fes.pop_next().unwrap().time, 0.5);
/// assert_eq!(fes.pop_next().unwrap().time, 2.0);
/// assert!(fes.pop_next().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FutureEventSet {
    heap: BinaryHeap<HeapEntry>,
    next_seq: u64,
}

impl FutureEventSet {
    /// Creates an empty event set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an event.
    ///
    /// Events sharing the same time fire in scheduling order.
    pub fn schedule(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry { seq, event });
    }

    /// Removes and returns the earliest pending event.
    pub fn pop_next(&mut self) -> Option<Event> {
        self.heap.pop().map(|entry| entry.event)
    }

    /// The time of the earliest pending event, if any.
    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.event.time)
    }

    /// Number of pending events.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no event is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Re-times every pending departure after a service-speed change.
    ///
    /// Under processor sharing each customer receives `1/n` of the server,
    /// so when the customer count moves from `old_count` to `new_count`
    /// every remaining service stretches by `new_count / old_count`:
    /// each pending departure moves to
    /// `now + (time − now) · new_count / old_count`. Arrivals are left
    /// untouched. A remaining time below zero is clamped to zero before
    /// scaling.
    ///
    /// No-op when either count is zero or the counts are equal.
    pub fn rescale_departures(&mut self, now: f64, old_count: usize, new_count: usize) {
        if old_count == 0 || new_count == 0 || old_count == new_count {
            return;
        }
        let factor = new_count as f64 / old_count as f64;

        let mut entries: Vec<HeapEntry> = self.heap.drain().collect();
        for entry in &mut entries {
            if matches!(entry.event.kind, EventKind::Departure(_)) {
                let remaining = (entry.event.time - now).max(0.0);
                entry.event.time = now + remaining * factor;
            }
        }
        self.heap.extend(entries);
    }
}
