
use core::fmt;

/// Immutable snapshot of the queue's position and capacity counters.
///
/// The snapshot is detached from the queue: external code can read every
/// counter without an accessor call, and no write to it can violate the
/// queue's `head <= tail <= capacity` invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
  /// Total slot count of the backing buffer.
  pub capacity:    usize,
  /// Index of the next slot to dequeue.
  pub head:        usize,
  /// Index of the next free slot for insertion.
  pub tail:        usize,
  /// Slots added per grow cycle.
  pub growth_step: usize,
}

impl QueueStats {
  /// Number of live items, derived from the cursors.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.tail - self.head
  }

  /// Indicates whether the queue held no live items when captured.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.head == self.tail
  }
}

impl fmt::Display for QueueStats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "capacity: {}, grow_by: {}, head: {}, tail: {}, length: {}",
      self.capacity,
      self.growth_step,
      self.head,
      self.tail,
      self.len()
    )
  }
}
