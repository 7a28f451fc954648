
use alloc::collections::TryReserveError;

use crate::core::collections::queue::{GrowthPolicy, OfferOutcome, QueueConfigError, QueueError, QueueStats, SlotStorage};

/// Array-backed FIFO with monotonic head/tail cursors and amortized growth.
///
/// The cursors are never wrapped: the buffer behaves as a sliding window that
/// only grows at the tail, and slots vacated at the head stay allocated until
/// an explicit [`shrink`](Self::shrink) compacts them away. Growth and shrink
/// replace the backing block internally; the queue handle itself never
/// changes identity, and dropping the queue releases the storage.
pub struct DynamicQueue<T> {
  storage: SlotStorage<T>,
  head:    usize,
  tail:    usize,
  policy:  GrowthPolicy,
}

impl<T> DynamicQueue<T> {
  /// Creates a queue with `initial_capacity` slots and the given growth
  /// discipline.
  ///
  /// # Errors
  ///
  /// Returns a `QueueConfigError` when `initial_capacity` is zero or the
  /// policy's step is zero; no partial queue is constructed.
  pub fn new(initial_capacity: usize, policy: GrowthPolicy) -> Result<Self, QueueConfigError> {
    if initial_capacity == 0 {
      return Err(QueueConfigError::ZeroCapacity);
    }
    if policy.step() == 0 {
      return Err(QueueConfigError::ZeroGrowthStep);
    }
    Ok(Self { storage: SlotStorage::with_capacity(initial_capacity), head: 0, tail: 0, policy })
  }

  /// Creates a queue using the fixed-delta growth discipline.
  ///
  /// # Errors
  ///
  /// See [`new`](Self::new).
  pub fn with_grow_by(initial_capacity: usize, grow_by: usize) -> Result<Self, QueueConfigError> {
    Self::new(initial_capacity, GrowthPolicy::GrowBy(grow_by))
  }

  /// Creates a queue using the increment-count growth discipline.
  ///
  /// # Errors
  ///
  /// See [`new`](Self::new).
  pub fn with_increments(initial_capacity: usize, increments: usize) -> Result<Self, QueueConfigError> {
    Self::new(initial_capacity, GrowthPolicy::Increments(increments))
  }

  /// Appends an element at the tail, growing the buffer when it is exhausted.
  ///
  /// A grow cycle relocates the live region to the front of a block of
  /// `capacity + step` slots, so `head` resets to zero whenever growth runs.
  ///
  /// # Errors
  ///
  /// Returns `QueueError::AllocError` carrying the element back when the new
  /// block cannot be reserved; the queue is left untouched.
  pub fn enqueue(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    if self.tail == self.storage.capacity() {
      let new_capacity = self.policy.next_capacity(self.storage.capacity());
      if self.storage.relocate(self.head, self.tail, new_capacity).is_err() {
        return Err(QueueError::AllocError(item));
      }
      self.tail -= self.head;
      self.head = 0;
      self.storage.put(self.tail, item);
      self.tail += 1;
      return Ok(OfferOutcome::GrewTo { capacity: new_capacity });
    }
    self.storage.put(self.tail, item);
    self.tail += 1;
    Ok(OfferOutcome::Enqueued)
  }

  /// Removes and returns the element at the head, or `None` when the queue is
  /// empty.
  ///
  /// Never shrinks or reallocates; the vacated slot stays allocated until a
  /// [`shrink`](Self::shrink).
  pub fn dequeue(&mut self) -> Option<T> {
    if self.head == self.tail {
      return None;
    }
    let item = self.storage.take(self.head);
    debug_assert!(item.is_some());
    self.head += 1;
    item
  }

  /// Borrows the element at the head without removing it, or `None` when the
  /// queue is empty. Repeated peeks are idempotent.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    if self.head == self.tail {
      return None;
    }
    self.storage.get(self.head)
  }

  /// Compacts the live region to the front of a block sized to the current
  /// length plus one growth step, resetting `head` to zero. An empty queue
  /// shrinks to exactly one growth step of slots.
  ///
  /// Returns the new capacity.
  ///
  /// # Errors
  ///
  /// Returns a `TryReserveError` when the smaller block cannot be reserved;
  /// the queue is left untouched.
  pub fn shrink(&mut self) -> Result<usize, TryReserveError> {
    let len = self.len();
    let new_capacity = len.saturating_add(self.policy.step());
    self.storage.relocate(self.head, self.tail, new_capacity)?;
    self.head = 0;
    self.tail = len;
    Ok(new_capacity)
  }

  /// Number of live items, derived from the cursors.
  #[must_use]
  pub fn len(&self) -> usize {
    self.tail - self.head
  }

  /// Indicates whether the queue holds no live items.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.head == self.tail
  }

  /// Total slot count of the backing buffer.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Index of the next slot to dequeue.
  #[must_use]
  pub const fn head(&self) -> usize {
    self.head
  }

  /// Index of the next free slot for insertion.
  #[must_use]
  pub const fn tail(&self) -> usize {
    self.tail
  }

  /// The configured growth discipline.
  #[must_use]
  pub const fn growth_policy(&self) -> GrowthPolicy {
    self.policy
  }

  /// Captures a detached snapshot of the position and capacity counters.
  #[must_use]
  pub fn stats(&self) -> QueueStats {
    QueueStats {
      capacity:    self.storage.capacity(),
      head:        self.head,
      tail:        self.tail,
      growth_step: self.policy.step(),
    }
  }
}
