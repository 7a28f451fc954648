#[cfg(test)]
mod tests;

use alloc::{collections::TryReserveError, vec::Vec};

/// Owned contiguous slot block backing a [`crate::core::collections::queue::DynamicQueue`].
///
/// Every slot either holds one element or is empty; the block is kept at
/// length == capacity so cursor indices map directly onto slots. The storage
/// knows nothing about cursor ordering — the queue layer owns the
/// `head <= tail` discipline.
pub struct SlotStorage<T> {
  slots: Vec<Option<T>>,
}

impl<T> SlotStorage<T> {
  /// Creates a storage block of `capacity` empty slots.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    Self { slots }
  }

  /// Returns the total slot count.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Stores an element into the empty slot at `idx`.
  pub fn put(&mut self, idx: usize, value: T) {
    debug_assert!(self.slots[idx].is_none());
    self.slots[idx] = Some(value);
  }

  /// Removes and returns the element at `idx`, leaving the slot empty.
  pub fn take(&mut self, idx: usize) -> Option<T> {
    self.slots[idx].take()
  }

  /// Borrows the element at `idx` without removing it.
  #[must_use]
  pub fn get(&self, idx: usize) -> Option<&T> {
    self.slots[idx].as_ref()
  }

  /// Moves the live region `[head, tail)` to the front of a freshly reserved
  /// block of `new_capacity` slots, releasing the old block.
  ///
  /// Serves both grow and shrink cycles. The new block is reserved before any
  /// element moves, so a failed reservation leaves the old block untouched.
  ///
  /// # Errors
  ///
  /// Returns a `TryReserveError` when the allocator cannot supply the new
  /// block.
  pub fn relocate(&mut self, head: usize, tail: usize, new_capacity: usize) -> Result<(), TryReserveError> {
    debug_assert!(head <= tail && tail <= self.slots.len());
    debug_assert!(tail - head <= new_capacity);
    let mut next: Vec<Option<T>> = Vec::new();
    next.try_reserve_exact(new_capacity)?;
    next.extend(self.slots.drain(head..tail));
    next.resize_with(new_capacity, || None);
    self.slots = next;
    Ok(())
  }
}
