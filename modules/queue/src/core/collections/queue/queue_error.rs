
/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// Storage could not be grown to admit the element. Contains the element
  /// whose enqueue was rejected; the queue itself is left untouched.
  AllocError(T),
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on
  /// failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::AllocError(item) => Some(item),
    }
  }
}
