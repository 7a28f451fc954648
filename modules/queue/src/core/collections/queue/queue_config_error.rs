
use core::fmt;

/// Errors rejected synchronously at queue construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueConfigError {
  /// The initial capacity must be at least one slot.
  ZeroCapacity,
  /// The growth step must be at least one slot, otherwise growth is
  /// impossible.
  ZeroGrowthStep,
}

impl fmt::Display for QueueConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueConfigError::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
      | QueueConfigError::ZeroGrowthStep => write!(f, "growth step must be at least 1"),
    }
  }
}

impl core::error::Error for QueueConfigError {}
