#[cfg(test)]
mod tests;

/// Discipline describing how many slots are added when the tail reaches the
/// end of the buffer.
///
/// Both variants are interpreted additively: a grow cycle always requests
/// `current_capacity + step` slots. `Increments` exists for callers that
/// configure growth as a per-reallocation increment count rather than a slot
/// delta; the arithmetic is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
  /// Adds exactly this many slots on each grow cycle.
  GrowBy(usize),
  /// Adds this many slots per grow cycle, configured as an increment count.
  Increments(usize),
}

impl GrowthPolicy {
  /// Returns the configured number of slots added per grow cycle.
  #[must_use]
  pub const fn step(&self) -> usize {
    match self {
      | Self::GrowBy(step) | Self::Increments(step) => *step,
    }
  }

  /// Computes the capacity a grow cycle requests from the current one.
  #[must_use]
  pub const fn next_capacity(&self, current: usize) -> usize {
    current.saturating_add(self.step())
  }

  /// Short label for diagnostics output.
  #[must_use]
  pub const fn label(&self) -> &'static str {
    match self {
      | Self::GrowBy(_) => "grow_by",
      | Self::Increments(_) => "increments",
    }
  }
}
