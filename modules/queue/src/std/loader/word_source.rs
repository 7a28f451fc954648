
extern crate std;

use std::{fs, path::Path, string::String};

use crate::{
  core::collections::queue::{DynamicQueue, QueueError},
  std::loader::LoaderError,
};

/// Owns the text buffer a bulk load splits into queue items.
///
/// Items handed to the queue are `&str` slices borrowing from this source, so
/// the source must outlive the queue it populates; the queue never copies
/// item contents.
#[derive(Debug)]
pub struct WordSource {
  buffer: String,
}

impl WordSource {
  /// Reads an entire file into the backing buffer.
  ///
  /// # Errors
  ///
  /// Returns a `LoaderError` when the file cannot be read.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
    let buffer = fs::read_to_string(path)?;
    Ok(Self { buffer })
  }

  /// Wraps an already loaded buffer.
  #[must_use]
  pub fn from_string(buffer: String) -> Self {
    Self { buffer }
  }

  /// Borrows the backing buffer.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.buffer
  }

  /// Splits the buffer on newlines and enqueues every token in order,
  /// returning the number of items loaded. Empty tokens are skipped, so
  /// consecutive delimiters and a trailing newline load nothing.
  ///
  /// # Errors
  ///
  /// Returns the queue's `QueueError` when a grow cycle cannot reserve
  /// storage; items enqueued before the failure stay in the queue.
  pub fn load_into<'a>(&'a self, queue: &mut DynamicQueue<&'a str>) -> Result<usize, QueueError<&'a str>> {
    let mut loaded = 0usize;
    for word in self.buffer.split('\n').filter(|word| !word.is_empty()) {
      queue.enqueue(word)?;
      loaded += 1;
    }
    Ok(loaded)
  }
}
