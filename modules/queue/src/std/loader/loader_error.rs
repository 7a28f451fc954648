
extern crate std;

use core::fmt;
use std::io;

/// Errors raised while acquiring a word source.
#[derive(Debug)]
pub enum LoaderError {
  /// Reading the source from disk failed.
  Io(io::Error),
}

impl fmt::Display for LoaderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | LoaderError::Io(err) => write!(f, "failed to read word source: {}", err),
    }
  }
}

impl std::error::Error for LoaderError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      | LoaderError::Io(err) => Some(err),
    }
  }
}

impl From<io::Error> for LoaderError {
  fn from(err: io::Error) -> Self {
    LoaderError::Io(err)
  }
}
