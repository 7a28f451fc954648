//! Reads a whole item source into memory and feeds it to a queue one token at
//! a time.

mod loader_error;
mod word_source;

pub use loader_error::LoaderError;
pub use word_source::WordSource;
