#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

//! Sliding-window FIFO queue with additive growth and explicit compaction.
//!
//! The queue tracks logical position with monotonically increasing head/tail
//! cursors instead of modular arithmetic: the buffer only ever grows at the
//! tail, and space vacated by dequeues is reclaimed by an explicit shrink
//! rather than reused in place. The core is `no_std + alloc`; the `std`
//! feature adds the bulk loader and the `tracing`-backed diagnostics sink.

extern crate alloc;

/// Queue primitives available without the standard library.
pub mod core;
/// Collaborators that require the standard library.
#[cfg(feature = "std")]
pub mod std;
