//! `tracing`-backed sink for phase timing and queue counters.
//!
//! The sink is a passive observer: it reads the queue's public counters and
//! never feeds back into queue behavior.

mod phase_timer;


use tracing::{Level, event};

pub use phase_timer::PhaseTimer;

use crate::core::collections::queue::QueueStats;

/// Target attached to every diagnostics event.
pub const DIAGNOSTICS_TARGET: &str = "dynaq::diagnostics";

/// Emits one event carrying the queue counters for the named phase.
pub fn record_stats(phase: &str, stats: &QueueStats) {
  event!(
    target: DIAGNOSTICS_TARGET,
    Level::INFO,
    phase = phase,
    capacity = stats.capacity as u64,
    grow_by = stats.growth_step as u64,
    head = stats.head as u64,
    tail = stats.tail as u64,
    length = stats.len() as u64,
    "queue stats"
  );
}
