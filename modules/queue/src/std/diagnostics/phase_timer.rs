extern crate std;

use core::time::Duration;
use std::time::Instant;

use tracing::{Level, event};

use crate::std::diagnostics::DIAGNOSTICS_TARGET;

/// Brackets a phase of queue use with start/stop events.
///
/// `start` captures the wall clock and emits the opening event; `finish`
/// emits the closing event carrying the elapsed time in microseconds.
pub struct PhaseTimer {
  label:      &'static str,
  started_at: Instant,
}

impl PhaseTimer {
  /// Starts timing the named phase and emits its opening event.
  #[must_use]
  pub fn start(label: &'static str) -> Self {
    event!(target: DIAGNOSTICS_TARGET, Level::INFO, phase = label, "start");
    Self { label, started_at: Instant::now() }
  }

  /// Phase name supplied at start.
  #[must_use]
  pub const fn label(&self) -> &'static str {
    self.label
  }

  /// Stops the timer, emits the closing event, and returns the elapsed time.
  pub fn finish(self) -> Duration {
    let elapsed = self.started_at.elapsed();
    event!(
      target: DIAGNOSTICS_TARGET,
      Level::INFO,
      phase = self.label,
      elapsed_micros = duration_to_micros(elapsed),
      "stop"
    );
    elapsed
  }
}

fn duration_to_micros(duration: Duration) -> u64 {
  let micros = duration.as_micros();
  if micros > u64::MAX as u128 { u64::MAX } else { micros as u64 }
}
