/// FIFO queue over a resizable slot block.
pub mod queue;

pub use queue::{DynamicQueue, GrowthPolicy, OfferOutcome, QueueConfigError, QueueError, QueueStats, SlotStorage};
