//! Array-backed FIFO with monotonic cursors, amortized growth, and on-demand
//! compaction.

mod dynamic_queue;
mod growth_policy;
mod offer_outcome;
mod queue_config_error;
mod queue_error;
mod queue_stats;
mod slot_storage;

pub use dynamic_queue::DynamicQueue;
pub use growth_policy::GrowthPolicy;
pub use offer_outcome::OfferOutcome;
pub use queue_config_error::QueueConfigError;
pub use queue_error::QueueError;
pub use queue_stats::QueueStats;
pub use slot_storage::SlotStorage;
