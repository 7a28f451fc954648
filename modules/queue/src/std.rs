/// Timing and counter events for bracketing phases of queue use.
pub mod diagnostics;
/// Bulk loading of delimiter-separated items from an external source.
pub mod loader;
