pub mod spy_tracker;
pub mod tape_source;

pub use spy_tracker::{SpyTracker, SpyTrackerHandle};
pub use tape_source::TapeSource;
