mod stubs;

pub use stubs::{SpyTracker, SpyTrackerHandle, TapeSource};
