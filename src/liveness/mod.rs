mod decaying_tracker;
mod error;
mod node_liveness_tracker;
mod tracker;

pub use decaying_tracker::{DEFAULT_RETENTION, DecayingLivenessTracker};
pub use error::LivenessError;
pub use node_liveness_tracker::NodeLivenessTracker;
pub use tracker::LivenessTracker;
