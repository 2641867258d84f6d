use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivenessSnapshot {
    pub observations_seen: u64,
    pub live_seen: u64,
    pub dead_seen: u64,
    pub live_fraction: f64,
    pub seconds: f64,
}

impl Display for LivenessSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, live={}, dead={}, frac={:.6}, t={:.3}s",
            self.observations_seen, self.live_seen, self.dead_seen, self.live_fraction, self.seconds
        )
    }
}
