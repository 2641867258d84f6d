use crate::liveness::LivenessTracker;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
struct Counts {
    live: AtomicU64,
    dead: AtomicU64,
}

/// Tracker stub that only counts record calls, observable through the
/// paired [`SpyTrackerHandle`].
pub struct SpyTracker {
    counts: Arc<Counts>,
}

#[derive(Clone)]
pub struct SpyTrackerHandle {
    counts: Arc<Counts>,
}

impl SpyTracker {
    pub fn new() -> (Self, SpyTrackerHandle) {
        let counts = Arc::new(Counts::default());
        (
            Self {
                counts: Arc::clone(&counts),
            },
            SpyTrackerHandle { counts },
        )
    }
}

impl SpyTrackerHandle {
    pub fn live_count(&self) -> u64 {
        self.counts.live.load(Ordering::Relaxed)
    }

    pub fn dead_count(&self) -> u64 {
        self.counts.dead.load(Ordering::Relaxed)
    }
}

impl LivenessTracker for SpyTracker {
    fn record_live_node(&mut self) {
        self.counts.live.fetch_add(1, Ordering::Relaxed);
    }

    fn record_dead_node(&mut self) {
        self.counts.dead.fetch_add(1, Ordering::Relaxed);
    }

    fn live_nodes(&self) -> f64 {
        1.0
    }

    fn reset(&mut self) {
        self.counts.live.store(0, Ordering::Relaxed);
        self.counts.dead.store(0, Ordering::Relaxed);
    }
}
