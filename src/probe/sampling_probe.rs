use crate::liveness::LivenessTracker;
use crate::observe::ObservationSource;
use crate::preview::{LivenessCurve, LivenessSnapshot};
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::time::Instant;

pub struct SamplingProbe {
    tracker: Box<dyn LivenessTracker>,
    source: Box<dyn ObservationSource>,

    curve: LivenessCurve,

    max_observations: Option<u64>,
    max_seconds: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    live_seen: u64,
    dead_seen: u64,
    start_time: Instant,

    progress_tx: Option<Sender<LivenessSnapshot>>,
}

impl SamplingProbe {
    pub fn new(
        tracker: Box<dyn LivenessTracker>,
        source: Box<dyn ObservationSource>,
        max_observations: Option<u64>,
        max_seconds: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }

        Ok(Self {
            tracker,
            source,
            curve: LivenessCurve::default(),
            max_observations,
            max_seconds,
            sample_frequency,
            processed: 0,
            live_seen: 0,
            dead_seen: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<LivenessSnapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_time = Instant::now();

        while self.source.has_more_observations() {
            if let Some(n) = self.max_observations {
                if self.processed >= n {
                    break;
                }
            }
            if let Some(s) = self.max_seconds {
                if self.start_time.elapsed().as_secs() >= s {
                    break;
                }
            }
            let Some(observation) = self.source.next_observation() else {
                break;
            };
            self.processed += 1;
            if observation.is_live() {
                self.live_seen += 1;
            } else {
                self.dead_seen += 1;
            }

            self.tracker.record(observation);

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        self.push_snapshot();
        Ok(())
    }

    pub fn curve(&self) -> &LivenessCurve {
        &self.curve
    }

    pub fn tracker(&self) -> &dyn LivenessTracker {
        self.tracker.as_ref()
    }

    fn push_snapshot(&mut self) {
        let snapshot = LivenessSnapshot {
            observations_seen: self.processed,
            live_seen: self.live_seen,
            dead_seen: self.dead_seen,
            live_fraction: self.tracker.live_nodes(),
            seconds: self.start_time.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }

        self.curve.push(snapshot);
    }
}
