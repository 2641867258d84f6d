use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::observe::{Observation, ObservationSource};

/// Synthetic source modelling a deletion wave: the live probability
/// drifts linearly from an initial to a final value across the churn
/// window, then holds the final value.
#[derive(Debug)]
pub struct ChurnSource {
    seed: u64,
    rng: StdRng,
    initial_live_probability: f64,
    final_live_probability: f64,
    churn_window: usize,
    max_observations: Option<usize>,
    produced: usize,
}

impl ChurnSource {
    pub fn new(
        initial_live_probability: f64,
        final_live_probability: f64,
        churn_window: usize,
        max_observations: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        for p in [initial_live_probability, final_live_probability] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "Live probabilities must be in [0.0, 1.0]",
                ));
            }
        }
        if churn_window == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Churn window must be > 0",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            initial_live_probability,
            final_live_probability,
            churn_window,
            max_observations,
            produced: 0,
        })
    }

    #[inline]
    fn live_probability_at(&self, position: usize) -> f64 {
        let progress = (position.min(self.churn_window) as f64) / (self.churn_window as f64);
        self.initial_live_probability
            + (self.final_live_probability - self.initial_live_probability) * progress
    }
}

impl ObservationSource for ChurnSource {
    fn has_more_observations(&self) -> bool {
        match self.max_observations {
            Some(max) => self.produced < max,
            None => true,
        }
    }

    fn next_observation(&mut self) -> Option<Observation> {
        if !self.has_more_observations() {
            return None;
        }

        let p = self.live_probability_at(self.produced);
        self.produced += 1;

        let roll: f64 = self.rng.random_range(0.0..1.0);
        if roll < p {
            Some(Observation::Live)
        } else {
            Some(Observation::Dead)
        }
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
