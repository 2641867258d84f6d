use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::observe::{Observation, ObservationSource};

/// Synthetic source emitting live observations with a fixed probability.
#[derive(Debug)]
pub struct BernoulliSource {
    seed: u64,
    rng: StdRng,
    live_probability: f64,
    max_observations: Option<usize>,
    produced: usize,
}

impl BernoulliSource {
    pub fn new(
        live_probability: f64,
        max_observations: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Live probability must be in [0.0, 1.0]",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            live_probability,
            max_observations,
            produced: 0,
        })
    }

    #[inline]
    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }
}

impl ObservationSource for BernoulliSource {
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
        self.produced += 1;

        let roll: f64 = self.rng.random_range(0.0..1.0);
        if roll < self.live_probability {
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
