use crate::observe::{Observation, ObservationSource};
use std::io::Error;

pub struct TapeSource {
    pub observations: Vec<Observation>,
    idx: usize,
}

impl TapeSource {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            idx: 0,
        }
    }
}

impl ObservationSource for TapeSource {
    fn has_more_observations(&self) -> bool {
        self.idx < self.observations.len()
    }

    fn next_observation(&mut self) -> Option<Observation> {
        if !self.has_more_observations() {
            return None;
        }

        let observation = self.observations[self.idx];
        self.idx += 1;
        Some(observation)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
