use crate::observe::Observation;
use std::io::Error;

pub trait ObservationSource {
    fn has_more_observations(&self) -> bool;

    fn next_observation(&mut self) -> Option<Observation>;

    fn restart(&mut self) -> Result<(), Error>;
}
