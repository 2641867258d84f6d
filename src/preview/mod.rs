mod curve;
mod snapshot;

pub use curve::{CurveFormat, LivenessCurve};
pub use snapshot::LivenessSnapshot;
