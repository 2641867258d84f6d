mod sampling_probe;

pub use sampling_probe::SamplingProbe;
