use crate::observe::Observation;

/// Online estimate of the fraction of live (non-deleted) nodes in a
/// store, fed one sampled observation at a time.
///
/// Implementations accept observations incrementally via the `record_*`
/// methods and expose the current estimate via [`live_nodes`].
pub trait LivenessTracker {
    /// Registers one node observed live.
    fn record_live_node(&mut self);

    /// Registers one node observed dead.
    fn record_dead_node(&mut self);

    /// Returns the current estimate of the live fraction, in `[0.0, 1.0]`.
    fn live_nodes(&self) -> f64;

    /// Discards all recorded observations.
    fn reset(&mut self);

    /// Registers one observation of either kind.
    #[inline]
    fn record(&mut self, observation: Observation) {
        match observation {
            Observation::Live => self.record_live_node(),
            Observation::Dead => self.record_dead_node(),
        }
    }
}
