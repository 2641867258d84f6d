use crate::liveness::{LivenessError, LivenessTracker};
use crate::utils::math::{normal_probability, wilson_bounds};

/// Counter-based liveness tracker.
///
/// Starts from a virtual prior of `prior_weight` live observations, so a
/// fresh tracker reports full liveness and a finite run of dead samples
/// can only push the estimate toward zero, never onto it:
/// `(prior + live) / (prior + live + dead)`.
#[derive(Debug, Clone, Copy)]
pub struct NodeLivenessTracker {
    prior_weight: u64,
    live: u64,
    dead: u64,
}

impl NodeLivenessTracker {
    /// Fresh tracker with the canonical prior of one virtual live node.
    pub fn new() -> Self {
        Self {
            prior_weight: 1,
            live: 0,
            dead: 0,
        }
    }

    /// Fresh tracker with a heavier smoothing prior. A weight of `n`
    /// behaves as if `n` live nodes had already been observed, so single
    /// adverse samples move the estimate less. Zero is rejected: it
    /// would make an empty tracker report `0/0`.
    pub fn with_prior_weight(weight: u64) -> Result<Self, LivenessError> {
        if weight == 0 {
            return Err(LivenessError::PriorWeightOutOfRange(weight));
        }
        Ok(Self {
            prior_weight: weight,
            live: 0,
            dead: 0,
        })
    }

    #[inline]
    pub fn live_seen(&self) -> u64 {
        self.live
    }

    #[inline]
    pub fn dead_seen(&self) -> u64 {
        self.dead
    }

    #[inline]
    pub fn observations(&self) -> u64 {
        self.live + self.dead
    }

    #[inline]
    fn smoothed_counts(&self) -> (f64, f64) {
        let successes = (self.prior_weight + self.live) as f64;
        let trials = (self.prior_weight + self.live + self.dead) as f64;
        (successes, trials)
    }

    /// Wilson score interval for the live fraction at critical value
    /// `z` (e.g. 1.96 for a 95% interval), over the smoothed counts.
    /// Both ends are clamped to `[0.0, 1.0]`.
    pub fn live_nodes_bounds(&self, z: f64) -> (f64, f64) {
        let (successes, trials) = self.smoothed_counts();
        wilson_bounds(successes, trials, z)
    }

    /// Normal-approximation probability that the true live fraction
    /// strictly exceeds `threshold`, given the observations so far.
    pub fn chance_live_exceeds(&self, threshold: f64) -> f64 {
        let (_, trials) = self.smoothed_counts();
        let p = self.live_nodes();
        let se = (p * (1.0 - p) / trials).sqrt();
        if se == 0.0 {
            return if p > threshold { 1.0 } else { 0.0 };
        }
        normal_probability((p - threshold) / se)
    }
}

impl Default for NodeLivenessTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LivenessTracker for NodeLivenessTracker {
    #[inline]
    fn record_live_node(&mut self) {
        self.live += 1;
    }

    #[inline]
    fn record_dead_node(&mut self) {
        self.dead += 1;
    }

    #[inline]
    fn live_nodes(&self) -> f64 {
        let (successes, trials) = self.smoothed_counts();
        successes / trials
    }

    fn reset(&mut self) {
        self.live = 0;
        self.dead = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Observation;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn reports_full_liveness_before_any_samples() {
        let tracker = NodeLivenessTracker::new();
        assert_eq!(tracker.live_nodes(), 1.0);
    }

    #[test]
    fn reports_nonzero_after_only_dead_samples() {
        let mut tracker = NodeLivenessTracker::new();
        tracker.record_dead_node();
        assert_ne!(tracker.live_nodes(), 0.0);
        assert_eq!(tracker.live_nodes(), 0.5);
    }

    #[test]
    fn long_dead_streak_stays_strictly_positive() {
        let mut tracker = NodeLivenessTracker::new();
        for _ in 0..1000 {
            tracker.record_dead_node();
        }
        let estimate = tracker.live_nodes();
        assert!(estimate > 0.0);
        assert!((estimate - 1.0 / 1001.0).abs() < 1e-15);
    }

    #[test]
    fn abundant_live_evidence_dominates_one_dead_sample() {
        let mut tracker = NodeLivenessTracker::new();
        for _ in 0..1000 {
            tracker.record_live_node();
        }
        tracker.record_dead_node();
        assert!(tracker.live_nodes() > 0.99);
    }

    #[test]
    fn dead_never_raises_and_live_never_lowers_the_estimate() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tracker = NodeLivenessTracker::new();
        for _ in 0..500 {
            let before = tracker.live_nodes();
            if rng.random_bool(0.5) {
                tracker.record_live_node();
                assert!(tracker.live_nodes() >= before);
            } else {
                tracker.record_dead_node();
                assert!(tracker.live_nodes() <= before);
            }
        }
    }

    #[test]
    fn estimate_stays_within_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut tracker = NodeLivenessTracker::new();
        for _ in 0..2000 {
            if rng.random_bool(0.2) {
                tracker.record_live_node();
            } else {
                tracker.record_dead_node();
            }
            let estimate = tracker.live_nodes();
            assert!((0.0..=1.0).contains(&estimate));
        }
    }

    #[test]
    fn record_dispatches_on_observation_kind() {
        let mut tracker = NodeLivenessTracker::new();
        tracker.record(Observation::Live);
        tracker.record(Observation::Dead);
        tracker.record(Observation::Dead);
        assert_eq!(tracker.live_seen(), 1);
        assert_eq!(tracker.dead_seen(), 2);
        assert_eq!(tracker.observations(), 3);
        assert_eq!(tracker.live_nodes(), 0.5);
    }

    #[test]
    fn reset_restores_the_optimistic_prior() {
        let mut tracker = NodeLivenessTracker::new();
        tracker.record_dead_node();
        tracker.record_dead_node();
        assert!(tracker.live_nodes() < 1.0);

        tracker.reset();
        assert_eq!(tracker.observations(), 0);
        assert_eq!(tracker.live_nodes(), 1.0);
    }

    #[test]
    fn zero_prior_weight_is_rejected() {
        assert!(matches!(
            NodeLivenessTracker::with_prior_weight(0),
            Err(LivenessError::PriorWeightOutOfRange(0))
        ));
    }

    #[test]
    fn heavier_prior_softens_a_single_dead_sample() {
        let mut tracker = NodeLivenessTracker::with_prior_weight(9).unwrap();
        assert_eq!(tracker.live_nodes(), 1.0);
        tracker.record_dead_node();
        assert_eq!(tracker.live_nodes(), 0.9);
    }

    #[test]
    fn bounds_bracket_the_estimate_and_tighten_with_evidence() {
        let mut tracker = NodeLivenessTracker::new();
        for _ in 0..10 {
            tracker.record_live_node();
        }
        for _ in 0..10 {
            tracker.record_dead_node();
        }
        let (lo_small, hi_small) = tracker.live_nodes_bounds(1.96);
        let p = tracker.live_nodes();
        assert!(lo_small > 0.0 && hi_small < 1.0);
        assert!(lo_small <= p && p <= hi_small);

        for _ in 0..500 {
            tracker.record_live_node();
            tracker.record_dead_node();
        }
        let (lo_big, hi_big) = tracker.live_nodes_bounds(1.96);
        assert!(hi_big - lo_big < hi_small - lo_small);
    }

    #[test]
    fn exceedance_probability_tracks_the_estimate() {
        let mut tracker = NodeLivenessTracker::new();
        for _ in 0..50 {
            tracker.record_live_node();
        }
        for _ in 0..50 {
            tracker.record_dead_node();
        }
        let p = tracker.live_nodes();
        assert!(tracker.chance_live_exceeds(p - 0.2) > 0.5);
        assert!(tracker.chance_live_exceeds(p + 0.2) < 0.5);
    }

    #[test]
    fn exceedance_probability_is_a_step_when_variance_vanishes() {
        let tracker = NodeLivenessTracker::new();
        // No dead samples recorded, so the smoothed fraction is exactly 1.
        assert_eq!(tracker.chance_live_exceeds(0.9), 1.0);
        assert_eq!(tracker.chance_live_exceeds(1.0), 0.0);
    }
}
