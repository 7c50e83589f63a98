//! Horizontal velocity tracking for flip releases.
//!
//! Uses the impulse strategy: every pair of consecutive samples contributes
//! the kinetic energy needed to move from the previous velocity to the
//! current one, and the final energy is converted back into a velocity.
//! Only recent samples count, so a finger that stopped before lifting
//! releases with zero velocity.

use std::collections::VecDeque;

/// Samples kept per gesture.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms take part in the calculation.
const HORIZON_MS: i64 = 100;

/// A sample further than this from the newest one means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
///
/// The sample set belongs to one gesture session: it is consumed once by
/// [`VelocityTracker1D::take_velocity`] at release and starts empty again.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: VecDeque<Sample>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Records the pointer position at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        if !position.is_finite() {
            return;
        }
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, position });
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Velocity in units per second, positive when the position grows.
    ///
    /// Returns 0.0 with fewer than two recent samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples.back().copied() else {
            return 0.0;
        };

        // Walk back from the newest sample while samples stay recent, then
        // flip the window so it runs oldest to newest.
        let recent = self
            .samples
            .iter()
            .rev()
            .take_while(|sample| {
                let age = newest.time_ms - sample.time_ms;
                age <= HORIZON_MS && age <= ASSUME_STOPPED_MS
            })
            .count();
        if recent < 2 {
            return 0.0;
        }

        let window: Vec<Sample> = self
            .samples
            .iter()
            .skip(self.samples.len() - recent)
            .copied()
            .collect();

        impulse_velocity(&window) * 1000.0
    }

    /// Velocity in units per second, capped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Resolves the release velocity and discards the samples.
    pub fn take_velocity(&mut self, max_velocity: f32) -> f32 {
        let velocity = self.calculate_velocity_with_max(max_velocity);
        self.reset();
        velocity
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// Impulse velocity in units per millisecond over samples ordered oldest to
/// newest.
fn impulse_velocity(window: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    for (step, pair) in window.windows(2).enumerate() {
        let elapsed = (pair[1].time_ms - pair[0].time_ms) as f32;
        if elapsed == 0.0 {
            continue;
        }
        let v_curr = (pair[1].position - pair[0].position) / elapsed;
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if step == 0 {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds a finger moving at a steady `px_per_ms`, one sample per 16ms
    /// frame, and returns the tracker.
    fn steady_swipe(start: f32, px_per_ms: f32, frames: i64) -> VelocityTracker1D {
        let mut tracker = VelocityTracker1D::new();
        for frame in 0..=frames {
            let time_ms = frame * 16;
            tracker.add_data_point(time_ms, start + px_per_ms * time_ms as f32);
        }
        tracker
    }

    #[test]
    fn no_samples_or_one_sample_means_no_fling() {
        let mut tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
        tracker.add_data_point(5, 42.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn steady_swipe_reports_its_speed_in_px_per_second() {
        let velocity = steady_swipe(20.0, 1.5, 4).calculate_velocity();
        assert!((velocity - 1_500.0).abs() < 1.0, "got {velocity}");
    }

    #[test]
    fn swiping_left_is_negative() {
        let velocity = steady_swipe(340.0, -2.0, 3).calculate_velocity();
        assert!(velocity < -1_000.0, "got {velocity}");
    }

    #[test]
    fn release_velocity_is_capped_both_ways() {
        let mut tracker = steady_swipe(0.0, 40.0, 2);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker = steady_swipe(0.0, -40.0, 2);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(0.0), 0.0);
    }

    #[test]
    fn samples_before_a_long_gap_do_not_count() {
        let mut tracker = VelocityTracker1D::new();
        // A quick flick left, a long hold, then a slow drift right.
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(16, 100.0);
        tracker.add_data_point(500, 100.0);
        tracker.add_data_point(516, 110.0);
        tracker.add_data_point(532, 120.0);

        let velocity = tracker.calculate_velocity();
        assert!(velocity > 0.0 && velocity < 1_000.0, "got {velocity}");
    }

    #[test]
    fn finger_resting_before_lift_releases_without_velocity() {
        let mut tracker = steady_swipe(0.0, 3.0, 4);
        tracker.add_data_point(64 + ASSUME_STOPPED_MS + 1, 192.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn take_velocity_ends_the_session() {
        let mut tracker = steady_swipe(0.0, 1.0, 2);
        assert!(tracker.take_velocity(MAX_VELOCITY) > 0.0);
        assert_eq!(tracker.sample_count(), 0);
        assert_eq!(tracker.take_velocity(MAX_VELOCITY), 0.0);
    }

    #[test]
    fn old_samples_fall_out_of_the_history() {
        let tracker = steady_swipe(0.0, 0.5, HISTORY_SIZE as i64 * 2);
        assert_eq!(tracker.sample_count(), HISTORY_SIZE);
    }

    const MAX_VELOCITY: f32 = 8_000.0;
}
