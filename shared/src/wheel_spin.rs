use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::constants::{MAX_SPINS, MIN_SPINS, SECTOR_MARGIN, SPIN_DURATION_MS};
use crate::wheel_layout::{sector_span, POINTER_ANGLE};
use crate::wheel_selection::select_index;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    pub duration_ms: f64,
    /// Never fewer than `MIN_SPINS` full turns are made, whatever this says.
    pub min_rotations: u32,
    pub max_rotations: u32,
    /// Fraction of the winning sector kept clear of either edge at rest.
    pub sector_margin: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS as f64,
            min_rotations: MIN_SPINS,
            max_rotations: MAX_SPINS,
            sector_margin: SECTOR_MARGIN,
        }
    }
}

/// Lifecycle of a single spin. Angles are clockwise wheel rotations in radians,
/// times are milliseconds on the caller's clock.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SpinState {
    Idle,
    Spinning {
        winner: String,
        winner_index: usize,
        start_angle: f64,
        target_angle: f64,
        start_time: f64,
        duration: f64,
    },
    Settled {
        winner: String,
        winner_index: usize,
        final_angle: f64,
    },
}

pub struct SpinMachine<R> {
    rng: R,
    config: SpinConfig,
    state: SpinState,
    resting_angle: f64,
}

impl<R: Rng> SpinMachine<R> {
    pub fn new(rng: R, config: SpinConfig) -> Self {
        Self {
            rng,
            config,
            state: SpinState::Idle,
            resting_angle: 0.0,
        }
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning { .. })
    }

    /// The winner of the in-flight or settled spin.
    pub fn winner(&self) -> Option<&str> {
        match &self.state {
            SpinState::Spinning { winner, .. } | SpinState::Settled { winner, .. } => Some(winner.as_str()),
            SpinState::Idle => None,
        }
    }

    /// Starts a spin over `names`. Returns `false` without touching the state
    /// when a spin is already in flight or the wheel is empty.
    pub fn request_spin<S: AsRef<str>>(&mut self, names: &[S], now: f64) -> bool {
        if self.is_spinning() {
            log::debug!("Spin requested while already spinning, ignoring.");
            return false;
        }

        let winner_index = match select_index(names, &mut self.rng) {
            Ok(index) => index,
            Err(_) => {
                log::debug!("Spin requested on an empty wheel, ignoring.");
                return false;
            }
        };

        let start_angle = self.resting_angle;
        let target_angle = self.target_angle(start_angle, winner_index, names.len());
        let winner = names[winner_index].as_ref().to_string();

        log::info!(
            "Spinning {} names, winner fixed at index {} ({:.1} turns).",
            names.len(),
            winner_index,
            (target_angle - start_angle) / TAU
        );

        self.state = SpinState::Spinning {
            winner,
            winner_index,
            start_angle,
            target_angle,
            start_time: now,
            duration: self.config.duration_ms,
        };
        true
    }

    /// Ends the animation once its duration has elapsed at `now`. Yields the
    /// winner on the first accepted call of a spin and `None` otherwise, so the
    /// completion is reported exactly once.
    pub fn animation_complete(&mut self, now: f64) -> Option<String> {
        let SpinState::Spinning { winner, winner_index, target_angle, .. } = &self.state else {
            log::debug!("Animation completion received while not spinning, ignoring.");
            return None;
        };
        if self.progress(now) < 1.0 {
            log::debug!("Animation completion received {:.0}ms early, ignoring.", self.remaining_ms(now));
            return None;
        }

        let winner = winner.clone();
        let winner_index = *winner_index;
        let final_angle = *target_angle;

        self.resting_angle = final_angle.rem_euclid(TAU);
        self.state = SpinState::Settled {
            winner: winner.clone(),
            winner_index,
            final_angle,
        };
        log::info!("Wheel settled on {}.", winner);
        Some(winner)
    }

    /// Consumes a settled result and returns to `Idle`.
    pub fn acknowledge(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, SpinState::Idle) {
            SpinState::Settled { winner, .. } => Some(winner),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Fraction of the animation elapsed at `now`, in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        match &self.state {
            SpinState::Idle => 0.0,
            SpinState::Spinning { start_time, duration, .. } => {
                if *duration <= 0.0 {
                    1.0
                } else {
                    ((now - start_time) / duration).clamp(0.0, 1.0)
                }
            }
            SpinState::Settled { .. } => 1.0,
        }
    }

    /// Milliseconds left before the spin may settle; zero unless spinning.
    pub fn remaining_ms(&self, now: f64) -> f64 {
        match &self.state {
            SpinState::Spinning { start_time, duration, .. } => (start_time + duration - now).max(0.0),
            _ => 0.0,
        }
    }

    /// Wheel rotation to draw at `now`.
    pub fn rotation_at(&self, now: f64) -> f64 {
        match &self.state {
            SpinState::Idle => self.resting_angle,
            SpinState::Spinning { start_angle, target_angle, .. } => {
                let eased = ease_in_out_cubic(self.progress(now));
                start_angle + (target_angle - start_angle) * eased
            }
            SpinState::Settled { final_angle, .. } => *final_angle,
        }
    }

    fn target_angle(&mut self, start_angle: f64, winner_index: usize, total: usize) -> f64 {
        let span = sector_span(total);
        let margin = self.config.sector_margin.clamp(0.0, 0.49);
        let landing = (winner_index as f64 + self.rng.gen_range(margin..1.0 - margin)) * span;

        // Rotation that puts `landing` under the pointer, reached moving forward only.
        let rest = (POINTER_ANGLE - landing).rem_euclid(TAU);
        let delta = (rest - start_angle.rem_euclid(TAU)).rem_euclid(TAU);

        let min_turns = self.config.min_rotations.max(MIN_SPINS);
        let max_turns = self.config.max_rotations.max(min_turns);
        let turns = self.rng.gen_range(min_turns..=max_turns);

        start_angle + turns as f64 * TAU + delta
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_layout::sector_at;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn machine(seed: u64) -> SpinMachine<StdRng> {
        SpinMachine::new(StdRng::seed_from_u64(seed), SpinConfig::default())
    }

    fn names() -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]
    }

    #[test]
    fn test_empty_request_stays_idle() {
        let mut spin = machine(1);
        let empty: Vec<String> = Vec::new();
        assert!(!spin.request_spin(&empty, 0.0));
        assert_eq!(spin.state(), &SpinState::Idle);
        assert_eq!(spin.winner(), None);
    }

    #[test]
    fn test_full_spin_cycle() {
        let mut spin = machine(3);
        let names = names();
        assert!(spin.request_spin(&names, 1_000.0));

        let (winner, target) = match spin.state().clone() {
            SpinState::Spinning { winner, target_angle, start_time, duration, .. } => {
                assert_eq!(start_time, 1_000.0);
                assert_eq!(duration, 3_000.0);
                (winner, target_angle)
            }
            other => panic!("expected spinning, got {:?}", other),
        };
        assert!(names.contains(&winner));
        assert_eq!(spin.rotation_at(4_000.0), target);

        assert_eq!(spin.animation_complete(4_000.0), Some(winner.clone()));
        assert_eq!(spin.animation_complete(4_000.0), None);
        assert_eq!(
            spin.state(),
            &SpinState::Settled {
                winner: winner.clone(),
                winner_index: names.iter().position(|n| *n == winner).unwrap(),
                final_angle: target,
            }
        );

        assert_eq!(spin.acknowledge(), Some(winner));
        assert_eq!(spin.state(), &SpinState::Idle);
        assert_eq!(spin.acknowledge(), None);
    }

    #[test]
    fn test_request_while_spinning_is_ignored() {
        let mut spin = machine(11);
        let names = names();
        assert!(spin.request_spin(&names, 0.0));
        let in_flight = spin.state().clone();

        assert!(!spin.request_spin(&names, 500.0));
        assert!(!spin.request_spin(&["Someone else"], 600.0));
        assert_eq!(spin.state(), &in_flight);
    }

    #[test]
    fn test_solo_always_wins() {
        for seed in 0..50 {
            let mut spin = machine(seed);
            assert!(spin.request_spin(&["Solo"], 0.0));
            assert_eq!(spin.animation_complete(f64::MAX).as_deref(), Some("Solo"));
        }
    }

    #[test]
    fn test_rest_angle_points_at_winner() {
        for count in 1..=12 {
            let names: Vec<String> = (0..count).map(|i| format!("N{}", i)).collect();
            let mut spin = machine(count as u64);
            for round in 0..20 {
                assert!(spin.request_spin(&names, round as f64));
                let winner_index = match spin.state() {
                    SpinState::Spinning { winner_index, .. } => *winner_index,
                    other => panic!("expected spinning, got {:?}", other),
                };
                spin.animation_complete(f64::MAX);
                let rest = spin.rotation_at(f64::MAX);
                assert_eq!(sector_at(rest, count), Some(winner_index));
                spin.acknowledge();
            }
        }
    }

    #[test]
    fn test_spins_forward_at_least_five_turns() {
        let mut spin = machine(8);
        let names = names();
        for round in 0..30 {
            let before = spin.rotation_at(0.0);
            assert!(spin.request_spin(&names, 0.0));
            let (start, target) = match spin.state() {
                SpinState::Spinning { start_angle, target_angle, .. } => (*start_angle, *target_angle),
                other => panic!("round {}: expected spinning, got {:?}", round, other),
            };
            assert_eq!(start, before);
            assert!(target >= start + 5.0 * TAU);
            assert!(target < start + 9.0 * TAU);
            spin.animation_complete(f64::MAX);
            spin.acknowledge();
        }
    }

    #[test]
    fn test_completion_waits_for_duration() {
        let mut spin = machine(9);
        assert!(spin.request_spin(&names(), 1_000.0));
        assert_eq!(spin.remaining_ms(2_000.0), 2_000.0);

        assert_eq!(spin.animation_complete(3_999.0), None);
        assert!(spin.is_spinning());

        assert!(spin.animation_complete(4_000.0).is_some());
        assert!(!spin.is_spinning());
        assert_eq!(spin.remaining_ms(4_000.0), 0.0);
    }

    #[test]
    fn test_settled_never_resets_on_its_own() {
        let mut spin = machine(4);
        spin.request_spin(&names(), 0.0);
        spin.animation_complete(f64::MAX);
        let settled = spin.state().clone();
        assert_eq!(spin.rotation_at(1_000_000.0), spin.rotation_at(10.0));
        assert_eq!(spin.state(), &settled);
    }

    #[test]
    fn test_spin_from_settled_is_allowed() {
        let mut spin = machine(6);
        let names = names();
        spin.request_spin(&names, 0.0);
        spin.animation_complete(f64::MAX);
        assert!(spin.request_spin(&names, 5_000.0));
        assert!(spin.is_spinning());
    }

    #[test]
    fn test_rotation_is_monotonic_while_spinning() {
        let mut spin = machine(21);
        spin.request_spin(&names(), 0.0);
        let mut last = spin.rotation_at(0.0);
        for step in 1..=300 {
            let current = spin.rotation_at(step as f64 * 10.0);
            assert!(current >= last);
            last = current;
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut spin = machine(2);
        assert_eq!(spin.progress(100.0), 0.0);
        spin.request_spin(&names(), 1_000.0);
        assert_eq!(spin.progress(500.0), 0.0);
        assert_eq!(spin.progress(2_500.0), 0.5);
        assert_eq!(spin.progress(9_000.0), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }
}
