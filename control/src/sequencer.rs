//! One-shot animation of the arrow splitting apart and snapping back.

use arrowtap_motion::animated_value::AnimatedValue;
use arrowtap_motion::curve::Curve;

use crate::config::Config;
use crate::log;

/// Drives the progress of the split arrow animation.
///
/// On `activate`, progress springs from 0.0 towards 1.0. A fixed number of
/// ticks after activation it jumps back to exactly 0.0, no matter whether
/// the spring already settled. Activations while a cycle is running are
/// silently dropped.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequencer {
    progress: AnimatedValue,
    curve: Curve,
    reset_delay: u32,
    reset_in: Option<u32>,
}

impl Sequencer {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            progress: AnimatedValue::new(0.0, config.tick_rate),
            curve: config.spring_curve(),
            reset_delay: config.ticks(config.reset_delay),
            reset_in: None,
        }
    }

    pub fn activate(&mut self) {
        if self.is_running() {
            log::debug!("Animation is running, activation ignored");
            return;
        }

        log::info!("Animation started");
        self.progress.animate_to(1.0, self.curve);
        self.reset_in = Some(self.reset_delay);
    }

    /// Advance the animation by a single tick.
    ///
    /// Returns `true` when this tick snapped the progress back to zero.
    pub fn tick(&mut self) -> bool {
        self.progress.tick();

        let Some(reset_in) = self.reset_in else {
            return false;
        };

        let reset_in = reset_in.saturating_sub(1);
        if reset_in > 0 {
            self.reset_in = Some(reset_in);
            return false;
        }

        self.reset_in = None;
        self.progress.set(0.0);
        log::info!("Animation reset");
        true
    }

    /// The currently presented progress.
    ///
    /// May briefly exceed 1.0 while the spring overshoots.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.reset_in.is_some()
    }

    /// Forget the pending reset. Progress stays wherever it is, and the
    /// next activation starts a new cycle from there.
    pub fn cancel(&mut self) {
        self.reset_in = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> Sequencer {
        Sequencer::new(&Config::default())
    }

    #[test]
    fn when_created_it_is_at_rest() {
        let mut sequencer = sequencer();
        assert!(!sequencer.is_running());
        for _ in 0..1000 {
            assert!(!sequencer.tick());
            assert_relative_eq!(sequencer.progress(), 0.0);
        }
    }

    #[test]
    fn when_activated_progress_starts_moving_right_away() {
        let mut sequencer = sequencer();
        sequencer.activate();
        assert!(sequencer.is_running());
        assert_relative_eq!(sequencer.progress(), 0.0);
        sequencer.tick();
        assert!(sequencer.progress() > 0.0);
    }

    #[test]
    fn when_activated_it_resets_to_exactly_zero_after_220_ticks() {
        let mut sequencer = sequencer();
        sequencer.activate();
        for _ in 0..219 {
            assert!(!sequencer.tick());
        }
        assert!(sequencer.progress() > 0.99);
        assert!(sequencer.tick());
        assert_eq!(sequencer.progress(), 0.0);
        assert!(!sequencer.is_running());
    }

    #[test]
    fn when_reset_it_snaps_back_without_easing() {
        let mut sequencer = sequencer();
        sequencer.activate();
        for _ in 0..220 {
            sequencer.tick();
        }
        for _ in 0..100 {
            sequencer.tick();
            assert_eq!(sequencer.progress(), 0.0);
        }
    }

    #[test]
    fn when_activated_twice_quickly_second_activation_is_ignored() {
        let mut sequencer = sequencer();
        sequencer.activate();
        let mut resets = vec![];
        for i in 1..=1000 {
            if i == 100 {
                sequencer.activate();
            }
            if sequencer.tick() {
                resets.push(i);
            }
        }
        assert_eq!(resets, vec![220]);
    }

    #[test]
    fn when_activation_is_ignored_spring_is_not_restarted() {
        let mut reference = sequencer();
        let mut sequencer = sequencer();
        reference.activate();
        sequencer.activate();
        for _ in 0..50 {
            reference.tick();
            sequencer.tick();
        }
        sequencer.activate();
        for _ in 0..100 {
            reference.tick();
            sequencer.tick();
            assert_relative_eq!(sequencer.progress(), reference.progress());
        }
    }

    #[test]
    fn when_cycle_completes_it_can_be_activated_again() {
        let mut sequencer = sequencer();
        sequencer.activate();
        for _ in 0..220 {
            sequencer.tick();
        }
        sequencer.activate();
        assert!(sequencer.is_running());
        sequencer.tick();
        assert!(sequencer.progress() > 0.0);
    }

    #[test]
    fn when_cancelled_pending_reset_never_fires() {
        let mut sequencer = sequencer();
        sequencer.activate();
        for _ in 0..100 {
            sequencer.tick();
        }
        sequencer.cancel();
        for _ in 0..1000 {
            assert!(!sequencer.tick());
        }
    }

    #[test]
    fn when_activated_after_cancel_it_runs_a_new_cycle_with_single_reset() {
        let mut sequencer = sequencer();
        sequencer.activate();
        for _ in 0..100 {
            sequencer.tick();
        }
        sequencer.cancel();
        for _ in 0..1000 {
            sequencer.tick();
        }

        sequencer.activate();
        assert!(sequencer.is_running());
        let mut resets = vec![];
        for i in 1..=1000 {
            if sequencer.tick() {
                resets.push(i);
            }
        }
        assert_eq!(resets, vec![220]);
        assert_eq!(sequencer.progress(), 0.0);
    }
}
