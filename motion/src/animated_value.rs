//! Scalar animated along a curve by a fixed-rate loop.
//!
//! This is the model of a single animatable property. The loop calls `tick`
//! once per cycle and reads `value` to get the currently presented value.

use sirena::signal::Signal;

use crate::curve::Curve;
use crate::math;

/// Value that either holds still or travels towards a target.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimatedValue {
    tick_rate: f32,
    state: State,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Stable(f32),
    Animating(Transition),
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Transition {
    from: f32,
    to: f32,
    curve: Curve,
    elapsed: u32,
    length: u32,
}

impl Transition {
    fn value(&self, tick_rate: f32) -> f32 {
        let seconds = self.elapsed as f32 / tick_rate;
        math::lerp(self.from, self.to, self.curve.sample(seconds))
    }
}

impl AnimatedValue {
    #[must_use]
    pub fn new(value: f32, tick_rate: f32) -> Self {
        Self {
            tick_rate,
            state: State::Stable(value),
        }
    }

    /// Jump to the value immediately, dropping any running transition.
    pub fn set(&mut self, value: f32) {
        self.state = State::Stable(value);
    }

    /// Start a transition from the currently presented value.
    ///
    /// Interrupting a running transition continues from wherever it got.
    pub fn animate_to(&mut self, value: f32, curve: Curve) {
        let length = math::seconds_to_ticks(curve.duration(), self.tick_rate);
        if length == 0 {
            self.set(value);
            return;
        }
        self.state = State::Animating(Transition {
            from: self.value(),
            to: value,
            curve,
            elapsed: 0,
            length,
        });
    }

    pub fn tick(&mut self) {
        if let State::Animating(mut transition) = self.state {
            transition.elapsed += 1;
            if transition.elapsed >= transition.length {
                self.state = State::Stable(transition.to);
            } else {
                self.state = State::Animating(transition);
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        match self.state {
            State::Stable(value) => value,
            State::Animating(transition) => transition.value(self.tick_rate),
        }
    }

    /// The value this will eventually rest at.
    #[must_use]
    pub fn target(&self) -> f32 {
        match self.state {
            State::Stable(value) => value,
            State::Animating(transition) => transition.to,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating(_))
    }
}

impl Signal for AnimatedValue {
    fn next(&mut self) -> f32 {
        self.tick();
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sirena::signal::SignalTake;

    const TICK_RATE: f32 = 1000.0;

    #[test]
    fn given_animated_value_when_left_intact_it_returns_stable_value() {
        let value = AnimatedValue::new(1.0, TICK_RATE);
        for x in value.take(10) {
            assert_relative_eq!(x, 1.0);
        }
    }

    #[test]
    fn given_animated_value_when_animated_linearly_it_progresses_to_target_and_remains_stable() {
        let mut value = AnimatedValue::new(1.0, TICK_RATE);
        value.animate_to(0.0, Curve::linear(0.064));
        for (i, x) in value.by_ref().take(63).enumerate() {
            assert_relative_eq!(x, 1.0 - (i as f32 + 1.0) / 64.0, epsilon = 0.0001);
        }
        for x in value.take(100) {
            assert_relative_eq!(x, 0.0);
        }
    }

    #[test]
    fn when_animation_starts_it_reports_target_right_away() {
        let mut value = AnimatedValue::new(0.0, TICK_RATE);
        value.animate_to(1.0, Curve::spring(210.0, 20.0));
        assert!(value.is_animating());
        assert_relative_eq!(value.value(), 0.0);
        assert_relative_eq!(value.target(), 1.0);
    }

    #[test]
    fn when_set_during_animation_it_snaps_without_easing() {
        let mut value = AnimatedValue::new(0.0, TICK_RATE);
        value.animate_to(1.0, Curve::spring(210.0, 20.0));
        for _ in 0..100 {
            value.tick();
        }
        value.set(0.0);
        assert!(!value.is_animating());
        assert_relative_eq!(value.value(), 0.0);
        value.tick();
        assert_relative_eq!(value.value(), 0.0);
    }

    #[test]
    fn when_interrupted_it_continues_from_presented_value() {
        let mut value = AnimatedValue::new(0.0, TICK_RATE);
        value.animate_to(1.0, Curve::linear(0.1));
        for _ in 0..50 {
            value.tick();
        }
        let presented = value.value();
        value.animate_to(0.0, Curve::linear(0.1));
        assert_relative_eq!(value.value(), presented);
        value.tick();
        assert!(value.value() < presented);
    }

    #[test]
    fn when_curve_is_shorter_than_a_tick_it_jumps() {
        let mut value = AnimatedValue::new(0.0, TICK_RATE);
        value.animate_to(1.0, Curve::linear(0.0001));
        assert!(!value.is_animating());
        assert_relative_eq!(value.value(), 1.0);
    }

    #[test]
    fn spring_animation_settles_exactly_on_target() {
        let mut value = AnimatedValue::new(0.0, TICK_RATE);
        value.animate_to(1.0, Curve::spring(210.0, 20.0));
        for _ in 0..1000 {
            value.tick();
        }
        assert!(!value.is_animating());
        assert_relative_eq!(value.value(), 1.0);
    }
}
