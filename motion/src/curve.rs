//! Shapes of transitions between two values.

use crate::ease::{self, CubicBezier};
use crate::spring::Spring;

/// How a transition progresses over time.
///
/// Timed curves last exactly their given duration. Spring curves last
/// until the spring settles, which is given by its stiffness, damping and
/// mass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Curve {
    Timed(CubicBezier, f32),
    Spring(Spring),
}

impl Curve {
    #[must_use]
    pub fn linear(duration: f32) -> Self {
        Self::Timed(ease::LINEAR, duration)
    }

    #[must_use]
    pub fn ease_in(duration: f32) -> Self {
        Self::Timed(ease::EASE_IN, duration)
    }

    #[must_use]
    pub fn ease_out(duration: f32) -> Self {
        Self::Timed(ease::EASE_OUT, duration)
    }

    #[must_use]
    pub fn ease_in_out(duration: f32) -> Self {
        Self::Timed(ease::EASE_IN_OUT, duration)
    }

    #[must_use]
    pub fn spring(stiffness: f32, damping: f32) -> Self {
        Self::Spring(Spring::new(stiffness, damping))
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        match self {
            Self::Timed(_, duration) => duration.max(0.0),
            Self::Spring(spring) => spring.settling_duration(),
        }
    }

    /// Fraction of the distance travelled `elapsed` seconds into the
    /// transition.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> f32 {
        match self {
            Self::Timed(bezier, duration) => {
                if *duration <= 0.0 {
                    1.0
                } else {
                    bezier.sample(elapsed / duration)
                }
            }
            Self::Spring(spring) => spring.sample(elapsed),
        }
    }
}
