//! Damped harmonic oscillator used as a transition curve.
//!
//! The spring starts at rest, displaced by the full distance from its
//! target, and is released with zero velocity. Depending on the ratio of
//! damping to stiffness it either oscillates around the target while
//! converging (underdamped), approaches it as fast as possible without
//! overshooting (critically damped), or creeps towards it (overdamped).

/// Once the decay envelope falls below this fraction of the travelled
/// distance, the spring is considered settled.
const SETTLE_THRESHOLD: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Regime {
    Underdamped {
        decay: f32,
        frequency: f32,
    },
    Critical {
        decay: f32,
    },
    Overdamped {
        slow_root: f32,
        fast_root: f32,
    },
}

impl Spring {
    #[must_use]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    #[must_use]
    pub fn with_mass(self, mass: f32) -> Self {
        Self { mass, ..self }
    }

    #[must_use]
    pub fn natural_frequency(&self) -> f32 {
        libm::sqrtf(self.stiffness / self.mass)
    }

    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * libm::sqrtf(self.stiffness * self.mass))
    }

    /// Time in seconds after which the spring reports its target exactly.
    #[must_use]
    pub fn settling_duration(&self) -> f32 {
        let slowest_decay = match self.regime() {
            Regime::Underdamped { decay, .. } | Regime::Critical { decay } => decay,
            Regime::Overdamped { slow_root, .. } => -slow_root,
        };
        if slowest_decay <= 0.0 {
            return 0.0;
        }
        libm::logf(1.0 / SETTLE_THRESHOLD) / slowest_decay
    }

    /// Fraction of the distance travelled `t` seconds after release.
    ///
    /// Starts at 0.0 and converges to 1.0. Underdamped springs overshoot
    /// past 1.0 before settling.
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= self.settling_duration() {
            return 1.0;
        }
        1.0 - self.displacement(t)
    }

    fn displacement(&self, t: f32) -> f32 {
        match self.regime() {
            Regime::Underdamped { decay, frequency } => {
                let envelope = libm::expf(-decay * t);
                let phase = frequency * t;
                envelope * (libm::cosf(phase) + decay / frequency * libm::sinf(phase))
            }
            Regime::Critical { decay } => libm::expf(-decay * t) * (1.0 + decay * t),
            Regime::Overdamped {
                slow_root,
                fast_root,
            } => {
                let span = fast_root - slow_root;
                let slow = fast_root / span * libm::expf(slow_root * t);
                let fast = -slow_root / span * libm::expf(fast_root * t);
                slow + fast
            }
        }
    }

    fn regime(&self) -> Regime {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            Regime::Underdamped {
                decay: zeta * omega,
                frequency: omega * libm::sqrtf(1.0 - zeta * zeta),
            }
        } else if zeta > 1.0 {
            let spread = libm::sqrtf(zeta * zeta - 1.0);
            Regime::Overdamped {
                slow_root: -omega * (zeta - spread),
                fast_root: -omega * (zeta + spread),
            }
        } else {
            Regime::Critical { decay: omega }
        }
    }
}
