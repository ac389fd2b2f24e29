//! Constants shaping the look and timing of the button.

use core::fmt;

use arrowtap_motion::curve::Curve;
use arrowtap_motion::math;
use arrowtap_motion::spring::Spring;

/// Width of a single arrow glyph when fully shown.
pub const ICON_WIDTH: f32 = 40.0;

/// Width a glyph collapses into when hidden. Kept above zero so the glyph
/// stays laid out.
pub const MIN_GLYPH_WIDTH: f32 = 1.0;

/// Scale of the label while the highlight is shown.
pub const TAP_SCALE: f32 = 0.86;

/// Both the throttle window of the press state and the delay before the
/// arrow snaps back, in seconds.
pub const TAP_DURATION: f32 = 0.22;

pub const SPRING_STIFFNESS: f32 = 210.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MASS: f32 = 1.0;

pub const HIGHLIGHT_DIAMETER: f32 = 100.0;

/// Gray level of the highlight circle, 0.0 being black.
pub const HIGHLIGHT_FILL: f32 = 0.9;

/// Horizontal shift of the label to visually center the arrow.
pub const LABEL_OFFSET: f32 = 2.0;

/// Expected frequency of `tick` calls per second.
pub const TICK_RATE: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub tick_rate: f32,
    pub icon_width: f32,
    pub min_glyph_width: f32,
    pub tap_scale: f32,
    pub throttle_duration: f32,
    pub reset_delay: f32,
    pub highlight_duration: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub spring_mass: f32,
    pub highlight_diameter: f32,
    pub highlight_fill: f32,
    pub label_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidTickRate,
    InvalidDuration,
    InvalidSpring,
    InvalidGlyphWidth,
    InvalidFill,
    InvalidDimension,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            Self::InvalidTickRate => "tick rate must be positive",
            Self::InvalidDuration => "durations must not be negative",
            Self::InvalidSpring => "spring stiffness, damping and mass must be positive",
            Self::InvalidGlyphWidth => "minimal glyph width must be within (0, icon width]",
            Self::InvalidFill => "highlight fill must be within [0, 1]",
            Self::InvalidDimension => "sizes, scale and offset must be finite",
        };
        write!(fmt, "{message}")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            icon_width: ICON_WIDTH,
            min_glyph_width: MIN_GLYPH_WIDTH,
            tap_scale: TAP_SCALE,
            throttle_duration: TAP_DURATION,
            reset_delay: TAP_DURATION,
            highlight_duration: TAP_DURATION,
            spring_stiffness: SPRING_STIFFNESS,
            spring_damping: SPRING_DAMPING,
            spring_mass: SPRING_MASS,
            highlight_diameter: HIGHLIGHT_DIAMETER,
            highlight_fill: HIGHLIGHT_FILL,
            label_offset: LABEL_OFFSET,
        }
    }
}

impl Config {
    /// Check that the constants describe a button that can be animated.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found. Non-finite numbers are
    /// rejected the same way as out of range ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::InvalidTickRate);
        }

        let durations = [
            self.throttle_duration,
            self.reset_delay,
            self.highlight_duration,
        ];
        if durations.iter().any(|d| !(d.is_finite() && *d >= 0.0)) {
            return Err(ConfigError::InvalidDuration);
        }

        let spring_valid = self.spring_stiffness.is_finite()
            && self.spring_stiffness > 0.0
            && self.spring_mass.is_finite()
            && self.spring_mass > 0.0
            && self.spring_damping.is_finite()
            && self.spring_damping > 0.0;
        if !spring_valid {
            return Err(ConfigError::InvalidSpring);
        }

        if !(self.min_glyph_width > 0.0 && self.min_glyph_width <= self.icon_width) {
            return Err(ConfigError::InvalidGlyphWidth);
        }

        if !(0.0..=1.0).contains(&self.highlight_fill) {
            return Err(ConfigError::InvalidFill);
        }

        let dimensions = [
            self.icon_width,
            self.tap_scale,
            self.highlight_diameter,
            self.label_offset,
        ];
        if dimensions.iter().any(|d| !d.is_finite()) || self.highlight_diameter < 0.0 {
            return Err(ConfigError::InvalidDimension);
        }

        Ok(())
    }

    /// Convert seconds into the number of `tick` calls.
    #[must_use]
    pub fn ticks(&self, seconds: f32) -> u32 {
        math::seconds_to_ticks(seconds, self.tick_rate)
    }

    #[must_use]
    pub fn spring_curve(&self) -> Curve {
        let spring =
            Spring::new(self.spring_stiffness, self.spring_damping).with_mass(self.spring_mass);
        Curve::Spring(spring)
    }

    #[must_use]
    pub fn highlight_curve(&self) -> Curve {
        Curve::ease_in(self.highlight_duration)
    }
}
