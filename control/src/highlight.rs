//! Circle lit behind the arrow while the button is held.

use arrowtap_motion::animated_value::AnimatedValue;
use arrowtap_motion::curve::Curve;
use arrowtap_motion::math;

use crate::config::Config;

/// Animated visibility of the highlight circle.
///
/// Emphasis travels between 0.0 (hidden) and 1.0 (shown) along an ease-in
/// curve. Reversing mid-way continues from the presented emphasis.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Highlight {
    shown: bool,
    emphasis: AnimatedValue,
    curve: Curve,
}

/// Parameters to draw the highlight and the label placed on top of it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HighlightAppearance {
    pub diameter: f32,
    pub fill: f32,
    pub opacity: f32,
    pub label_scale: f32,
    pub label_offset: f32,
}

impl Highlight {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            shown: false,
            emphasis: AnimatedValue::new(0.0, config.tick_rate),
            curve: config.highlight_curve(),
        }
    }

    /// Returns `true` if this changed the visibility.
    pub fn show(&mut self, shown: bool) -> bool {
        if shown == self.shown {
            return false;
        }
        self.shown = shown;
        let target = if shown { 1.0 } else { 0.0 };
        self.emphasis.animate_to(target, self.curve);
        true
    }

    pub fn tick(&mut self) {
        self.emphasis.tick();
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    #[must_use]
    pub fn emphasis(&self) -> f32 {
        self.emphasis.value()
    }

    #[must_use]
    pub fn appearance(&self, config: &Config) -> HighlightAppearance {
        let emphasis = self.emphasis();
        HighlightAppearance {
            diameter: config.highlight_diameter,
            fill: config.highlight_fill,
            opacity: emphasis.clamp(0.0, 1.0),
            label_scale: math::lerp(1.0, config.tap_scale, emphasis),
            label_offset: config.label_offset,
        }
    }
}
