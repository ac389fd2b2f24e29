//! Layout of the three play glyphs forming the arrow.
//!
//! The arrow is drawn as three play glyphs in a row. The center one is a
//! static anchor. The trailing one is visible at rest, and as progress
//! rises it collapses while the leading one grows, making the arrow look
//! like it is sliding forward.

use arrowtap_motion::math;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pub width: f32,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArrowLayout {
    pub leading: Glyph,
    pub center: Glyph,
    pub trailing: Glyph,
}

impl ArrowLayout {
    /// Lay the glyphs out for the given animation progress.
    ///
    /// Progress beyond [0, 1] caused by spring overshoot is reflected in
    /// widths and scales, opacity is kept within [0, 1].
    #[must_use]
    pub fn new(progress: f32, config: &Config) -> Self {
        let leading = Glyph {
            width: glyph_width(config.min_glyph_width, config.icon_width, progress),
            scale: progress,
            opacity: progress.clamp(0.0, 1.0),
        };
        let center = Glyph {
            width: config.icon_width,
            scale: 1.0,
            opacity: 1.0,
        };
        let trailing = Glyph {
            width: glyph_width(config.icon_width, config.min_glyph_width, progress),
            scale: 1.0 - progress,
            opacity: (1.0 - progress).clamp(0.0, 1.0),
        };
        Self {
            leading,
            center,
            trailing,
        }
    }

    /// Sum of all glyph widths.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.leading.width + self.center.width + self.trailing.width
    }
}

fn glyph_width(from: f32, to: f32, progress: f32) -> f32 {
    math::lerp(from, to, progress).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn at_rest_only_trailing_glyph_is_visible_beside_anchor() {
        let layout = ArrowLayout::new(0.0, &Config::default());

        assert_relative_eq!(layout.leading.width, 1.0);
        assert_relative_eq!(layout.leading.scale, 0.0);
        assert_relative_eq!(layout.leading.opacity, 0.0);

        assert_relative_eq!(layout.trailing.width, 40.0);
        assert_relative_eq!(layout.trailing.scale, 1.0);
        assert_relative_eq!(layout.trailing.opacity, 1.0);
    }

    #[test]
    fn when_fully_activated_the_glyphs_are_mirrored() {
        let layout = ArrowLayout::new(1.0, &Config::default());

        assert_relative_eq!(layout.leading.width, 40.0);
        assert_relative_eq!(layout.leading.scale, 1.0);
        assert_relative_eq!(layout.leading.opacity, 1.0);

        assert_relative_eq!(layout.trailing.width, 1.0);
        assert_relative_eq!(layout.trailing.scale, 0.0);
        assert_relative_eq!(layout.trailing.opacity, 0.0);
    }

    #[test]
    fn when_half_activated_both_glyphs_are_halfway() {
        let layout = ArrowLayout::new(0.5, &Config::default());

        assert_relative_eq!(layout.leading.width, 20.5);
        assert_relative_eq!(layout.leading.scale, 0.5);
        assert_relative_eq!(layout.leading.opacity, 0.5);
        assert_eq!(layout.leading.width, layout.trailing.width);
        assert_eq!(layout.leading.scale, layout.trailing.scale);
        assert_eq!(layout.leading.opacity, layout.trailing.opacity);
    }

    #[test]
    fn when_spring_overshoots_opacity_stays_in_range() {
        let layout = ArrowLayout::new(1.05, &Config::default());
        assert_relative_eq!(layout.leading.opacity, 1.0);
        assert_relative_eq!(layout.trailing.opacity, 0.0);
        assert!(layout.leading.scale > 1.0);
        assert!(layout.trailing.width >= 0.0);
    }

    proptest! {
        #[test]
        fn center_glyph_never_moves(progress in -0.2f32..1.2) {
            let layout = ArrowLayout::new(progress, &Config::default());
            prop_assert_eq!(layout.center, Glyph { width: 40.0, scale: 1.0, opacity: 1.0 });
        }

        #[test]
        fn total_width_is_constant_within_range(progress in 0.0f32..1.0) {
            let layout = ArrowLayout::new(progress, &Config::default());
            prop_assert!((layout.width() - 81.0).abs() < 0.001);
        }
    }
}
