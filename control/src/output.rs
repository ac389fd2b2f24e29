//! Everything the host needs to draw the button.

use heapless::Vec;

use crate::highlight::HighlightAppearance;
use crate::indicator::ArrowLayout;

/// Desired look of the button after a tick.
///
/// The host is expected to render this as is: the highlight circle at the
/// bottom, the arrow glyphs on top of it, scaled by `label_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Appearance {
    pub highlight: HighlightAppearance,
    pub arrow: ArrowLayout,
}

/// Notable changes that happened since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    HighlightShown,
    HighlightHidden,
    AnimationStarted,
    AnimationReset,
}

// NOTE: The capacity fits the worst case of a single tick, where the
// highlight toggles, the animation resets and a new one starts.
pub type Events = Vec<Event, 4>;

/// Response of the store to a tick.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    pub appearance: Appearance,
    pub events: Events,
}
