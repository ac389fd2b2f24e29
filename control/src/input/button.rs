//! Manage button's state.

/// Use this to hold button's state over time.
///
/// Detects the release edge, which is what activates the button, the same
/// way a native button fires its action when the finger lifts.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub released: bool,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.released = was_pressed && !self.pressed;
    }
}
