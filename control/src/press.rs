//! Calm down raw press state before it reaches the highlight.

use crate::log;

/// Throttles press state changes to at most one per window.
///
/// Call `update` with every raw press state observed and `tick` once per
/// control cycle. Repeated equal states are ignored. The first change opens
/// a window; changes arriving while it is open only replace the latched
/// state. When the window closes, the latest latched state is adopted.
///
/// `tick` reports the new state only when the adopted state differs from
/// the previous one, so a press released within the window never shows up.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressDebouncer {
    window: u32,
    raw: bool,
    latched: bool,
    remaining: Option<u32>,
    value: bool,
}

impl PressDebouncer {
    #[must_use]
    pub fn new(window: u32) -> Self {
        Self {
            window,
            raw: false,
            latched: false,
            remaining: None,
            value: false,
        }
    }

    pub fn update(&mut self, pressed: bool) {
        if pressed == self.raw {
            return;
        }
        self.raw = pressed;
        self.latched = pressed;
        if self.remaining.is_none() {
            self.remaining = Some(self.window);
        }
    }

    pub fn tick(&mut self) -> Option<bool> {
        let remaining = self.remaining?.saturating_sub(1);
        if remaining > 0 {
            self.remaining = Some(remaining);
            return None;
        }

        self.remaining = None;
        if self.latched == self.value {
            return None;
        }

        self.value = self.latched;
        log::debug!("Throttled press state changed to {}", self.value);
        Some(self.value)
    }

    /// The throttled press state.
    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    #[must_use]
    pub fn is_window_open(&self) -> bool {
        self.remaining.is_some()
    }

    /// Drop the open window. Whatever was latched in it is forgotten.
    pub fn cancel(&mut self) {
        self.remaining = None;
        self.latched = self.value;
    }
}
