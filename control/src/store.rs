//! The button as a whole, passing user input to animations and their
//! results back to the host.

use core::mem;

use crate::config::{Config, ConfigError};
use crate::highlight::Highlight;
use crate::indicator::ArrowLayout;
use crate::input::button::Button;
use crate::input::snapshot::Snapshot;
use crate::log;
use crate::output::{Appearance, Event, Events, Reaction};
use crate::press::PressDebouncer;
use crate::sequencer::Sequencer;

/// The main store of the button.
///
/// This struct is the central piece of the control crate. It takes
/// `Snapshot` on its input, passes it to the press debouncer and the
/// animation sequencer, and on every tick turns their state into an
/// `Appearance` for the host to draw.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    state: State,
    config: Config,
    input: Button,
    debouncer: PressDebouncer,
    highlight: Highlight,
    sequencer: Sequencer,
    events: Events,
}

/// Lifecycle of the store.
///
/// Once disposed, the store ignores all input and never changes again.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum State {
    Active,
    Disposed,
}

#[allow(clippy::new_without_default)]
impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Build a store with custom constants.
    ///
    /// # Errors
    ///
    /// Fails with `ConfigError` when the configuration does not pass
    /// `Config::validate`.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        Self {
            state: State::Active,
            debouncer: PressDebouncer::new(config.ticks(config.throttle_duration)),
            highlight: Highlight::new(&config),
            sequencer: Sequencer::new(&config),
            input: Button::default(),
            events: Events::new(),
            config,
        }
    }

    /// Pass the raw press state.
    ///
    /// Releasing a pressed button activates the split arrow animation.
    pub fn apply_input_snapshot(&mut self, snapshot: Snapshot) {
        if self.is_disposed() {
            return;
        }

        self.input.update(snapshot.pressed);
        self.debouncer.update(snapshot.pressed);

        if self.input.released {
            self.activate();
        }
    }

    /// Start the split arrow animation unless it is already running.
    pub fn activate(&mut self) {
        if self.is_disposed() {
            return;
        }

        let was_running = self.sequencer.is_running();
        self.sequencer.activate();
        if !was_running && self.sequencer.is_running() {
            self.push_event(Event::AnimationStarted);
        }
    }

    pub fn tick(&mut self) -> Reaction {
        if self.is_disposed() {
            return Reaction {
                appearance: self.appearance(),
                events: Events::new(),
            };
        }

        if let Some(pressed) = self.debouncer.tick() {
            if self.highlight.show(pressed) {
                self.push_event(if pressed {
                    Event::HighlightShown
                } else {
                    Event::HighlightHidden
                });
            }
        }
        self.highlight.tick();

        if self.sequencer.tick() {
            self.push_event(Event::AnimationReset);
        }

        Reaction {
            appearance: self.appearance(),
            events: mem::take(&mut self.events),
        }
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        Appearance {
            highlight: self.highlight.appearance(&self.config),
            arrow: ArrowLayout::new(self.sequencer.progress(), &self.config),
        }
    }

    /// Release the throttle window and the pending reset.
    ///
    /// Safe to call at any point, including while the animation runs.
    /// Calling it more than once has no further effect.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        log::info!("Disposing button");
        self.debouncer.cancel();
        self.sequencer.cancel();
        self.events.clear();
        self.state = State::Disposed;
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.state == State::Disposed
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_shown()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.sequencer.progress()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn push_event(&mut self, event: Event) {
        // NOTE: The capacity is set to accommodate all events of a tick.
        let _ = self.events.push(event);
    }
}
