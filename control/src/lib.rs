//! Logic of a play button, passing user input to animations and their
//! results back to the renderer.
//!
//! It is meant to run in a loop ticking at a fixed rate. The host feeds raw
//! press state in and draws whatever `Appearance` it gets back. Nothing is
//! drawn by this crate.
//!
//! ```text
//!              [ Host loop ]
//!                 |     A
//!      (Snapshot) |     | (Reaction)
//!                 V     |
//!              [  Store  ]
//!              |    |    |
//!    [PressDebouncer] | [Sequencer]
//!              |    |    |
//!       [Highlight] | [ArrowLayout]
//! ```
//!
//! Holding the button lights up the highlight circle, throttled so quick
//! taps do not make it flicker. Releasing the button springs the arrow
//! forward and snaps it back shortly after.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod config;
pub mod highlight;
pub mod indicator;
pub mod input;
mod log;
pub mod output;
pub mod press;
pub mod sequencer;
mod store;

pub use config::{Config, ConfigError};
pub use input::snapshot::Snapshot;
pub use output::{Appearance, Event, Events, Reaction};
pub use store::Store;
