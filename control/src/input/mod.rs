//! Abstraction of raw user input.

pub mod button;
pub mod snapshot;
