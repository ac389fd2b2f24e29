//! Interpolation curves and animated values driven by a fixed-rate loop.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod animated_value;
pub mod curve;
pub mod ease;
pub mod math;
pub mod spring;
