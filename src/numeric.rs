//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Widen a single-precision literal to the working precision
///
/// Cut constants are single-precision values, like the kinematics stored in
/// reconstruction banks, so e.g. the default beam energy is 10.600000381 GeV.
///
#[allow(clippy::unnecessary_cast)]
pub fn widen(x: f32) -> Float {
    x as Float
}
