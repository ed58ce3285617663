//! # CRT Pass
//!
//! Recreates the look of an old tube TV: animated sine-wave scanlines and
//! a three-tap horizontal chromatic fringe, blended 70/30 over the image.

mod effect;

pub use effect::{scanline_brightness, shade_pixel, CrtPass};

/// Vertical frequency of the scanline sine wave (radians per UV unit).
pub const SCANLINE_FREQUENCY: f32 = 2000.0;

/// Horizontal UV offset of the red/blue fringe taps.
pub const FRINGE_OFFSET: f32 = 0.004;

/// Portion of the output taken from the scanline brightness; the rest is
/// the fringed color.
pub const SCANLINE_BLEND: f32 = 0.3;

/// Factor the time uniform is multiplied by inside the sine phase.
pub const TIME_RATE: f32 = 10.0;
