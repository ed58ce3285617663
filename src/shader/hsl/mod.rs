//! # HSL Adjustment Pass
//!
//! Full-frame post-processing pass: each pixel of the previously rendered
//! frame is converted to hue/saturation/lightness, offset by the control
//! panel values, and converted back. Output is fully opaque.

mod effect;

pub use effect::{shade_pixel, HslPass};
