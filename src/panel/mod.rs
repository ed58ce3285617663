//! # Control Panel
//!
//! The three bounded numeric controls feeding the HSL adjustment pass.
//! Values are clamped to their range and quantized to the slider step;
//! each frame the driver copies the current values verbatim into the
//! uniform set, with no smoothing or debouncing in between.

use serde::{Deserialize, Serialize};

use crate::shader::HslUniforms;

/// Step granularity shared by all three sliders.
pub const SLIDER_STEP: f32 = 0.05;

/// A bounded numeric control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl Slider {
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        let mut slider = Self { value, min, max, step };
        slider.set(value);
        slider
    }

    /// Set the slider, clamping to the range and snapping to the step grid.
    pub fn set(&mut self, value: f32) {
        let snapped = if self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        };
        self.value = snapped.clamp(self.min, self.max);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

/// The hue / saturation / lightness slider triple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlPanel {
    pub hue: Slider,
    pub saturation: Slider,
    pub lightness: Slider,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            hue: Slider::new(0.0, -1.0, 1.0, SLIDER_STEP),
            saturation: Slider::new(1.0, 0.0, 2.0, SLIDER_STEP),
            lightness: Slider::new(0.0, -1.0, 1.0, SLIDER_STEP),
        }
    }
}

impl ControlPanel {
    /// Panel with explicit initial positions (still clamped and snapped).
    pub fn with_values(hue: f32, saturation: f32, lightness: f32) -> Self {
        let mut panel = Self::default();
        panel.hue.set(hue);
        panel.saturation.set(saturation);
        panel.lightness.set(lightness);
        panel
    }

    /// Copy the current slider positions into a uniform set.
    pub fn uniforms(&self) -> HslUniforms {
        HslUniforms {
            hue_shift: self.hue.value(),
            saturation_scale: self.saturation.value(),
            lightness_shift: self.lightness.value(),
        }
    }
}
