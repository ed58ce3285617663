use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    render::types::{channel_to_u8, Frame, Sample2d, Uv},
};

/// Core trait that all shader passes implement
///
/// A pass reads from a sampler (the source texture for the first pass, the
/// previously rendered frame for a post-processing pass) and writes every
/// pixel of the target frame. Passes hold no state of their own; everything
/// that varies per frame arrives through [`FrameUniforms`].
pub trait ShaderPass: Send + Sync {
    /// Returns the unique name of this pass
    fn name(&self) -> &str;

    /// Returns a human-readable description of this pass
    fn description(&self) -> &str;

    /// Run the pass over every pixel of `target`.
    ///
    /// # Arguments
    ///
    /// * `input` - The sampler this pass reads from
    /// * `uniforms` - Per-frame parameter set, rebuilt by the driver each frame
    /// * `target` - The frame to write, its full extent
    fn apply(&self, input: &dyn Sample2d, uniforms: &FrameUniforms, target: &mut Frame)
        -> Result<()>;
}

/// Uniforms for the CRT pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CrtUniforms {
    /// Animation time. The driver supplies the frame timestamp divided by
    /// 10, matching the source clock the scanline phase was tuned against.
    pub time: f32,

    /// Texture-space zoom factor centered on (0.5, 0.5). 1.0 is identity.
    pub scale: f32,
}

impl Default for CrtUniforms {
    fn default() -> Self {
        Self { time: 0.0, scale: 1.0 }
    }
}

/// Uniforms for the HSL adjustment pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HslUniforms {
    /// Additive hue offset in turns, range -1.0..1.0.
    pub hue_shift: f32,

    /// Multiplicative saturation factor, range 0.0..2.0.
    pub saturation_scale: f32,

    /// Additive lightness offset, range -1.0..1.0.
    pub lightness_shift: f32,
}

impl Default for HslUniforms {
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            saturation_scale: 1.0,
            lightness_shift: 0.0,
        }
    }
}

/// The complete per-frame parameter set.
///
/// Built fresh by the frame driver on every tick and passed by reference
/// into each pass, so there is no shared mutable uniform state anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameUniforms {
    pub crt: CrtUniforms,
    pub hsl: HslUniforms,
}

impl FrameUniforms {
    /// Uniforms for a frame at timestamp `time_ms` (milliseconds).
    pub fn at_time(time_ms: f64, scale: f32) -> Self {
        Self {
            crt: CrtUniforms {
                time: (time_ms / 10.0) as f32,
                scale,
            },
            hsl: HslUniforms::default(),
        }
    }
}

/// Evaluate a pure per-pixel shader over the whole target, one rayon job
/// per row. `shade` must not depend on evaluation order.
pub(crate) fn run_pixel_shader<F>(target: &mut Frame, shade: F)
where
    F: Fn(Uv) -> [f32; 4] + Sync,
{
    let width = target.width() as usize;
    let w = target.width() as f32;
    let h = target.height() as f32;

    target
        .as_raw_mut()
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let v = 1.0 - (y as f32 + 0.5) / h;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let uv = Uv::new((x as f32 + 0.5) / w, v);
                let color = shade(uv);
                px[0] = channel_to_u8(color[0]);
                px[1] = channel_to_u8(color[1]);
                px[2] = channel_to_u8(color[2]);
                px[3] = channel_to_u8(color[3]);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_pixel_shader_covers_every_pixel() {
        let mut frame = Frame::new_black(4, 3);
        run_pixel_shader(&mut frame, |_| [1.0, 0.5, 0.0, 1.0]);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(frame.get_pixel(x, y), [255, 128, 0, 255]);
            }
        }
    }

    #[test]
    fn test_run_pixel_shader_passes_pixel_center_uv() {
        let mut frame = Frame::new_black(2, 2);
        // Encode the UV into the output so we can check the mapping.
        run_pixel_shader(&mut frame, |uv| [uv.x, uv.y, 0.0, 1.0]);

        let top_left = frame.get_pixel(0, 0);
        assert_eq!(top_left[0], channel_to_u8(0.25));
        assert_eq!(top_left[1], channel_to_u8(0.75));

        let bottom_right = frame.get_pixel(1, 1);
        assert_eq!(bottom_right[0], channel_to_u8(0.75));
        assert_eq!(bottom_right[1], channel_to_u8(0.25));
    }

    #[test]
    fn test_uniforms_time_is_timestamp_over_ten() {
        let uniforms = FrameUniforms::at_time(250.0, 1.0);
        assert!((uniforms.crt.time - 25.0).abs() < 1e-6);
        assert_eq!(uniforms.crt.scale, 1.0);
    }
}
