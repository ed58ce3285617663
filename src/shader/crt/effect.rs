use crate::{
    error::Result,
    render::types::{Frame, Sample2d, Uv},
    shader::traits::{run_pixel_shader, CrtUniforms, FrameUniforms, ShaderPass},
};

use super::{FRINGE_OFFSET, SCANLINE_BLEND, SCANLINE_FREQUENCY, TIME_RATE};

/// CRT/scanline effect pass
pub struct CrtPass;

impl CrtPass {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CrtPass {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanline brightness at vertical coordinate `y` and animation time `t`.
///
/// A high-frequency sine over the vertical axis, giving alternating bright
/// and dark horizontal bands that drift as `t` advances. Pure: equal
/// inputs always yield equal brightness.
pub fn scanline_brightness(y: f32, time: f32) -> f32 {
    0.5 + 0.5 * (y * SCANLINE_FREQUENCY + time * TIME_RATE).sin()
}

/// The CRT pass evaluated at a single UV coordinate.
///
/// 1. Center-scale the sampling coordinate around (0.5, 0.5).
/// 2. Take alpha from the unscaled sample.
/// 3. Sample red/green/blue from three horizontally offset taps of the
///    scaled coordinate (chromatic fringe).
/// 4. Blend the fringed color toward the scanline brightness.
pub fn shade_pixel(uv: Uv, uniforms: &CrtUniforms, image: &dyn Sample2d) -> [f32; 4] {
    let scaled = Uv::new(
        (uv.x - 0.5) * uniforms.scale + 0.5,
        (uv.y - 0.5) * uniforms.scale + 0.5,
    );

    let alpha = image.sample(uv)[3];
    let brightness = scanline_brightness(uv.y, uniforms.time);

    let r = image.sample(scaled.offset_x(FRINGE_OFFSET))[0];
    let g = image.sample(scaled)[1];
    let b = image.sample(scaled.offset_x(-FRINGE_OFFSET))[2];

    [
        r + (brightness - r) * SCANLINE_BLEND,
        g + (brightness - g) * SCANLINE_BLEND,
        b + (brightness - b) * SCANLINE_BLEND,
        alpha,
    ]
}

impl ShaderPass for CrtPass {
    fn name(&self) -> &str {
        "crt"
    }

    fn description(&self) -> &str {
        "Old-TV scanlines with horizontal chromatic fringing"
    }

    fn apply(
        &self,
        input: &dyn Sample2d,
        uniforms: &FrameUniforms,
        target: &mut Frame,
    ) -> Result<()> {
        let crt = uniforms.crt;
        run_pixel_shader(target, |uv| shade_pixel(uv, &crt, input));
        Ok(())
    }
}
