use crate::{
    error::Result,
    render::types::{Frame, Sample2d, Uv},
    shader::color::{hsl_to_rgb, rgb_to_hsl},
    shader::traits::{run_pixel_shader, FrameUniforms, HslUniforms, ShaderPass},
};

/// Hue/saturation/lightness adjustment pass
pub struct HslPass;

impl HslPass {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HslPass {
    fn default() -> Self {
        Self::new()
    }
}

/// The adjustment evaluated on a single input color.
///
/// Hue shifts wrap modulo one turn, saturation scales and clamps,
/// lightness shifts and clamps. The input alpha is discarded; the pass
/// always emits opaque pixels.
pub fn shade_pixel(source: [f32; 4], uniforms: &HslUniforms) -> [f32; 4] {
    let adjusted = rgb_to_hsl([source[0], source[1], source[2]])
        .shift_hue(uniforms.hue_shift)
        .scale_saturation(uniforms.saturation_scale)
        .shift_lightness(uniforms.lightness_shift);

    let [r, g, b] = hsl_to_rgb(adjusted);
    [r, g, b, 1.0]
}

impl ShaderPass for HslPass {
    fn name(&self) -> &str {
        "hsl"
    }

    fn description(&self) -> &str {
        "Hue/saturation/lightness adjustment over the rendered frame"
    }

    fn apply(
        &self,
        input: &dyn Sample2d,
        uniforms: &FrameUniforms,
        target: &mut Frame,
    ) -> Result<()> {
        let hsl = uniforms.hsl;
        run_pixel_shader(target, |uv: Uv| shade_pixel(input.sample(uv), &hsl));
        Ok(())
    }
}
