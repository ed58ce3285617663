use std::collections::HashMap;

use crate::{
    error::{RenderError, Result, ShaderError},
    render::types::{Frame, Sample2d},
    shader::{crt::CrtPass, hsl::HslPass, traits::{FrameUniforms, ShaderPass}},
};

/// An ordered chain of shader passes.
///
/// The first pass samples the source texture; every later pass samples the
/// frame the previous pass produced, the way a post-processing compositor
/// feeds one pass's framebuffer into the next.
pub struct Pipeline {
    name: String,
    passes: Vec<Box<dyn ShaderPass>>,
}

impl Pipeline {
    pub fn new<S: Into<String>>(name: S, passes: Vec<Box<dyn ShaderPass>>) -> Self {
        Self { name: name.into(), passes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passes(&self) -> &[Box<dyn ShaderPass>] {
        &self.passes
    }

    /// Render one frame of size `width` x `height` from `source`.
    pub fn render(
        &self,
        source: &dyn Sample2d,
        uniforms: &FrameUniforms,
        width: u32,
        height: u32,
    ) -> Result<Frame> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySurface { width, height }.into());
        }

        let (first, rest) = self.passes.split_first().ok_or_else(|| ShaderError::PassFailed {
            pass: self.name.clone(),
            reason: "pipeline has no passes".to_string(),
        })?;

        let mut current = Frame::new_black(width, height);
        first.apply(source, uniforms, &mut current)?;

        for pass in rest {
            let previous = current.clone();
            pass.apply(&previous, uniforms, &mut current)?;
        }

        Ok(current)
    }
}

/// Registry for the available demo pipelines
///
/// The registry provides a central place to discover and instantiate the
/// pass chains the CLI exposes as demos.
pub struct PipelineRegistry {
    pipelines: HashMap<String, Box<dyn Fn() -> Pipeline>>,
}

impl PipelineRegistry {
    /// Create a new registry with the built-in demos
    pub fn new() -> Self {
        let mut registry = Self { pipelines: HashMap::new() };
        registry.register_builtin_pipelines();
        registry
    }

    fn register_builtin_pipelines(&mut self) {
        // Program 1: the CRT pass straight onto the surface.
        self.pipelines.insert(
            "tv".to_string(),
            Box::new(|| Pipeline::new("tv", vec![Box::new(CrtPass::new())])),
        );

        // Program 2: CRT pass, then the HSL adjustment over its output.
        self.pipelines.insert(
            "adjust".to_string(),
            Box::new(|| {
                Pipeline::new(
                    "adjust",
                    vec![Box::new(CrtPass::new()), Box::new(HslPass::new())],
                )
            }),
        );
    }

    /// Register a custom pipeline
    pub fn register<F>(&mut self, name: String, factory: F)
    where
        F: Fn() -> Pipeline + 'static,
    {
        self.pipelines.insert(name, Box::new(factory));
    }

    /// Get a pipeline by demo name, or an error naming the unknown demo
    pub fn get_pipeline(&self, name: &str) -> Result<Pipeline> {
        self.pipelines
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ShaderError::PipelineNotFound { name: name.to_string() }.into())
    }

    /// Get all available demo names
    pub fn available_demos(&self) -> Vec<String> {
        let mut names: Vec<String> = self.pipelines.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a demo is available
    pub fn has_demo(&self, name: &str) -> bool {
        self.pipelines.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    #[test]
    fn test_builtin_demos_available() {
        let registry = PipelineRegistry::new();

        assert!(registry.has_demo("tv"));
        assert!(registry.has_demo("adjust"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_pipeline() {
        let registry = PipelineRegistry::new();

        let tv = registry.get_pipeline("tv").unwrap();
        assert_eq!(tv.name(), "tv");
        assert_eq!(tv.passes().len(), 1);

        let adjust = registry.get_pipeline("adjust").unwrap();
        assert_eq!(adjust.passes().len(), 2);
        assert_eq!(adjust.passes()[0].name(), "crt");
        assert_eq!(adjust.passes()[1].name(), "hsl");

        assert!(registry.get_pipeline("unknown").is_err());
    }

    #[test]
    fn test_available_demos_sorted() {
        let registry = PipelineRegistry::new();
        assert_eq!(registry.available_demos(), vec!["adjust", "tv"]);
    }

    #[test]
    fn test_custom_pipeline_registration() {
        let mut registry = PipelineRegistry::new();

        registry.register("hsl_only".to_string(), || {
            Pipeline::new("hsl_only", vec![Box::new(HslPass::new())])
        });

        assert!(registry.has_demo("hsl_only"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_zero_extent_surface_is_an_error() {
        let registry = PipelineRegistry::new();
        let pipeline = registry.get_pipeline("tv").unwrap();
        let tex = Texture::solid([0, 0, 0, 255]);

        assert!(pipeline.render(&tex, &FrameUniforms::default(), 0, 4).is_err());
        assert!(pipeline.render(&tex, &FrameUniforms::default(), 4, 0).is_err());
    }

    #[test]
    fn test_empty_pipeline_is_an_error() {
        let pipeline = Pipeline::new("empty", vec![]);
        let tex = Texture::solid([0, 0, 0, 255]);
        let result = pipeline.render(&tex, &FrameUniforms::default(), 2, 2);
        assert!(result.is_err());
    }

    #[test]
    fn test_adjust_chains_crt_into_hsl() {
        // With zero panel offsets the adjust demo must match the tv demo
        // except for alpha, which the post pass forces opaque.
        let registry = PipelineRegistry::new();
        let tex = Texture::solid([40, 80, 120, 200]);
        let uniforms = FrameUniforms::default();

        let tv = registry.get_pipeline("tv").unwrap().render(&tex, &uniforms, 4, 4).unwrap();
        let adjust =
            registry.get_pipeline("adjust").unwrap().render(&tex, &uniforms, 4, 4).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let a = tv.get_pixel(x, y);
                let b = adjust.get_pixel(x, y);
                for c in 0..3 {
                    // One quantization step of slack: the post pass re-reads
                    // the already rounded framebuffer.
                    assert!((a[c] as i16 - b[c] as i16).abs() <= 1);
                }
                assert_eq!(a[3], 200);
                assert_eq!(b[3], 255);
            }
        }
    }
}
