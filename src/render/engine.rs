use std::path::Path;

use tracing::{debug, info};

use crate::{
    config::Config,
    error::{RenderError, Result, ScreenError},
    render::driver::{FrameClock, FrameDriver},
    render::types::Frame,
    shader::{FrameUniforms, Pipeline},
    texture::{Texture, TextureLoader},
};

/// Runs one rendering session: texture load, frame loop, PNG output.
///
/// The session mirrors the shape of the original demos:
/// 1. Texture load - the single source image, awaited before any frame
/// 2. Frame loop - one pipeline render per driver tick, no frame overlap
/// 3. Present - each frame written as `frame_NNNN.png`
pub struct RenderEngine {
    config: Config,
    pipeline: Pipeline,
}

impl RenderEngine {
    /// Create a new engine with the given configuration and pass pipeline
    pub fn new(config: Config, pipeline: Pipeline) -> Self {
        Self { config, pipeline }
    }

    /// Render the configured number of frames of `image_path` into
    /// `output_dir`.
    ///
    /// The texture load completes before the first frame; a failed load is
    /// logged and replaced by the solid fallback color rather than
    /// rendering an unbound sampler.
    pub async fn run<P: AsRef<Path>>(&self, image_path: P, output_dir: P) -> Result<()> {
        let image_path = image_path.as_ref();
        let output_dir = output_dir.as_ref();

        self.config.validate()?;

        info!("Starting '{}' session", self.pipeline.name());
        info!("   Image: {:?}", image_path);
        info!("   Output: {:?}", output_dir);
        info!(
            "   {} frames at {} fps, {}x{}",
            self.config.render.frames,
            self.config.render.fps,
            self.config.surface.width,
            self.config.surface.height
        );

        // Step 1: texture load, gated before the first frame.
        let loader = TextureLoader::new(self.config.crt.wrap);
        let texture = loader.load_or_fallback(image_path).await;

        // Step 2: output directory.
        tokio::fs::create_dir_all(output_dir).await.map_err(|_| RenderError::OutputDirFailed {
            path: output_dir.display().to_string(),
        })?;

        // Step 3: frame loop on the deterministic clock.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.render.threads)
            .build()
            .map_err(|e| ScreenError::generic(format!("thread pool: {e}")))?;

        let mut driver = FrameDriver::new(FrameClock::Fixed { fps: self.config.render.fps });

        for index in 0..self.config.render.frames {
            let timestamp = driver.tick();
            let frame = pool.install(|| self.render_at(&texture, timestamp))?;

            let path = output_dir.join(format!("frame_{:04}.png", index));
            frame.save_png(&path).map_err(|e| RenderError::FrameWriteFailed {
                index,
                reason: e.to_string(),
            })?;

            debug!("Rendered frame {} at t={:.1}ms -> {:?}", index, timestamp, path);
        }

        info!(
            "Session complete: {} frames written to {:?}",
            self.config.render.frames, output_dir
        );
        Ok(())
    }

    /// Render a single frame at the given timestamp (milliseconds).
    ///
    /// Uniforms are rebuilt from scratch each call: the time-derived scalar
    /// plus the panel values copied verbatim, per the frame contract.
    pub fn render_at(&self, texture: &Texture, timestamp_ms: f64) -> Result<Frame> {
        let mut uniforms = FrameUniforms::at_time(timestamp_ms, self.config.crt.scale);
        uniforms.hsl = self.config.panel.uniforms();

        self.pipeline.render(
            texture,
            &uniforms,
            self.config.surface.width,
            self.config.surface.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::PipelineRegistry;
    use tempfile::tempdir;

    fn tiny_config() -> Config {
        let mut config = Config::default();
        config.surface.width = 4;
        config.surface.height = 4;
        config.render.frames = 2;
        config.render.threads = 1;
        config
    }

    fn write_test_image(path: &std::path::Path) {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 128, 255, 255]));
        img.save(path).unwrap();
    }

    #[tokio::test]
    async fn test_run_writes_expected_frames() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("source.png");
        let out_dir = dir.path().join("frames");
        write_test_image(&image_path);

        let pipeline = PipelineRegistry::new().get_pipeline("tv").unwrap();
        let engine = RenderEngine::new(tiny_config(), pipeline);

        engine.run(&image_path, &out_dir).await.unwrap();

        assert!(out_dir.join("frame_0000.png").exists());
        assert!(out_dir.join("frame_0001.png").exists());
        assert!(!out_dir.join("frame_0002.png").exists());
    }

    #[tokio::test]
    async fn test_missing_image_renders_fallback() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("frames");

        let pipeline = PipelineRegistry::new().get_pipeline("tv").unwrap();
        let mut config = tiny_config();
        config.render.frames = 1;
        let engine = RenderEngine::new(config, pipeline);

        engine
            .run(&dir.path().join("missing.png"), &out_dir)
            .await
            .unwrap();

        // The session still produces a frame, shaded from the magenta
        // fallback texture.
        let frame = image::open(out_dir.join("frame_0000.png")).unwrap().to_rgba8();
        let px = frame.get_pixel(2, 2);
        assert!(px[0] > 0, "red channel should carry the fallback color");
        assert_eq!(px[3], 255);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_rendering() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("source.png");
        write_test_image(&image_path);

        let pipeline = PipelineRegistry::new().get_pipeline("tv").unwrap();
        let mut config = tiny_config();
        config.surface.height = 0;
        let engine = RenderEngine::new(config, pipeline);

        let out_dir = dir.path().join("frames");
        assert!(engine.run(&image_path, &out_dir).await.is_err());
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_render_at_is_deterministic() {
        let pipeline = PipelineRegistry::new().get_pipeline("adjust").unwrap();
        let engine = RenderEngine::new(tiny_config(), pipeline);
        let texture = Texture::solid([200, 40, 90, 255]);

        let a = engine.render_at(&texture, 125.0).unwrap();
        let b = engine.render_at(&texture, 125.0).unwrap();
        assert_eq!(a.as_image().as_raw(), b.as_image().as_raw());
    }
}
