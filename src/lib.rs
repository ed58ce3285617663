//! # Retro-Screen
//!
//! Render a still image through CPU renditions of two classic pixel
//! shaders: an old-TV pass (animated sine scanlines plus horizontal
//! chromatic fringing) and an optional hue/saturation/lightness
//! adjustment post-pass driven by three bounded control values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use retro_screen::{
//!     config::Config,
//!     render::RenderEngine,
//!     shader::PipelineRegistry,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let registry = PipelineRegistry::new();
//! let pipeline = registry.get_pipeline("adjust")?;
//!
//! let engine = RenderEngine::new(config, pipeline);
//! engine.run("garfield.jpg", "frames/").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`render`] - Frame surface, frame driver and session engine
//! - [`shader`] - The two passes, their uniforms and the demo registry
//! - [`texture`] - Source image loading and sampling
//! - [`panel`] - The hue/saturation/lightness control sliders
//! - [`config`] - Configuration management
//!
//! ## Writing a custom pass
//!
//! A pass is a pure per-pixel function wired through the
//! [`ShaderPass`](shader::ShaderPass) trait:
//!
//! ```rust,no_run
//! use retro_screen::render::{Frame, Sample2d};
//! use retro_screen::shader::{FrameUniforms, ShaderPass};
//! use retro_screen::error::Result;
//!
//! struct Invert;
//!
//! impl ShaderPass for Invert {
//!     fn name(&self) -> &str {
//!         "invert"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Inverts every channel"
//!     }
//!
//!     fn apply(&self, input: &dyn Sample2d, _uniforms: &FrameUniforms, target: &mut Frame)
//!         -> Result<()>
//!     {
//!         for y in 0..target.height() {
//!             for x in 0..target.width() {
//!                 let c = input.sample(target.uv_at(x, y));
//!                 target.set_pixel(x, y, [
//!                     255 - (c[0] * 255.0) as u8,
//!                     255 - (c[1] * 255.0) as u8,
//!                     255 - (c[2] * 255.0) as u8,
//!                     255,
//!                 ]);
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod panel;
pub mod render;
pub mod shader;
pub mod texture;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{Result, ScreenError},
    panel::ControlPanel,
    render::RenderEngine,
    shader::{FrameUniforms, PipelineRegistry, ShaderPass},
    texture::Texture,
};
