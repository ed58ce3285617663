//! # Shader Pass System
//!
//! CPU renditions of the two fragment programs: each pass is a pure
//! per-pixel function `(uv, uniforms, sampler) -> color` run over a whole
//! frame, with all per-frame inputs gathered into one uniform struct.
//!
//! ## Built-in passes
//!
//! - **crt**: scanlines plus chromatic fringing, applied to the source texture
//! - **hsl**: hue/saturation/lightness adjustment over an already rendered frame
//!
//! ## Usage
//!
//! ```rust,no_run
//! use retro_screen::shader::{FrameUniforms, PipelineRegistry};
//! use retro_screen::texture::Texture;
//!
//! # fn main() -> retro_screen::error::Result<()> {
//! let registry = PipelineRegistry::new();
//! let pipeline = registry.get_pipeline("adjust")?;
//!
//! let texture = Texture::solid([255, 0, 255, 255]);
//! let frame = pipeline.render(&texture, &FrameUniforms::default(), 640, 480)?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod registry;
pub mod traits;

// Pass implementations
pub mod crt;
pub mod hsl;

// Re-exports for convenience
pub use registry::{Pipeline, PipelineRegistry};
pub use traits::{CrtUniforms, FrameUniforms, HslUniforms, ShaderPass};

pub use crt::CrtPass;
pub use hsl::HslPass;
