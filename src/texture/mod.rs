//! # Texture Source
//!
//! Loading and sampling of the single static source image. The texture is
//! loaded once at session start and never replaced.

pub mod loader;
pub mod types;

pub use loader::{TextureLoader, FALLBACK_COLOR};
pub use types::{Texture, WrapMode};
