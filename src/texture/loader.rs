use std::path::Path;

use tracing::{debug, warn};

use crate::{
    error::{Result, TextureError},
    texture::types::{Texture, WrapMode},
};

/// Magenta stands in when the real image cannot be loaded, so a broken
/// asset renders as an obviously wrong solid color instead of a blank frame.
pub const FALLBACK_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Loads the single source image for a session.
///
/// The load is asynchronous but the engine awaits it before rendering the
/// first frame; there is deliberately no "render while still loading" path.
pub struct TextureLoader {
    wrap: WrapMode,
}

impl TextureLoader {
    pub fn new(wrap: WrapMode) -> Self {
        Self { wrap }
    }

    /// Load and decode the image at `path`.
    ///
    /// Any format the `image` crate's PNG/JPEG decoders accept works.
    pub async fn load<P: AsRef<Path>>(&self, path: P) -> Result<Texture> {
        let path = path.as_ref();

        let bytes = tokio::fs::read(path).await.map_err(|_| TextureError::LoadFailed {
            path: path.display().to_string(),
        })?;

        let decoded = image::load_from_memory(&bytes).map_err(|e| TextureError::DecodeFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let buffer = decoded.to_rgba8();
        debug!("Decoded texture {:?}: {}x{}", path, buffer.width(), buffer.height());

        Texture::new(buffer, self.wrap)
    }

    /// Load `path`, falling back to a solid magenta texture on failure.
    ///
    /// The failure is logged, not propagated: a missing asset should be
    /// visible in the output, not fatal to the session.
    pub async fn load_or_fallback<P: AsRef<Path>>(&self, path: P) -> Texture {
        let path = path.as_ref();
        match self.load(path).await {
            Ok(texture) => texture,
            Err(e) => {
                warn!("Texture load failed ({}); rendering fallback color", e);
                Texture::solid(FALLBACK_COLOR)
            }
        }
    }
}
