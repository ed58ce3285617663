use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TextureError},
    render::types::{channel_to_f32, Sample2d, Uv},
};

/// How out-of-range UV coordinates resolve when sampling.
///
/// The zoom factor on the CRT pass can push sample coordinates outside
/// `[0, 1]`; the wrap mode decides what those samples see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Tile the texture: the coordinate is taken modulo 1. This is the
    /// default, matching the GL repeat behavior the original demo relied on.
    Repeat,
    /// Extend the edge pixels outward.
    ClampToEdge,
}

impl Default for WrapMode {
    fn default() -> Self {
        Self::Repeat
    }
}

/// The static source image the first pass samples from.
///
/// Loaded once at startup and never replaced; sampling is nearest-neighbor
/// (the shaders operate on hard pixel taps, not filtered gradients).
#[derive(Clone, Debug)]
pub struct Texture {
    buffer: RgbaImage,
    wrap: WrapMode,
}

impl Texture {
    /// Wrap a decoded RGBA image as a texture
    pub fn new(buffer: RgbaImage, wrap: WrapMode) -> Result<Self> {
        if buffer.width() == 0 || buffer.height() == 0 {
            return Err(TextureError::EmptyTexture {
                width: buffer.width(),
                height: buffer.height(),
            }
            .into());
        }
        Ok(Self { buffer, wrap })
    }

    /// A 1x1 solid-color texture. Used as the visible fallback when the
    /// real image cannot be loaded.
    pub fn solid(color: [u8; 4]) -> Self {
        let mut buffer = RgbaImage::new(1, 1);
        buffer.put_pixel(0, 0, image::Rgba(color));
        Self { buffer, wrap: WrapMode::default() }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    fn resolve_axis(&self, coord: f32, extent: u32) -> u32 {
        let idx = (coord * extent as f32).floor() as i64;
        match self.wrap {
            WrapMode::Repeat => idx.rem_euclid(extent as i64) as u32,
            WrapMode::ClampToEdge => idx.clamp(0, extent as i64 - 1) as u32,
        }
    }
}

impl Sample2d for Texture {
    fn sample(&self, uv: Uv) -> [f32; 4] {
        let x = self.resolve_axis(uv.x, self.width());
        // Row 0 is the top of the image; v grows upward.
        let y = self.resolve_axis(1.0 - uv.y, self.height());
        let p = self.buffer.get_pixel(x, y).0;
        [
            channel_to_f32(p[0]),
            channel_to_f32(p[1]),
            channel_to_f32(p[2]),
            channel_to_f32(p[3]),
        ]
    }
}
