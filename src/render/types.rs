use image::{ImageBuffer, Rgba, RgbaImage};

/// Normalized 2D texture-space coordinate.
///
/// `(0, 0)` is the bottom-left of the surface and `(1, 1)` the top-right;
/// values outside `[0, 1]` are legal and resolve through the sampler's
/// wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uv {
    pub x: f32,
    pub y: f32,
}

impl Uv {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the horizontal coordinate, leaving the vertical untouched.
    pub fn offset_x(self, dx: f32) -> Self {
        Self { x: self.x + dx, y: self.y }
    }
}

/// Anything a shader can sample a color from: the source texture for the
/// first pass, the previously rendered frame for a post-processing pass.
///
/// Returned channels are RGBA in `[0, 1]`.
pub trait Sample2d: Sync {
    fn sample(&self, uv: Uv) -> [f32; 4];
}

/// A single rendered frame
///
/// This is a simple wrapper around an RGBA image buffer that provides
/// convenient methods for pixel access and the UV mapping shaders use.
#[derive(Clone, Debug)]
pub struct Frame {
    buffer: RgbaImage,
}

impl Frame {
    /// Create a new frame from an RGBA image buffer
    pub fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with opaque black
    pub fn new_black(width: u32, height: u32) -> Self {
        Self::new_filled(width, height, [0, 0, 0, 255])
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgba(color));
        Self { buffer }
    }

    /// Get the width of the frame
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the frame
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGBA array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        self.buffer.put_pixel(x, y, Rgba(color));
    }

    /// UV coordinate of the center of pixel `(x, y)`.
    ///
    /// Row 0 of the buffer is the top of the image, so `v` decreases as `y`
    /// grows; this matches the texture orientation of the source material.
    pub fn uv_at(&self, x: u32, y: u32) -> Uv {
        Uv {
            x: (x as f32 + 0.5) / self.width() as f32,
            y: 1.0 - (y as f32 + 0.5) / self.height() as f32,
        }
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Raw mutable pixel bytes, row-major RGBA. Used for parallel row shading.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut *self.buffer
    }

    /// Create a frame from raw RGBA bytes
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        ImageBuffer::from_raw(width, height, data).map(|buffer| Self { buffer })
    }

    /// Save the frame as a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.buffer.save(path)
    }
}

/// Unit-interval float channel to byte, rounding to nearest.
pub(crate) fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Byte channel to unit-interval float.
pub(crate) fn channel_to_f32(v: u8) -> f32 {
    v as f32 / 255.0
}

impl Sample2d for Frame {
    /// Nearest-neighbor sample; coordinates are clamped to the frame edge,
    /// which is the only behavior a post-pass reading its own input needs.
    fn sample(&self, uv: Uv) -> [f32; 4] {
        let w = self.width();
        let h = self.height();
        let x = ((uv.x * w as f32).floor() as i64).clamp(0, w as i64 - 1) as u32;
        let row = ((1.0 - uv.y) * h as f32).floor() as i64;
        let y = row.clamp(0, h as i64 - 1) as u32;
        let p = self.get_pixel(x, y);
        [
            channel_to_f32(p[0]),
            channel_to_f32(p[1]),
            channel_to_f32(p[2]),
            channel_to_f32(p[3]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_maps_pixel_centers() {
        let frame = Frame::new_black(2, 2);

        let top_left = frame.uv_at(0, 0);
        assert!((top_left.x - 0.25).abs() < 1e-6);
        assert!((top_left.y - 0.75).abs() < 1e-6);

        let bottom_right = frame.uv_at(1, 1);
        assert!((bottom_right.x - 0.75).abs() < 1e-6);
        assert!((bottom_right.y - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_sample_round_trips_pixel() {
        let mut frame = Frame::new_black(2, 2);
        frame.set_pixel(1, 0, [255, 0, 128, 255]);

        let sampled = frame.sample(frame.uv_at(1, 0));
        assert_eq!(sampled[0], 1.0);
        assert_eq!(sampled[1], 0.0);
        assert!((sampled[2] - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(sampled[3], 1.0);
    }

    #[test]
    fn test_sample_clamps_to_edge() {
        let mut frame = Frame::new_filled(2, 1, [10, 20, 30, 255]);
        frame.set_pixel(1, 0, [200, 200, 200, 255]);

        let inside = frame.sample(Uv::new(0.9, 0.5));
        let outside = frame.sample(Uv::new(1.5, 0.5));
        assert_eq!(inside, outside);
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        assert!(Frame::from_raw(2, 2, vec![0; 15]).is_none());
        assert!(Frame::from_raw(2, 2, vec![0; 16]).is_some());
    }
}
