use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    panel::ControlPanel,
    texture::WrapMode,
};

/// Main configuration for Retro-Screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output surface settings
    pub surface: SurfaceConfig,

    /// Frame loop settings
    pub render: RenderConfig,

    /// CRT pass settings
    pub crt: CrtConfig,

    /// Control panel initial positions
    pub panel: ControlPanel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            render: RenderConfig::default(),
            crt: CrtConfig::default(),
            panel: ControlPanel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.surface.validate()?;
        self.render.validate()?;
        self.crt.validate()?;
        Ok(())
    }
}

/// Output surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

impl SurfaceConfig {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "surface.size".to_string(),
                value: format!("{}x{}", self.width, self.height),
            }
            .into());
        }
        Ok(())
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frames per second of the fixed-step clock
    pub fps: f64,

    /// Number of frames to render in one session
    pub frames: u64,

    /// Number of rayon worker threads for per-row shading
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            frames: 120,
            threads: num_cpus::get(),
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<()> {
        if !(self.fps > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "render.fps".to_string(),
                value: self.fps.to_string(),
            }
            .into());
        }

        if self.frames == 0 {
            return Err(ConfigError::InvalidValue {
                key: "render.frames".to_string(),
                value: self.frames.to_string(),
            }
            .into());
        }

        if self.threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "render.threads".to_string(),
                value: self.threads.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// CRT pass configuration
///
/// Only the knobs the original exposed as uniforms: the center zoom and
/// the texture edge behavior its out-of-range samples resolve through.
/// Scanline frequency, fringe offset and blend are fixed constants in
/// [`crate::shader::crt`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrtConfig {
    /// Texture-space zoom factor centered on the middle of the image
    pub scale: f32,

    /// Edge behavior for samples the zoom pushes outside the texture
    pub wrap: WrapMode,
}

impl Default for CrtConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            wrap: WrapMode::default(),
        }
    }
}

impl CrtConfig {
    fn validate(&self) -> Result<()> {
        if !(self.scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "crt.scale".to_string(),
                value: self.scale.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
