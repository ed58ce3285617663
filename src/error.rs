use thiserror::Error;

/// Main error type for the Retro-Screen library
#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Texture loading and sampling errors
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {path}")]
    LoadFailed { path: String },

    #[error("Failed to decode texture: {path} - {reason}")]
    DecodeFailed { path: String, reason: String },

    #[error("Texture has zero extent: {width}x{height}")]
    EmptyTexture { width: u32, height: u32 },
}

/// Shader pass errors
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("Pipeline not found: {name}")]
    PipelineNotFound { name: String },

    #[error("Pass failed: {pass} - {reason}")]
    PassFailed { pass: String, reason: String },
}

/// Frame rendering and output errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Target surface has zero extent: {width}x{height}")]
    EmptySurface { width: u32, height: u32 },

    #[error("Failed to write frame {index}: {reason}")]
    FrameWriteFailed { index: u64, reason: String },

    #[error("Output directory could not be created: {path}")]
    OutputDirFailed { path: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using ScreenError
pub type Result<T> = std::result::Result<T, ScreenError>;

impl ScreenError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Texture(TextureError::LoadFailed { path }) => {
                format!("Could not load image '{}'. Please check the file exists and is a PNG or JPEG.", path)
            }
            Self::Shader(ShaderError::PipelineNotFound { name }) => {
                format!("Demo '{}' not found. Available demos: tv, adjust", name)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
