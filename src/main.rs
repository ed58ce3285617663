use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use retro_screen::{
    config::Config,
    render::RenderEngine,
    shader::PipelineRegistry,
};

#[derive(Parser)]
#[command(
    name = "retro-screen",
    version,
    about = "Render a still image through retro CRT and HSL-adjustment shaders",
    long_about = "Retro-Screen runs a static image through CPU pixel shaders: an old-TV pass \
                  with animated scanlines and chromatic fringing, optionally followed by a \
                  hue/saturation/lightness adjustment pass, and writes the frames as PNGs."
)]
struct Cli {
    /// Source image path (PNG, JPEG)
    #[arg(short, long)]
    image: PathBuf,

    /// Output directory for rendered frames
    #[arg(short, long)]
    output: PathBuf,

    /// Demo pipeline to run (tv, adjust)
    #[arg(short, long, default_value = "tv")]
    demo: String,

    /// Number of frames to render
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Frames per second of the fixed-step clock
    #[arg(long)]
    fps: Option<f64>,

    /// Frame width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Texture zoom factor centered on the image middle
    #[arg(long)]
    scale: Option<f32>,

    /// Hue slider position (-1.0 to 1.0)
    #[arg(long)]
    hue: Option<f32>,

    /// Saturation slider position (0.0 to 2.0)
    #[arg(long)]
    saturation: Option<f32>,

    /// Lightness slider position (-1.0 to 1.0)
    #[arg(long)]
    lightness: Option<f32>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Retro-Screen v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration, then let CLI flags override it.
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };

    if let Some(frames) = cli.frames {
        config.render.frames = frames;
    }
    if let Some(fps) = cli.fps {
        config.render.fps = fps;
    }
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }
    if let Some(scale) = cli.scale {
        config.crt.scale = scale;
    }
    if let Some(hue) = cli.hue {
        config.panel.hue.set(hue);
    }
    if let Some(saturation) = cli.saturation {
        config.panel.saturation.set(saturation);
    }
    if let Some(lightness) = cli.lightness {
        config.panel.lightness.set(lightness);
    }

    // Pipeline lookup is a startup error, surfaced before any frame renders.
    let registry = PipelineRegistry::new();
    let pipeline = registry
        .get_pipeline(&cli.demo)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    info!("Using '{}' demo", pipeline.name());

    let engine = RenderEngine::new(config, pipeline);
    engine.run(&cli.image, &cli.output).await?;

    info!("Done. Frames saved to: {:?}", cli.output);
    Ok(())
}
