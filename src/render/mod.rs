//! # Rendering Module
//!
//! The frame surface, the per-frame driver and the session engine.

pub mod driver;
pub mod engine;
pub mod types;

pub use driver::{DriverState, FrameClock, FrameDriver};
pub use engine::RenderEngine;
pub use types::{Frame, Sample2d, Uv};
