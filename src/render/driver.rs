use std::time::Instant;

/// Driver lifecycle. There is deliberately no pause or stop state; a
/// session runs until its frame budget is spent or the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
}

/// Clock feeding the driver's timestamps, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub enum FrameClock {
    /// Deterministic clock: frame `i` occurs at `i * 1000 / fps`. Used by
    /// the CLI so two runs with the same arguments produce identical frames.
    Fixed { fps: f64 },

    /// Free-running wall clock, the behavior of a display-refresh callback.
    Wall,
}

/// Issues one timestamp per frame, in order, with no frame overlap.
///
/// The timestamp is what the animation loop hands a frame callback: a
/// monotonically increasing millisecond count since the session started.
/// The CRT pass's `time` uniform is this value divided by 10.
pub struct FrameDriver {
    state: DriverState,
    clock: FrameClock,
    started: Option<Instant>,
    frame_index: u64,
}

impl FrameDriver {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            state: DriverState::Uninitialized,
            clock,
            started: None,
            frame_index: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Index of the next frame to be issued.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advance to the next frame and return its timestamp in milliseconds.
    ///
    /// The first tick transitions `Uninitialized -> Running`; after that
    /// the state never changes again.
    pub fn tick(&mut self) -> f64 {
        if self.state == DriverState::Uninitialized {
            self.state = DriverState::Running;
            self.started = Some(Instant::now());
        }

        let timestamp = match self.clock {
            FrameClock::Fixed { fps } => self.frame_index as f64 * 1000.0 / fps,
            FrameClock::Wall => {
                // `started` is set on the first tick above.
                self.started.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0)
            }
        };

        self.frame_index += 1;
        timestamp
    }
}
