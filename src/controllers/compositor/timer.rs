use std::time::{Duration, Instant};

use tracing::debug;

/// Frames averaged into each [`FrameStats`] report.
pub const STATS_INTERVAL_FRAMES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub average_frame: Duration,
    pub fps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous tick; zero on the first.
    pub dt: f64,
    pub stats: Option<FrameStats>,
}

#[derive(Debug, Default)]
pub struct FrameTimer {
    last: Option<Instant>,
    accumulated: Duration,
    frames: u32,
}

impl FrameTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let Some(last) = self.last.replace(now) else {
            return FrameTick { dt: 0.0, stats: None };
        };

        let elapsed = now.saturating_duration_since(last);
        self.accumulated += elapsed;
        self.frames += 1;

        let stats = if self.frames >= STATS_INTERVAL_FRAMES {
            let average_frame = self.accumulated / self.frames;
            let fps = if average_frame.is_zero() {
                0.0
            } else {
                average_frame.as_secs_f64().recip()
            };

            self.accumulated = Duration::ZERO;
            self.frames = 0;

            debug!(
                average_frame_ms = average_frame.as_secs_f64() * 1000.0,
                fps, "frame stats"
            );

            Some(FrameStats { average_frame, fps })
        } else {
            None
        };

        FrameTick {
            dt: elapsed.as_secs_f64(),
            stats,
        }
    }

    /// Forgets the previous tick so a stall (e.g. a surface rebuild) does not show up as one huge dt.
    pub fn restart(&mut self) {
        self.last = None;
    }
}
