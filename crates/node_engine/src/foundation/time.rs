//! Time management utilities

use std::time::{Duration, Instant};

/// High-precision timer for frame timing
///
/// Owned by the [`Core`](crate::core::Core) loop; advanced exactly once per
/// frame via [`Timer::tick`].
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the timer by one frame and return the new delta time
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Re-arm the timer so the next delta starts counting from now
    ///
    /// Frame count and total time are preserved; only the reference instant
    /// moves. Used to keep setup work out of the first frame's delta.
    pub fn rearm(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Get the time since the last frame in seconds
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    #[must_use]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the number of frames ticked so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[must_use]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    started: Instant,
    stopped: Option<Duration>,
}

impl Stopwatch {
    /// Create a new stopwatch and start it immediately
    #[must_use]
    pub fn start_new() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Stop the stopwatch, freezing its elapsed time
    pub fn stop(&mut self) {
        if self.stopped.is_none() {
            self.stopped = Some(self.started.elapsed());
        }
    }

    /// Get the elapsed time
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }

    /// Get the elapsed time in seconds
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Check if the stopwatch is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }
}
