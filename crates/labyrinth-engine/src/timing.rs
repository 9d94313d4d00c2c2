//! Frame timing for the headless host.
//!
//! The host does not render, so time is virtual: every frame advances the
//! clock by one frame budget. Wall-clock frame times can still be recorded to
//! report how long the controller update takes.

use labyrinth_gameplay::FrameClock;
use std::collections::VecDeque;
use std::time::Duration;

/// Virtual clock advancing one fixed frame at a time.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Simulated frames per second
    target_fps: u32,
    /// Frames produced so far
    frame: u64,
    /// Recent update durations (seconds) for averaging
    update_times: VecDeque<f32>,
    /// Maximum samples for averaging
    max_samples: usize,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameTiming {
    /// Create a new frame timing manager.
    ///
    /// # Arguments
    /// * `target_fps` - Simulated frames per second
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            frame: 0,
            update_times: VecDeque::with_capacity(120),
            max_samples: 120,
        }
    }

    /// Clock reading of the current frame.
    #[must_use]
    pub fn clock(&self) -> FrameClock {
        let fps = u64::from(self.target_fps);
        let elapsed = self.frame as f64 / fps as f64;
        FrameClock::new(self.frame * 1000 / fps, elapsed as f32)
    }

    /// Moves to the next frame and returns its clock reading.
    pub fn advance(&mut self) -> FrameClock {
        self.frame += 1;
        self.clock()
    }

    /// Frames produced so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Get the target FPS.
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Records how long one controller update took.
    pub fn record_update(&mut self, took: Duration) {
        self.update_times.push_back(took.as_secs_f32());
        if self.update_times.len() > self.max_samples {
            self.update_times.pop_front();
        }
    }

    /// Get the average update time in milliseconds.
    #[must_use]
    pub fn average_update_ms(&self) -> f32 {
        if self.update_times.is_empty() {
            return 0.0;
        }

        (self.update_times.iter().sum::<f32>() / self.update_times.len() as f32) * 1000.0
    }
}
