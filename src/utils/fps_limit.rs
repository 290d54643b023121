use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Holds frames to a target rate so that a frame-counting ticker sees a
/// steady refresh, like a vsync'ed swap interval would give.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 1. / max_fps,
        }
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps out the rest of the current frame and starts timing the next one.
    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.elapsed();
        if let Some(rest) = self.target_frametime.checked_sub(elapsed) {
            sleep(rest);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
