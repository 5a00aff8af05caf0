//! Elapsed-time autoplay
//!
//! Progress is accumulated from the real time between frames rather than
//! counted in frames, so cadence does not depend on refresh rate. A single
//! oversized delta (tab returning from the background) fires one advance,
//! never a catch-up burst.

use std::time::Duration;

use crate::config::AutoplayMode;
use crate::constants::autoplay::PROGRESS_FULL;

#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    enabled: bool,
    delay: Duration,
    mode: AutoplayMode,
    /// Percent toward the next advance, `[0, 100)`.
    progress: f32,
}

impl AutoplayScheduler {
    pub fn new(enabled: bool, delay: Duration, mode: AutoplayMode) -> Self {
        Self {
            enabled,
            delay,
            mode,
            progress: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.progress = 0.0;
        }
    }

    pub fn mode(&self) -> AutoplayMode {
        self.mode
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Progress toward the next advance, for progress-bar rendering.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
    }

    /// Advance by one frame's elapsed time.
    ///
    /// `held` is true while the carousel is paused, transitioning or being
    /// dragged; progress does not move then. Returns true when the caller
    /// should submit a `Next` intent.
    ///
    /// In [`AutoplayMode::Interval`] frames only feed the progress bar,
    /// capped at full; the interval callback still does the advancing.
    pub fn tick(&mut self, delta: Duration, held: bool) -> bool {
        if !self.enabled || held {
            return false;
        }
        let delay_ms = self.delay.as_secs_f32() * 1000.0;
        if delay_ms <= 0.0 {
            return false;
        }
        let delta_ms = delta.as_secs_f32() * 1000.0;
        self.progress += delta_ms / delay_ms * PROGRESS_FULL;
        if self.mode == AutoplayMode::Interval {
            self.progress = self.progress.min(PROGRESS_FULL);
            return false;
        }
        // Float accumulation can land a hair under the mark on exact
        // multiples of the delay.
        if self.progress >= PROGRESS_FULL - 1e-3 {
            self.progress = 0.0;
            return true;
        }
        false
    }

    /// Fallback path for hosts without a frame loop: the host fires a
    /// fixed-interval callback every `delay`, and each one advances once.
    /// Progress stays at zero unless the host also reports frames.
    pub fn interval_elapsed(&mut self, held: bool) -> bool {
        if !self.enabled || held || self.mode != AutoplayMode::Interval {
            return false;
        }
        self.progress = 0.0;
        true
    }
}
