//! Pointer/touch drag tracking with velocity-based intent detection.

use std::time::Instant;

use vitrine_model::{Direction, NavigationIntent};

use crate::config::GestureConfig;

/// Per-gesture bookkeeping. Created on drag start, discarded on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_position: f32,
    pub last_position: f32,
    pub last_timestamp: Instant,
    /// `last_position - start_position`.
    pub accumulated_offset: f32,
    /// Units per millisecond, measured between the last two samples.
    pub velocity: f32,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    cfg: GestureConfig,
    sample: Option<GestureSample>,
}

impl GestureTracker {
    pub fn new(cfg: GestureConfig) -> Self {
        Self { cfg, sample: None }
    }

    pub fn is_active(&self) -> bool {
        self.sample.is_some()
    }

    pub fn sample(&self) -> Option<&GestureSample> {
        self.sample.as_ref()
    }

    /// Live drag offset, 0 when no gesture is in progress.
    pub fn offset(&self) -> f32 {
        self.sample.map_or(0.0, |s| s.accumulated_offset)
    }

    pub fn velocity(&self) -> f32 {
        self.sample.map_or(0.0, |s| s.velocity)
    }

    /// Begin a gesture. A gesture already in progress is replaced.
    pub fn start(&mut self, position: f32, now: Instant) {
        if !position.is_finite() {
            return;
        }
        self.sample = Some(GestureSample {
            start_position: position,
            last_position: position,
            last_timestamp: now,
            accumulated_offset: 0.0,
            velocity: 0.0,
        });
    }

    /// Feed a move sample and return the updated offset.
    ///
    /// Velocity is measured against the previous sample rather than the
    /// gesture start so a late flick dominates a slow drag. Samples that
    /// arrive with no elapsed time keep the previous velocity.
    pub fn move_to(&mut self, position: f32, now: Instant) -> Option<f32> {
        let sample = self.sample.as_mut()?;
        if !position.is_finite() {
            return Some(sample.accumulated_offset);
        }

        let dt = now.saturating_duration_since(sample.last_timestamp);
        let dt_ms = dt.as_secs_f32() * 1000.0;
        if dt_ms > 0.0 {
            sample.velocity = (position - sample.last_position) / dt_ms;
        }
        sample.last_position = position;
        sample.last_timestamp = now;
        sample.accumulated_offset = position - sample.start_position;
        Some(sample.accumulated_offset)
    }

    /// Finish the gesture and resolve it to an intent.
    ///
    /// Returns `None` when no gesture was in progress.
    pub fn end(&mut self, now: Instant) -> Option<NavigationIntent> {
        let sample = self.sample.take()?;
        let idle = now.saturating_duration_since(sample.last_timestamp);
        let velocity = if idle > self.cfg.velocity_window {
            0.0
        } else {
            sample.velocity
        };
        Some(NavigationIntent::DragResolved(resolve(
            sample.accumulated_offset,
            velocity,
            &self.cfg,
        )))
    }

    /// Drop the gesture without resolving it (pointer cancel, lost capture).
    pub fn cancel(&mut self) -> bool {
        self.sample.take().is_some()
    }

    pub fn config(&self) -> GestureConfig {
        self.cfg
    }

    pub fn set_config(&mut self, cfg: GestureConfig) {
        self.cfg = cfg;
    }
}

/// Dual-threshold resolution: travel OR speed is enough on its own.
///
/// Content dragged toward increasing screen space (positive) reveals the
/// previous item; negative reveals the next one. When distance qualifies,
/// its sign wins; a flick that only qualifies on speed uses the velocity
/// sign.
pub fn resolve(
    offset: f32,
    velocity: f32,
    cfg: &GestureConfig,
) -> Option<Direction> {
    let signed = if offset.abs() >= cfg.distance_threshold {
        offset
    } else if velocity.abs() >= cfg.velocity_threshold {
        velocity
    } else {
        return None;
    };
    if signed > 0.0 {
        Some(Direction::Prev)
    } else if signed < 0.0 {
        Some(Direction::Next)
    } else {
        None
    }
}
