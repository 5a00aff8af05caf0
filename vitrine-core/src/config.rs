//! Engine configuration
//!
//! [`EngineConfig`] is the runtime form: durations are [`Duration`]s and
//! every field is populated. File and environment loading lives in
//! `vitrine-config`, which produces one of these.

use std::time::Duration;

use thiserror::Error;
use vitrine_model::{LoopPolicy, Orientation};

use crate::constants;

/// How autoplay learns that time has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayMode {
    /// Host calls `frame(now)` every animation frame; progress accumulates
    /// from real elapsed time.
    #[default]
    Frames,
    /// Host has no frame timestamps and fires a fixed-interval callback
    /// every `autoplay_delay` instead.
    Interval,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub reduced_motion_duration: Duration,
    /// Host-reported reduced-motion preference.
    pub reduced_motion: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        use constants::transition as cfg;
        Self {
            duration: Duration::from_millis(cfg::DURATION_MS),
            reduced_motion_duration: Duration::from_millis(
                cfg::REDUCED_MOTION_DURATION_MS,
            ),
            reduced_motion: false,
        }
    }
}

impl TransitionConfig {
    /// Lock duration for the next commit.
    pub fn effective_duration(&self) -> Duration {
        if self.reduced_motion {
            self.reduced_motion_duration
        } else {
            self.duration
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Minimum |offset| (logical units) that navigates on release.
    pub distance_threshold: f32,
    /// Minimum |velocity| (units/ms) that navigates on release.
    pub velocity_threshold: f32,
    /// Velocity samples older than this at release are ignored.
    pub velocity_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        use constants::gesture as cfg;
        Self {
            distance_threshold: cfg::DISTANCE_THRESHOLD,
            velocity_threshold: cfg::VELOCITY_THRESHOLD,
            velocity_window: Duration::from_millis(cfg::VELOCITY_WINDOW_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    pub enabled: bool,
    pub quiet_period: Duration,
    /// Minimum |accumulated delta| that navigates once the burst settles.
    pub threshold: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        use constants::wheel as cfg;
        Self {
            enabled: true,
            quiet_period: Duration::from_millis(cfg::QUIET_MS),
            threshold: cfg::THRESHOLD,
        }
    }
}

/// One step of the responsive gap function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapBreakpoint {
    /// Viewport width at which this gap starts to apply.
    pub min_viewport: f32,
    pub gap: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Ascending by `min_viewport`, non-decreasing by `gap`.
    pub breakpoints: Vec<GapBreakpoint>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoints: constants::layout::GAP_BREAKPOINTS
                .iter()
                .map(|&(min_viewport, gap)| GapBreakpoint { min_viewport, gap })
                .collect(),
        }
    }
}

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub autoplay: bool,
    pub autoplay_delay: Duration,
    pub autoplay_mode: AutoplayMode,
    /// Pause autoplay while the pointer is over the carousel.
    pub pause_on_hover: bool,
    pub loop_policy: LoopPolicy,
    /// Clamped (or wrapped) into range when the engine is built.
    pub initial_index: usize,
    pub orientation: Orientation,
    pub transition: TransitionConfig,
    pub gesture: GestureConfig,
    pub wheel: WheelConfig,
    pub layout: LayoutConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_delay: Duration::from_millis(
                constants::autoplay::DELAY_MS,
            ),
            autoplay_mode: AutoplayMode::Frames,
            pause_on_hover: true,
            loop_policy: LoopPolicy::Clamp,
            initial_index: 0,
            orientation: Orientation::Horizontal,
            transition: TransitionConfig::default(),
            gesture: GestureConfig::default(),
            wheel: WheelConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Construction-time configuration problems. Runtime input never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineConfigError {
    #[error("autoplay delay must be greater than zero")]
    ZeroAutoplayDelay,
    #[error("wheel quiet period must be greater than zero")]
    ZeroQuietPeriod,
    #[error("{field} must be a finite positive number, got {value}")]
    InvalidThreshold { field: &'static str, value: f32 },
    #[error("at least one gap breakpoint is required")]
    EmptyBreakpoints,
    #[error(
        "gap breakpoint {index} is not monotonic (viewport {min_viewport}, gap {gap})"
    )]
    NonMonotonicBreakpoint {
        index: usize,
        min_viewport: f32,
        gap: f32,
    },
}

impl EngineConfig {
    /// Catalogue strip: manual browsing, looping, no autoplay.
    pub fn catalogue() -> Self {
        Self {
            loop_policy: LoopPolicy::Wrap,
            ..Self::default()
        }
    }

    /// In-page multi-step scanner: finite, autoplaying, quick steps.
    pub fn scanner() -> Self {
        Self {
            autoplay: true,
            autoplay_delay: Duration::from_millis(3000),
            loop_policy: LoopPolicy::Clamp,
            transition: TransitionConfig {
                duration: Duration::from_millis(500),
                ..TransitionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Hero slider: looping autoplay with a slow cadence.
    pub fn hero() -> Self {
        Self {
            autoplay: true,
            autoplay_delay: Duration::from_millis(6000),
            loop_policy: LoopPolicy::Wrap,
            transition: TransitionConfig {
                duration: Duration::from_millis(800),
                ..TransitionConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.autoplay_delay.is_zero() {
            return Err(EngineConfigError::ZeroAutoplayDelay);
        }
        if self.wheel.quiet_period.is_zero() {
            return Err(EngineConfigError::ZeroQuietPeriod);
        }
        check_threshold(
            "gesture.distance_threshold",
            self.gesture.distance_threshold,
        )?;
        check_threshold(
            "gesture.velocity_threshold",
            self.gesture.velocity_threshold,
        )?;
        check_threshold("wheel.threshold", self.wheel.threshold)?;
        validate_breakpoints(&self.layout.breakpoints)
    }
}

fn check_threshold(
    field: &'static str,
    value: f32,
) -> Result<(), EngineConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineConfigError::InvalidThreshold { field, value })
    }
}

fn validate_breakpoints(
    breakpoints: &[GapBreakpoint],
) -> Result<(), EngineConfigError> {
    if breakpoints.is_empty() {
        return Err(EngineConfigError::EmptyBreakpoints);
    }
    let mut prev: Option<&GapBreakpoint> = None;
    for (index, bp) in breakpoints.iter().enumerate() {
        let finite = bp.min_viewport.is_finite() && bp.gap.is_finite();
        let ordered = prev.is_none_or(|p| {
            bp.min_viewport > p.min_viewport && bp.gap >= p.gap
        });
        if !finite || bp.gap < 0.0 || !ordered {
            return Err(EngineConfigError::NonMonotonicBreakpoint {
                index,
                min_viewport: bp.min_viewport,
                gap: bp.gap,
            });
        }
        prev = Some(bp);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_presets_validate() {
        for cfg in [
            EngineConfig::default(),
            EngineConfig::catalogue(),
            EngineConfig::scanner(),
            EngineConfig::hero(),
        ] {
            assert_eq!(cfg.validate(), Ok(()));
        }
    }

    #[test]
    fn zero_delay_rejected() {
        let cfg = EngineConfig {
            autoplay_delay: Duration::ZERO,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(EngineConfigError::ZeroAutoplayDelay));
    }

    #[test]
    fn nan_threshold_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.gesture.velocity_threshold = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(EngineConfigError::InvalidThreshold {
                field: "gesture.velocity_threshold",
                ..
            })
        ));
    }

    #[test]
    fn shrinking_gap_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.layout.breakpoints = vec![
            GapBreakpoint {
                min_viewport: 0.0,
                gap: 24.0,
            },
            GapBreakpoint {
                min_viewport: 800.0,
                gap: 16.0,
            },
        ];
        assert!(matches!(
            cfg.validate(),
            Err(EngineConfigError::NonMonotonicBreakpoint { index: 1, .. })
        ));
    }

    #[test]
    fn reduced_motion_shortens_lock() {
        let mut t = TransitionConfig::default();
        let normal = t.effective_duration();
        t.reduced_motion = true;
        assert!(t.effective_duration() < normal);
    }
}
