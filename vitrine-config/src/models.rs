//! On-disk configuration document.
//!
//! Every field is optional: a document is an overlay applied on top of the
//! defaults or a preset, and the environment layer uses the same shape.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use vitrine_core::{AutoplayMode, EngineConfig, GapBreakpoint};
use vitrine_model::{LoopPolicy, Orientation};

use crate::loader::error::ConfigLoadError;
use crate::presets::Preset;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselFile {
    /// Starting point before any other field is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    pub carousel: CarouselSection,
    pub transition: TransitionSection,
    pub gesture: GestureSection,
    pub wheel: WheelSection,
    pub layout: LayoutSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayModeSetting {
    Frames,
    Interval,
}

impl From<AutoplayModeSetting> for AutoplayMode {
    fn from(value: AutoplayModeSetting) -> Self {
        match value {
            AutoplayModeSetting::Frames => AutoplayMode::Frames,
            AutoplayModeSetting::Interval => AutoplayMode::Interval,
        }
    }
}

impl From<AutoplayMode> for AutoplayModeSetting {
    fn from(value: AutoplayMode) -> Self {
        match value {
            AutoplayMode::Frames => AutoplayModeSetting::Frames,
            AutoplayMode::Interval => AutoplayModeSetting::Interval,
        }
    }
}

/// `[carousel]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    /// Humantime string, e.g. `"5s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_mode: Option<AutoplayModeSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

/// `[transition]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

/// `[gesture]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_threshold: Option<f32>,
    /// Units per millisecond.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_window: Option<String>,
}

/// `[wheel]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WheelSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,
}

/// `[layout]` with `[[layout.breakpoints]]` entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<BreakpointEntry>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointEntry {
    pub min_viewport: f32,
    pub gap: f32,
}

impl CarouselFile {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Apply every field that is set onto `cfg`.
    pub fn apply_to(&self, cfg: &mut EngineConfig) -> Result<(), ConfigLoadError> {
        let c = &self.carousel;
        set(&mut cfg.autoplay, c.autoplay);
        set(
            &mut cfg.autoplay_delay,
            duration("carousel.autoplay_delay", &c.autoplay_delay)?,
        );
        set(&mut cfg.autoplay_mode, c.autoplay_mode.map(Into::into));
        set(&mut cfg.pause_on_hover, c.pause_on_hover);
        set(&mut cfg.loop_policy, c.loop_enabled.map(LoopPolicy::from_loop));
        set(&mut cfg.initial_index, c.initial_index);
        set(&mut cfg.orientation, c.orientation);

        let t = &self.transition;
        set(
            &mut cfg.transition.duration,
            duration("transition.duration", &t.duration)?,
        );
        set(
            &mut cfg.transition.reduced_motion_duration,
            duration(
                "transition.reduced_motion_duration",
                &t.reduced_motion_duration,
            )?,
        );
        set(&mut cfg.transition.reduced_motion, t.reduced_motion);

        let g = &self.gesture;
        set(&mut cfg.gesture.distance_threshold, g.distance_threshold);
        set(&mut cfg.gesture.velocity_threshold, g.velocity_threshold);
        set(
            &mut cfg.gesture.velocity_window,
            duration("gesture.velocity_window", &g.velocity_window)?,
        );

        let w = &self.wheel;
        set(&mut cfg.wheel.enabled, w.enabled);
        set(
            &mut cfg.wheel.quiet_period,
            duration("wheel.quiet_period", &w.quiet_period)?,
        );
        set(&mut cfg.wheel.threshold, w.threshold);

        if let Some(entries) = &self.layout.breakpoints {
            cfg.layout.breakpoints = entries
                .iter()
                .map(|e| GapBreakpoint {
                    min_viewport: e.min_viewport,
                    gap: e.gap,
                })
                .collect();
        }
        Ok(())
    }

    /// Fully populated document describing `cfg`; used to print the
    /// effective configuration.
    pub fn from_config(cfg: &EngineConfig) -> Self {
        let fmt = |d: Duration| Some(humantime::format_duration(d).to_string());
        Self {
            preset: None,
            carousel: CarouselSection {
                autoplay: Some(cfg.autoplay),
                autoplay_delay: fmt(cfg.autoplay_delay),
                autoplay_mode: Some(cfg.autoplay_mode.into()),
                pause_on_hover: Some(cfg.pause_on_hover),
                loop_enabled: Some(cfg.loop_policy.wraps()),
                initial_index: Some(cfg.initial_index),
                orientation: Some(cfg.orientation),
            },
            transition: TransitionSection {
                duration: fmt(cfg.transition.duration),
                reduced_motion_duration: fmt(
                    cfg.transition.reduced_motion_duration,
                ),
                reduced_motion: Some(cfg.transition.reduced_motion),
            },
            gesture: GestureSection {
                distance_threshold: Some(cfg.gesture.distance_threshold),
                velocity_threshold: Some(cfg.gesture.velocity_threshold),
                velocity_window: fmt(cfg.gesture.velocity_window),
            },
            wheel: WheelSection {
                enabled: Some(cfg.wheel.enabled),
                quiet_period: fmt(cfg.wheel.quiet_period),
                threshold: Some(cfg.wheel.threshold),
            },
            layout: LayoutSection {
                breakpoints: Some(
                    cfg.layout
                        .breakpoints
                        .iter()
                        .map(|bp| BreakpointEntry {
                            min_viewport: bp.min_viewport,
                            gap: bp.gap,
                        })
                        .collect(),
                ),
            },
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

pub(crate) fn duration(
    field: &'static str,
    raw: &Option<String>,
) -> Result<Option<Duration>, ConfigLoadError> {
    let Some(raw) = raw.as_deref() else {
        return Ok(None);
    };
    humantime::parse_duration(raw.trim())
        .map(Some)
        .map_err(|source| ConfigLoadError::Duration {
            field,
            value: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
preset = "scanner"

[carousel]
autoplay_delay = "4s 500ms"
loop = true
orientation = "vertical"

[transition]
duration = "450ms"

[gesture]
velocity_threshold = 0.6

[[layout.breakpoints]]
min_viewport = 0
gap = 8

[[layout.breakpoints]]
min_viewport = 900
gap = 20
"#;

    #[test]
    fn parses_sections_and_overlays_defaults() {
        let file = CarouselFile::from_toml(SAMPLE).expect("valid toml");
        assert_eq!(file.preset, Some(Preset::Scanner));

        let mut cfg = EngineConfig::default();
        file.apply_to(&mut cfg).expect("apply");
        assert_eq!(cfg.autoplay_delay, Duration::from_millis(4500));
        assert_eq!(cfg.loop_policy, LoopPolicy::Wrap);
        assert_eq!(cfg.orientation, Orientation::Vertical);
        assert_eq!(cfg.transition.duration, Duration::from_millis(450));
        assert_eq!(cfg.gesture.velocity_threshold, 0.6);
        assert_eq!(cfg.gesture.distance_threshold, 50.0);
        assert_eq!(cfg.layout.breakpoints.len(), 2);
        assert_eq!(cfg.layout.breakpoints[1].gap, 20.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CarouselFile::from_toml("[carousel]\nautoplay_speed = 3\n");
        assert!(err.is_err());
    }

    #[test]
    fn bad_duration_names_the_field() {
        let file = CarouselFile::from_toml("[wheel]\nquiet_period = \"soon\"\n")
            .expect("valid toml");
        let err = file
            .apply_to(&mut EngineConfig::default())
            .expect_err("bad duration");
        assert!(matches!(
            err,
            ConfigLoadError::Duration {
                field: "wheel.quiet_period",
                ..
            }
        ));
    }

    #[test]
    fn effective_config_prints_back() {
        let cfg = EngineConfig::hero();
        let printed = CarouselFile::from_config(&cfg).to_toml().expect("toml");
        assert!(printed.contains("autoplay_delay = \"6s\""));

        let mut reparsed = EngineConfig::default();
        CarouselFile::from_toml(&printed)
            .expect("parse")
            .apply_to(&mut reparsed)
            .expect("apply");
        assert_eq!(reparsed, cfg);
    }
}
