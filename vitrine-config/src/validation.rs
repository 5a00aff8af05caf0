use std::time::Duration;

use thiserror::Error;
use vitrine_core::EngineConfig;

/// Valid-but-broken combinations that would make a carousel unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "autoplay delay {delay:?} is not longer than the transition ({transition:?}); every advance would land on a locked carousel"
    )]
    AutoplayOutpacesTransition {
        delay: Duration,
        transition: Duration,
    },
    #[error(
        "distance threshold {distance} exceeds the narrowest supported viewport ({min_viewport}px); drags could never navigate there"
    )]
    UnreachableDistance { distance: f32, min_viewport: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

const MIN_READABLE_DELAY: Duration = Duration::from_millis(2000);
const MAX_QUIET_PERIOD: Duration = Duration::from_millis(250);
const MIN_DISTANCE: f32 = 10.0;
const MAX_VELOCITY: f32 = 5.0;

pub fn apply_guard_rails(
    config: &EngineConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.autoplay {
        let transition = config.transition.duration;
        if config.autoplay_delay <= transition {
            return Err(ConfigGuardRailError::AutoplayOutpacesTransition {
                delay: config.autoplay_delay,
                transition,
            });
        }
        if config.autoplay_delay < MIN_READABLE_DELAY {
            warnings.push_with_hint(
                format!(
                    "autoplay delay {} leaves little time to read a slide",
                    humantime::format_duration(config.autoplay_delay)
                ),
                "Use at least 2s, or disable autoplay for text-heavy slides",
            );
        }
        if !config.pause_on_hover {
            warnings.push_with_hint(
                "autoplay keeps running while the pointer is over the carousel",
                "Set carousel.pause_on_hover = true so visitors can inspect a slide",
            );
        }
    }

    if config.transition.reduced_motion_duration > config.transition.duration {
        warnings.push(
            "reduced-motion transition is longer than the regular transition",
        );
    }

    if let Some(first) = config.layout.breakpoints.first()
        && config.gesture.distance_threshold > first.min_viewport.max(320.0)
    {
        return Err(ConfigGuardRailError::UnreachableDistance {
            distance: config.gesture.distance_threshold,
            min_viewport: first.min_viewport.max(320.0),
        });
    }

    if config.gesture.distance_threshold < MIN_DISTANCE {
        warnings.push_with_hint(
            format!(
                "gesture distance threshold {} navigates on accidental touches",
                config.gesture.distance_threshold
            ),
            "Keep it at 10 units or more",
        );
    }
    if config.gesture.velocity_threshold > MAX_VELOCITY {
        warnings.push(format!(
            "gesture velocity threshold {} u/ms effectively disables flicks",
            config.gesture.velocity_threshold
        ));
    }

    if !config.wheel.enabled {
        warnings.push("wheel navigation is disabled");
    } else if config.wheel.quiet_period > MAX_QUIET_PERIOD {
        warnings.push_with_hint(
            format!(
                "wheel quiet period {} makes scrolling feel unresponsive",
                humantime::format_duration(config.wheel.quiet_period)
            ),
            "Trackpad bursts settle within ~40ms",
        );
    }

    for warning in warnings.iter() {
        tracing::warn!(hint = ?warning.hint, "{}", warning.message);
    }
    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_pass_without_warnings() {
        for cfg in [
            EngineConfig::catalogue(),
            EngineConfig::scanner(),
            EngineConfig::hero(),
        ] {
            let warnings = apply_guard_rails(&cfg).expect("no guard rail");
            assert!(warnings.is_empty(), "{warnings:?}");
        }
    }

    #[test]
    fn autoplay_faster_than_transition_is_rejected() {
        let cfg = EngineConfig {
            autoplay: true,
            autoplay_delay: Duration::from_millis(400),
            ..EngineConfig::default()
        };
        assert!(matches!(
            apply_guard_rails(&cfg),
            Err(ConfigGuardRailError::AutoplayOutpacesTransition { .. })
        ));
    }

    #[test]
    fn disabled_autoplay_skips_cadence_checks() {
        let cfg = EngineConfig {
            autoplay: false,
            autoplay_delay: Duration::from_millis(400),
            ..EngineConfig::default()
        };
        assert!(apply_guard_rails(&cfg).is_ok());
    }

    #[test]
    fn fast_autoplay_without_hover_pause_warns_twice() {
        let cfg = EngineConfig {
            autoplay: true,
            autoplay_delay: Duration::from_millis(1500),
            pause_on_hover: false,
            ..EngineConfig::default()
        };
        let warnings = apply_guard_rails(&cfg).expect("warnings only");
        assert_eq!(warnings.len(), 2);
        assert!(warnings.items.iter().all(|w| w.hint.is_some()));
    }

    #[test]
    fn huge_distance_threshold_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.gesture.distance_threshold = 1000.0;
        assert!(matches!(
            apply_guard_rails(&cfg),
            Err(ConfigGuardRailError::UnreachableDistance { .. })
        ));
    }
}
