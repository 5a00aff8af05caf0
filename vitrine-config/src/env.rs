//! `VITRINE_*` environment overrides.
//!
//! The loader reads variables through [`EnvSource`] so tests can supply a
//! map instead of mutating the process environment.

use std::collections::HashMap;
use std::str::FromStr;

use vitrine_model::Orientation;

use crate::loader::error::ConfigLoadError;
use crate::models::{AutoplayModeSetting, CarouselFile};

pub const CONFIG_PATH: &str = "VITRINE_CONFIG_PATH";
pub const PRESET: &str = "VITRINE_PRESET";
pub const AUTOPLAY: &str = "VITRINE_AUTOPLAY";
pub const AUTOPLAY_DELAY: &str = "VITRINE_AUTOPLAY_DELAY";
pub const AUTOPLAY_MODE: &str = "VITRINE_AUTOPLAY_MODE";
pub const PAUSE_ON_HOVER: &str = "VITRINE_PAUSE_ON_HOVER";
pub const LOOP: &str = "VITRINE_LOOP";
pub const INITIAL_INDEX: &str = "VITRINE_INITIAL_INDEX";
pub const ORIENTATION: &str = "VITRINE_ORIENTATION";
pub const TRANSITION_DURATION: &str = "VITRINE_TRANSITION_DURATION";
pub const REDUCED_MOTION: &str = "VITRINE_REDUCED_MOTION";
pub const REDUCED_MOTION_DURATION: &str = "VITRINE_REDUCED_MOTION_DURATION";
pub const DISTANCE_THRESHOLD: &str = "VITRINE_DISTANCE_THRESHOLD";
pub const VELOCITY_THRESHOLD: &str = "VITRINE_VELOCITY_THRESHOLD";
pub const VELOCITY_WINDOW: &str = "VITRINE_VELOCITY_WINDOW";
pub const WHEEL_ENABLED: &str = "VITRINE_WHEEL_ENABLED";
pub const WHEEL_QUIET_PERIOD: &str = "VITRINE_WHEEL_QUIET_PERIOD";
pub const WHEEL_THRESHOLD: &str = "VITRINE_WHEEL_THRESHOLD";

/// Every override the loader understands, in documentation order.
pub const KEYS: [&str; 18] = [
    CONFIG_PATH,
    PRESET,
    AUTOPLAY,
    AUTOPLAY_DELAY,
    AUTOPLAY_MODE,
    PAUSE_ON_HOVER,
    LOOP,
    INITIAL_INDEX,
    ORIENTATION,
    TRANSITION_DURATION,
    REDUCED_MOTION,
    REDUCED_MOTION_DURATION,
    DISTANCE_THRESHOLD,
    VELOCITY_THRESHOLD,
    VELOCITY_WINDOW,
    WHEEL_ENABLED,
    WHEEL_QUIET_PERIOD,
    WHEEL_THRESHOLD,
];

pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// `primary` wins; `fallback` fills the gaps. Values from a `.env` file sit
/// underneath the process environment this way.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.fallback.var(key))
    }
}

/// Read every override into an overlay document. Blank values are ignored.
pub fn overlay_from_env(env: &impl EnvSource) -> Result<CarouselFile, ConfigLoadError> {
    let mut file = CarouselFile::default();

    let c = &mut file.carousel;
    c.autoplay = parsed(env, AUTOPLAY, parse_bool)?;
    c.autoplay_delay = raw(env, AUTOPLAY_DELAY);
    c.autoplay_mode = parsed(env, AUTOPLAY_MODE, parse_mode)?;
    c.pause_on_hover = parsed(env, PAUSE_ON_HOVER, parse_bool)?;
    c.loop_enabled = parsed(env, LOOP, parse_bool)?;
    c.initial_index = parsed(env, INITIAL_INDEX, from_str::<usize>)?;
    c.orientation = parsed(env, ORIENTATION, parse_orientation)?;

    file.transition.duration = raw(env, TRANSITION_DURATION);
    file.transition.reduced_motion = parsed(env, REDUCED_MOTION, parse_bool)?;
    file.transition.reduced_motion_duration =
        raw(env, REDUCED_MOTION_DURATION);

    file.gesture.distance_threshold =
        parsed(env, DISTANCE_THRESHOLD, from_str::<f32>)?;
    file.gesture.velocity_threshold =
        parsed(env, VELOCITY_THRESHOLD, from_str::<f32>)?;
    file.gesture.velocity_window = raw(env, VELOCITY_WINDOW);

    file.wheel.enabled = parsed(env, WHEEL_ENABLED, parse_bool)?;
    file.wheel.quiet_period = raw(env, WHEEL_QUIET_PERIOD);
    file.wheel.threshold = parsed(env, WHEEL_THRESHOLD, from_str::<f32>)?;

    Ok(file)
}

pub(crate) fn raw(env: &impl EnvSource, key: &str) -> Option<String> {
    env.var(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T>(
    env: &impl EnvSource,
    key: &'static str,
    parse: fn(&str) -> Result<T, String>,
) -> Result<Option<T>, ConfigLoadError> {
    let Some(value) = raw(env, key) else {
        return Ok(None);
    };
    parse(&value)
        .map(Some)
        .map_err(|reason| ConfigLoadError::InvalidEnv { key, value, reason })
}

fn from_str<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|err| err.to_string())
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true/false".into()),
    }
}

fn parse_mode(value: &str) -> Result<AutoplayModeSetting, String> {
    match value.to_ascii_lowercase().as_str() {
        "frames" => Ok(AutoplayModeSetting::Frames),
        "interval" => Ok(AutoplayModeSetting::Interval),
        _ => Err("expected frames or interval".into()),
    }
}

fn parse_orientation(value: &str) -> Result<Orientation, String> {
    match value.to_ascii_lowercase().as_str() {
        "horizontal" => Ok(Orientation::Horizontal),
        "vertical" => Ok(Orientation::Vertical),
        _ => Err("expected horizontal or vertical".into()),
    }
}
