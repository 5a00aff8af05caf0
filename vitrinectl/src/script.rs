//! Timed input traces.
//!
//! A script names the catalogue, the layout measurements and a list of
//! events stamped with milliseconds since mount:
//!
//! ```toml
//! preset = "catalogue"
//! items = ["fintech", "wellness", "travel"]
//!
//! [viewport]
//! width = 1200
//! container = 1000
//! item = 300
//!
//! [[events]]
//! at_ms = 0
//! kind = "key"
//! key = "arrow_right"
//!
//! [[events]]
//! at_ms = 700
//! kind = "pointer_down"
//! position = 400
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use vitrine_config::{Preset, UnknownPreset};
use vitrine_core::{EngineConfigError, Key};
use vitrine_model::CarouselItem;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("event {index} at {at_ms}ms is earlier than the previous event ({previous}ms)")]
    OutOfOrder { index: usize, at_ms: u64, previous: u64 },
    #[error("event {index} uses unknown key '{key}'")]
    UnknownKey { index: usize, key: String },
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
    #[error(transparent)]
    Preset(#[from] UnknownPreset),
    #[error("engine rejected the configuration")]
    Engine(#[from] EngineConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Script {
    pub preset: Option<Preset>,
    /// Item slugs, in carousel order.
    pub items: Vec<String>,
    /// Generate `item-0..item-N` when `items` is empty.
    pub item_count: Option<usize>,
    pub viewport: Option<Viewport>,
    /// Keep replaying synthetic frames until this time.
    pub duration_ms: Option<u64>,
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    pub width: f32,
    pub container: f32,
    pub item: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptEvent {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Key {
        key: String,
    },
    PointerDown {
        position: f32,
    },
    PointerMove {
        position: f32,
    },
    PointerUp,
    PointerCancel,
    Enter,
    Leave,
    Wheel {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    Resize {
        width: f32,
        container: f32,
        item: f32,
    },
    Frame,
    Poll,
    Interval,
    Next,
    Prev,
    GoTo {
        index: isize,
    },
    Pause,
    Resume,
    ReducedMotion {
        enabled: bool,
    },
}

impl Action {
    /// Short label used in replay output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Key { .. } => "key",
            Action::PointerDown { .. } => "pointer_down",
            Action::PointerMove { .. } => "pointer_move",
            Action::PointerUp => "pointer_up",
            Action::PointerCancel => "pointer_cancel",
            Action::Enter => "enter",
            Action::Leave => "leave",
            Action::Wheel { .. } => "wheel",
            Action::Resize { .. } => "resize",
            Action::Frame => "frame",
            Action::Poll => "poll",
            Action::Interval => "interval",
            Action::Next => "next",
            Action::Prev => "prev",
            Action::GoTo { .. } => "go_to",
            Action::Pause => "pause",
            Action::Resume => "resume",
            Action::ReducedMotion { .. } => "reduced_motion",
        }
    }
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let raw = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script: Script =
            toml::from_str(&raw).map_err(|source| ScriptError::Toml {
                path: path.to_path_buf(),
                source,
            })?;
        script.check()?;
        Ok(script)
    }

    /// Events must be in time order and name keys the engine knows.
    pub fn check(&self) -> Result<(), ScriptError> {
        let mut previous = 0;
        for (index, event) in self.events.iter().enumerate() {
            if event.at_ms < previous {
                return Err(ScriptError::OutOfOrder {
                    index,
                    at_ms: event.at_ms,
                    previous,
                });
            }
            previous = event.at_ms;
            if let Action::Key { key } = &event.action {
                parse_key(index, key)?;
            }
        }
        Ok(())
    }

    pub fn catalogue(&self) -> Vec<CarouselItem> {
        if self.items.is_empty() {
            (0..self.item_count.unwrap_or(0))
                .map(|i| CarouselItem::from_slug(&format!("item-{i}")))
                .collect()
        } else {
            self.items
                .iter()
                .map(|slug| CarouselItem::from_slug(slug))
                .collect()
        }
    }

    /// Time of the last scripted moment.
    pub fn end_ms(&self) -> u64 {
        let last = self.events.last().map_or(0, |e| e.at_ms);
        self.duration_ms.map_or(last, |d| d.max(last))
    }
}

pub(crate) fn parse_key(index: usize, raw: &str) -> Result<Key, ScriptError> {
    let Ok(key) = raw.parse::<Key>();
    if key == Key::Other {
        return Err(ScriptError::UnknownKey {
            index,
            key: raw.to_string(),
        });
    }
    Ok(key)
}
