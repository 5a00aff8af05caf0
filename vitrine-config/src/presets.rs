//! Named starting points for the three carousel shapes the landing pages use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::EngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Landing-page catalogue strip: manual, looping.
    Catalogue,
    /// In-page multi-step scanner: autoplay, stops at the last step.
    Scanner,
    /// Hero slider: slow looping autoplay.
    Hero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset '{name}' (expected one of: catalogue, scanner, hero)")]
pub struct UnknownPreset {
    pub name: String,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Catalogue, Preset::Scanner, Preset::Hero];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Catalogue => "catalogue",
            Preset::Scanner => "scanner",
            Preset::Hero => "hero",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Catalogue => "manual browsing strip, wraps at the ends",
            Preset::Scanner => "3s autoplay through finite steps, clamps",
            Preset::Hero => "6s looping autoplay with a slow transition",
        }
    }

    pub fn config(self) -> EngineConfig {
        match self {
            Preset::Catalogue => EngineConfig::catalogue(),
            Preset::Scanner => EngineConfig::scanner(),
            Preset::Hero => EngineConfig::hero(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPreset {
                name: wanted.to_string(),
            })
    }
}
