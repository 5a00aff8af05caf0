//! Configuration library for Vitrine carousels.
//!
//! Loads an [`EngineConfig`](vitrine_core::EngineConfig) from layered
//! sources (defaults, a named preset, a TOML document, `.env` and
//! `VITRINE_*` variables) and applies guard rails that catch combinations
//! which validate but would make a carousel unusable.
#![allow(missing_docs)]

pub mod env;
pub mod loader;
pub mod models;
pub mod presets;
pub mod validation;

pub use env::{EnvSource, Layered, ProcessEnv};
pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigMetadata,
    ConfigSource, error::ConfigLoadError, read_document,
};
pub use models::CarouselFile;
pub use presets::{Preset, UnknownPreset};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
