//! Tooling for Vitrine carousels.
//!
//! The library half of `vitrinectl`: timed input scripts, a replay driver
//! that feeds them through a [`CarouselEngine`](vitrine_core::CarouselEngine)
//! on a synthetic clock, and the text report printed by the CLI.
#![allow(missing_docs)]

pub mod replay;
pub mod report;
pub mod script;

pub use replay::{ReplayRecord, ReplaySummary, replay};
pub use script::{Action, Script, ScriptError, ScriptEvent, Viewport};
