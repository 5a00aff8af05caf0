//! # Vitrine Core
//!
//! Interactive carousel/slider engine: one consistent current index
//! arbitrated across autoplay, pointer drags, keyboard, wheel and resize.
//!
//! ## Architecture
//!
//! - [`gesture`]: drag tracking with velocity intent detection, and the
//!   wheel debouncer
//! - [`autoplay`]: frame-driven elapsed-time accumulator with an interval
//!   fallback
//! - [`controller`]: the authoritative index state machine and transition
//!   lock
//! - [`layout`]: centering offset and responsive gap
//! - [`engine`]: the composition root hosts bind their events to
//! - [`scope`]: explicit disposer list for listeners and timers
//! - [`registry`]: several carousels on one page with shared focus
//!
//! The engine never reads a clock: every handler takes the host's
//! [`std::time::Instant`], so behaviour is reproducible under test.
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use vitrine_core::prelude::*;
//!
//! let items = (0..5)
//!     .map(|i| CarouselItem::from_slug(&format!("landing-{i}")))
//!     .collect();
//! let mut engine = CarouselEngine::new(items, EngineConfig::catalogue())?;
//!
//! let t0 = Instant::now();
//! assert!(engine.go_to_next(t0).is_committed());
//! // Locked until the transition settles.
//! assert!(!engine.go_to_next(t0 + Duration::from_millis(10)).is_committed());
//! assert_eq!(engine.current_index(), 1);
//! # Ok::<(), vitrine_core::EngineConfigError>(())
//! ```
#![allow(missing_docs)]

pub mod autoplay;
pub mod config;
pub mod constants;
pub mod controller;
pub mod engine;
pub mod focus;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod registry;
pub mod scope;

pub use autoplay::AutoplayScheduler;
pub use config::{
    AutoplayMode, EngineConfig, EngineConfigError, GapBreakpoint,
    GestureConfig, LayoutConfig, TransitionConfig, WheelConfig,
};
pub use controller::IndexController;
pub use engine::{CarouselEngine, CarouselEngineBuilder, SlideChangeFn};
pub use focus::{CarouselFocus, FocusSource};
pub use gesture::{GestureSample, GestureTracker, WheelDebouncer};
pub use input::{Key, WheelDelta};
pub use layout::{LayoutResolver, WindowSlot};
pub use registry::CarouselRegistry;
pub use scope::{Resource, Scope};

pub mod prelude {
    pub use crate::config::{AutoplayMode, EngineConfig};
    pub use crate::engine::CarouselEngine;
    pub use crate::input::{Key, WheelDelta};
    pub use crate::registry::CarouselRegistry;
    pub use vitrine_model::prelude::*;
}
