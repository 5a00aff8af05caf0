//! Raw pointer, touch and wheel streams normalized into navigation intents.

pub mod tracker;
pub mod wheel;

pub use tracker::{GestureSample, GestureTracker, resolve};
pub use wheel::WheelDebouncer;
