//! Carousel engine constants
//!
//! Shared defaults for transitions, autoplay, gesture resolution, wheel
//! debouncing and responsive layout. Tuning should happen here so every
//! carousel updates consistently; per-instance overrides go through
//! [`EngineConfig`](crate::config::EngineConfig).

/// Transition lock timing.
pub mod transition {
    /// Lock duration (ms) after a committed index change.
    pub const DURATION_MS: u64 = 600;
    /// Lock duration (ms) when the host reports a reduced-motion preference.
    pub const REDUCED_MOTION_DURATION_MS: u64 = 180;
}

/// Autoplay cadence.
pub mod autoplay {
    /// Delay (ms) between automatic advances.
    pub const DELAY_MS: u64 = 5000;
    /// Progress value at which the scheduler fires.
    pub const PROGRESS_FULL: f32 = 100.0;
}

/// Drag gesture resolution.
pub mod gesture {
    /// Minimum travel (logical px) for a drag to navigate.
    pub const DISTANCE_THRESHOLD: f32 = 50.0;
    /// Minimum release velocity (px/ms) for a flick to navigate.
    pub const VELOCITY_THRESHOLD: f32 = 0.4;
    /// A velocity sample older than this (ms) at release counts as zero.
    pub const VELOCITY_WINDOW_MS: u64 = 100;
}

/// Wheel and trackpad debouncing.
pub mod wheel {
    /// Quiet period (ms) after the last wheel event before resolving.
    pub const QUIET_MS: u64 = 40;
    /// Minimum accumulated delta for a wheel burst to navigate.
    pub const THRESHOLD: f32 = 25.0;
}

/// Responsive gap breakpoints: `(min viewport width, gap)`, ascending.
pub mod layout {
    pub const GAP_BREAKPOINTS: [(f32, f32); 4] =
        [(0.0, 16.0), (640.0, 24.0), (1024.0, 32.0), (1440.0, 48.0)];
    /// Default neighbour radius for windowed rendering.
    pub const WINDOW_RADIUS: usize = 2;
}

/// Focus and hover-related behavior constants for multi-carousel pages.
pub mod focus {
    /// Time window (ms) within which mouse movement authorizes hover-driven
    /// focus switches. If the last focus source was mouse, hover remains
    /// preferred while the cursor stays over a carousel.
    pub const HOVER_SWITCH_WINDOW_MS: u64 = 150;
}
