//! Read-only snapshot of a carousel and the policies that shape it.

/// Boundary behaviour at the first and last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoopPolicy {
    /// Finite (clamped) carousel.
    #[default]
    Clamp,
    /// Wrap-around carousel. Indexing wraps with modulo arithmetic.
    Wrap,
}

impl LoopPolicy {
    pub fn from_loop(enabled: bool) -> Self {
        if enabled {
            LoopPolicy::Wrap
        } else {
            LoopPolicy::Clamp
        }
    }

    pub fn wraps(self) -> bool {
        matches!(self, LoopPolicy::Wrap)
    }
}

/// Track axis; decides which arrow keys navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Index controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    #[default]
    Idle,
    Transitioning,
}

/// Snapshot handed to presentation layers (indicators, progress bars).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_index: usize,
    pub is_transitioning: bool,
    pub is_paused: bool,
    /// Autoplay progress toward the next slide, in `[0, 100]`.
    pub autoplay_progress: f32,
}
