//! Host input vocabulary
//!
//! The engine never attaches listeners itself. Hosts translate their
//! toolkit's events into these types and call the engine's handlers.

use std::str::FromStr;

use vitrine_model::{NavigationIntent, Orientation};

/// Keys the engine reacts to. Anything else is `Other` and left for the
/// host to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }

    /// Intent for this key on a track with `orientation` and `item_count`
    /// items; `None` when the key does not navigate.
    pub fn intent(
        self,
        orientation: Orientation,
        item_count: usize,
    ) -> Option<NavigationIntent> {
        match (self, orientation) {
            (Key::ArrowRight, Orientation::Horizontal)
            | (Key::ArrowDown, Orientation::Vertical) => {
                Some(NavigationIntent::Next)
            }
            (Key::ArrowLeft, Orientation::Horizontal)
            | (Key::ArrowUp, Orientation::Vertical) => {
                Some(NavigationIntent::Prev)
            }
            (Key::Home, _) => Some(NavigationIntent::GoTo(0)),
            (Key::End, _) => Some(NavigationIntent::GoTo(
                item_count.saturating_sub(1) as isize,
            )),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Accepts DOM names (`ArrowLeft`) and snake case (`arrow_left`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "arrow_left" | "left" => Key::ArrowLeft,
            "arrow_right" | "right" => Key::ArrowRight,
            "arrow_up" | "up" => Key::ArrowUp,
            "arrow_down" | "down" => Key::ArrowDown,
            "home" => Key::Home,
            "end" => Key::End,
            other => Key::from_dom_key(other),
        })
    }
}

/// Raw wheel event deltas in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub dx: f32,
    pub dy: f32,
}

impl WheelDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Delta along the dominant axis. Trackpads report both axes at once;
    /// whichever moved more decides, so a horizontal swipe with a little
    /// vertical jitter still navigates a horizontal track.
    pub fn dominant(&self) -> f32 {
        let dx = if self.dx.is_finite() { self.dx } else { 0.0 };
        let dy = if self.dy.is_finite() { self.dy } else { 0.0 };
        if dx.abs() > dy.abs() { dx } else { dy }
    }
}
