//! Keyboard focus across several carousels on one page
//!
//! Tracks which carousel should receive keyboard navigation based on hover
//! state and explicit focus commands.

use std::time::{Duration, Instant};

use vitrine_model::CarouselKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSource {
    #[default]
    None,
    Mouse,
    Keyboard,
}

/// Resolution order for the keyboard target:
/// 1. `hovered_key` - if the pointer is over a carousel and hover is
///    preferred, it wins
/// 2. `keyboard_active_key` - explicit focus from arrow buttons or the host
#[derive(Debug, Default, Clone)]
pub struct CarouselFocus {
    /// The carousel currently under the pointer.
    pub hovered_key: Option<CarouselKey>,

    /// The carousel that receives keyboard events when nothing is hovered.
    pub keyboard_active_key: Option<CarouselKey>,

    /// Last observed pointer movement. Entering a carousel without moving
    /// the pointer (content scrolled underneath it) must not steal focus.
    pub last_pointer_move_at: Option<Instant>,

    /// Which input source last set the active target.
    pub last_source: FocusSource,
}

impl CarouselFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hovered(&mut self, key: Option<CarouselKey>) {
        self.hovered_key = key;
    }

    pub fn set_keyboard_active(&mut self, key: Option<CarouselKey>) {
        self.keyboard_active_key = key;
        self.last_source = FocusSource::Keyboard;
    }

    /// Hover is accepted as focus (pointer entered after moving).
    pub fn activate_hovered(&mut self, key: CarouselKey) {
        self.hovered_key = Some(key);
        self.last_source = FocusSource::Mouse;
    }

    pub fn clear_hover(&mut self) {
        self.hovered_key = None;
    }

    pub fn clear_all(&mut self) {
        self.hovered_key = None;
        self.keyboard_active_key = None;
        self.last_source = FocusSource::None;
    }

    pub fn record_pointer_move(&mut self, when: Instant) {
        self.last_pointer_move_at = Some(when);
    }

    pub fn has_recent_pointer_move(&self, now: Instant, window: Duration) -> bool {
        self.last_pointer_move_at
            .is_some_and(|t| now.saturating_duration_since(t) <= window)
    }

    /// Hover wins while it was the last accepted source, or when the
    /// pointer moved recently.
    pub fn should_prefer_hover(&self, now: Instant, window: Duration) -> bool {
        if self.hovered_key.is_none() {
            return false;
        }
        if self.last_source == FocusSource::Mouse {
            return true;
        }
        self.has_recent_pointer_move(now, window)
    }

    /// Carousel that should receive the next key event.
    pub fn active_key(
        &self,
        now: Instant,
        window: Duration,
    ) -> Option<&CarouselKey> {
        if self.should_prefer_hover(now, window) {
            self.hovered_key.as_ref()
        } else {
            self.keyboard_active_key
                .as_ref()
                .or(self.hovered_key.as_ref())
        }
    }

    /// Forget `key` everywhere (carousel removed from the page).
    pub fn forget(&mut self, key: &CarouselKey) {
        if self.hovered_key.as_ref() == Some(key) {
            self.hovered_key = None;
        }
        if self.keyboard_active_key.as_ref() == Some(key) {
            self.keyboard_active_key = None;
        }
    }
}
