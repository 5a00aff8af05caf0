//! Registry for the carousels mounted on a page, keyed by [`CarouselKey`]

use std::collections::HashMap;
use std::time::{Duration, Instant};

use vitrine_model::{CarouselKey, Outcome};

use crate::constants::focus::HOVER_SWITCH_WINDOW_MS;
use crate::engine::CarouselEngine;
use crate::focus::CarouselFocus;
use crate::input::Key;
use crate::scope::Resource;

#[derive(Debug)]
pub struct CarouselRegistry {
    engines: HashMap<CarouselKey, CarouselEngine>,
    focus: CarouselFocus,
    hover_window: Duration,
}

impl Default for CarouselRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            focus: CarouselFocus::new(),
            hover_window: Duration::from_millis(HOVER_SWITCH_WINDOW_MS),
        }
    }

    /// Register an engine. A previous engine under the same key is
    /// unmounted and returned.
    pub fn insert(
        &mut self,
        key: CarouselKey,
        engine: CarouselEngine,
    ) -> Option<CarouselEngine> {
        let mut previous = self.engines.insert(key, engine);
        if let Some(old) = previous.as_mut() {
            old.unmount();
        }
        previous
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselEngine> {
        self.engines.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut CarouselEngine> {
        self.engines.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CarouselKey> {
        self.engines.keys()
    }

    /// Unmount and remove a carousel; returns what it released.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<Vec<Resource>> {
        self.focus.forget(key);
        let mut engine = self.engines.remove(key)?;
        Some(engine.unmount())
    }

    pub fn focus(&self) -> &CarouselFocus {
        &self.focus
    }

    pub fn focus_keyboard(&mut self, key: Option<CarouselKey>) {
        self.focus.set_keyboard_active(key);
    }

    pub fn pointer_moved(&mut self, now: Instant) {
        self.focus.record_pointer_move(now);
    }

    /// Pointer entered `key`: hover focus plus the engine's hover pause.
    pub fn pointer_enter(&mut self, key: &CarouselKey, now: Instant) {
        let Some(engine) = self.engines.get_mut(key) else {
            return;
        };
        engine.pointer_enter();
        if self.focus.has_recent_pointer_move(now, self.hover_window) {
            self.focus.activate_hovered(key.clone());
        } else {
            self.focus.set_hovered(Some(key.clone()));
        }
    }

    pub fn pointer_leave(&mut self, key: &CarouselKey) {
        if let Some(engine) = self.engines.get_mut(key) {
            engine.pointer_leave();
        }
        if self.focus.hovered_key.as_ref() == Some(key) {
            self.focus.clear_hover();
        }
    }

    /// Carousel that would receive a key event at `now`.
    pub fn active_key(&self, now: Instant) -> Option<&CarouselKey> {
        self.focus
            .active_key(now, self.hover_window)
            .filter(|key| self.engines.contains_key(*key))
    }

    /// Route a key event to the focused carousel.
    pub fn key_down(
        &mut self,
        key: Key,
        now: Instant,
    ) -> Option<(CarouselKey, Outcome)> {
        let target = self.active_key(now)?.clone();
        let engine = self.engines.get_mut(&target)?;
        let outcome = engine.key_down(key, now)?;
        Some((target, outcome))
    }

    /// Drive every carousel's frame tick.
    pub fn frame(&mut self, now: Instant) -> Vec<(CarouselKey, Outcome)> {
        self.engines
            .iter_mut()
            .filter_map(|(key, engine)| {
                engine.frame(now).map(|outcome| (key.clone(), outcome))
            })
            .collect()
    }

    /// Unmount everything (page navigation).
    pub fn clear(&mut self) {
        for (_, mut engine) in self.engines.drain() {
            engine.unmount();
        }
        self.focus.clear_all();
    }
}
