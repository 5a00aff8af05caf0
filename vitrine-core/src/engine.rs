//! CarouselEngine: the composition root
//!
//! Wires the gesture tracker, wheel debouncer, autoplay scheduler, layout
//! resolver and index controller behind one contract. Hosts bind their
//! toolkit's events to the handler methods; presentation layers read the
//! state surface. Every handler takes the host's `now` so the engine never
//! reads a clock itself.

use std::fmt;
use std::time::Instant;

use vitrine_model::{
    CarouselItem, CarouselState, DropReason, NavigationIntent,
    NavigationSource, Outcome,
};

use crate::autoplay::AutoplayScheduler;
use crate::config::{AutoplayMode, EngineConfig, EngineConfigError};
use crate::controller::IndexController;
use crate::gesture::{GestureTracker, WheelDebouncer};
use crate::input::{Key, WheelDelta};
use crate::layout::{LayoutResolver, WindowSlot};
use crate::scope::{Resource, Scope};

/// Callback fired with the new index after every committed change.
pub type SlideChangeFn = Box<dyn FnMut(usize)>;

pub struct CarouselEngineBuilder {
    items: Vec<CarouselItem>,
    config: EngineConfig,
    on_slide_change: Option<SlideChangeFn>,
}

impl fmt::Debug for CarouselEngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselEngineBuilder")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("on_slide_change", &self.on_slide_change.is_some())
            .finish()
    }
}

impl CarouselEngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.config.autoplay = enabled;
        self
    }

    pub fn initial_index(mut self, index: usize) -> Self {
        self.config.initial_index = index;
        self
    }

    pub fn on_slide_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_slide_change = Some(Box::new(f));
        self
    }

    /// Validate the configuration and mount the engine.
    pub fn build(self) -> Result<CarouselEngine, EngineConfigError> {
        self.config.validate()?;
        let cfg = &self.config;
        let controller = IndexController::new(
            self.items.len(),
            cfg.initial_index,
            cfg.loop_policy,
            cfg.transition,
        );
        let mut engine = CarouselEngine {
            autoplay: AutoplayScheduler::new(
                cfg.autoplay,
                cfg.autoplay_delay,
                cfg.autoplay_mode,
            ),
            gesture: GestureTracker::new(cfg.gesture),
            wheel: WheelDebouncer::new(cfg.wheel),
            layout: LayoutResolver::new(&cfg.layout),
            controller,
            scope: Scope::new(),
            last_frame: None,
            hover_paused: false,
            mounted: false,
            items: self.items,
            config: self.config,
            on_slide_change: self.on_slide_change,
        };
        engine.mount();
        Ok(engine)
    }
}

pub struct CarouselEngine {
    items: Vec<CarouselItem>,
    config: EngineConfig,
    controller: IndexController,
    autoplay: AutoplayScheduler,
    gesture: GestureTracker,
    wheel: WheelDebouncer,
    layout: LayoutResolver,
    scope: Scope,
    /// Timestamp of the previous frame; the next frame's delta is measured
    /// from here.
    last_frame: Option<Instant>,
    /// Autoplay was paused by pointer hover rather than by the host.
    hover_paused: bool,
    mounted: bool,
    on_slide_change: Option<SlideChangeFn>,
}

impl fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("items", &self.items.len())
            .field("controller", &self.controller)
            .field("autoplay", &self.autoplay)
            .field("gesture", &self.gesture)
            .field("wheel", &self.wheel)
            .field("layout", &self.layout)
            .field("scope", &self.scope)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl CarouselEngine {
    pub fn builder(items: Vec<CarouselItem>) -> CarouselEngineBuilder {
        CarouselEngineBuilder {
            items,
            config: EngineConfig::default(),
            on_slide_change: None,
        }
    }

    /// Shorthand for `builder(items).config(config).build()`.
    pub fn new(
        items: Vec<CarouselItem>,
        config: EngineConfig,
    ) -> Result<Self, EngineConfigError> {
        Self::builder(items).config(config).build()
    }

    // ---- read surface -------------------------------------------------

    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    /// Autoplay progress toward the next slide, `[0, 100]`.
    pub fn progress(&self) -> f32 {
        self.autoplay.progress()
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    pub fn can_go_next(&self) -> bool {
        self.controller.can_go_next()
    }

    pub fn can_go_prev(&self) -> bool {
        self.controller.can_go_prev()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index(),
            is_transitioning: self.is_transitioning(),
            is_paused: self.is_paused(),
            autoplay_progress: self.progress(),
        }
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn active_item(&self) -> Option<&CarouselItem> {
        self.items.get(self.current_index())
    }

    /// The active item and its neighbours within `radius`, for windowed
    /// rendering.
    pub fn visible_items(
        &self,
        radius: usize,
    ) -> Vec<(WindowSlot, &CarouselItem)> {
        LayoutResolver::visible_window(
            self.current_index(),
            self.items.len(),
            radius,
            self.config.loop_policy,
        )
        .into_iter()
        .filter_map(|slot| self.items.get(slot.index).map(|item| (slot, item)))
        .collect()
    }

    /// Resting track offset for the active item.
    pub fn offset(&self) -> f32 {
        self.layout.offset()
    }

    /// Track offset including a drag in progress.
    pub fn track_offset(&self) -> f32 {
        self.layout.track_offset(self.gesture.offset())
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn layout(&self) -> &LayoutResolver {
        &self.layout
    }

    pub fn controller(&self) -> &IndexController {
        &self.controller
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Earliest pending deadline (lock release or wheel quiet period).
    /// Hosts that do not run a frame loop schedule a `poll` for this time.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.controller.release_at(), self.wheel.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ---- command surface ----------------------------------------------

    pub fn go_to_slide(&mut self, index: isize, now: Instant) -> Outcome {
        self.submit(
            NavigationIntent::GoTo(index),
            NavigationSource::Programmatic,
            now,
        )
    }

    pub fn go_to_next(&mut self, now: Instant) -> Outcome {
        self.submit(NavigationIntent::Next, NavigationSource::Programmatic, now)
    }

    pub fn go_to_prev(&mut self, now: Instant) -> Outcome {
        self.submit(NavigationIntent::Prev, NavigationSource::Programmatic, now)
    }

    pub fn pause(&mut self) {
        self.hover_paused = false;
        self.controller.pause();
    }

    pub fn resume(&mut self) {
        self.hover_paused = false;
        self.controller.resume();
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.controller.set_reduced_motion(reduced);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.config.autoplay = enabled;
        self.autoplay.set_enabled(enabled);
        if enabled && self.mounted && !self.items.is_empty() {
            self.acquire_autoplay_interval();
        } else {
            self.scope.release(Resource::AutoplayInterval);
        }
    }

    /// Swap the catalogue. An empty catalogue tears every scoped resource
    /// down; repopulating re-acquires the engine-side ones and the host
    /// binds its listeners again.
    pub fn set_items(&mut self, items: Vec<CarouselItem>) {
        let was_empty = self.items.is_empty();
        self.items = items;
        self.controller.set_item_count(self.items.len());

        if self.items.is_empty() {
            self.release_resources();
            return;
        }
        if was_empty && self.mounted {
            self.acquire_resources();
        }
        self.layout.set_active(self.current_index());
    }

    /// Register a host detach callback to run on teardown.
    pub fn defer(&mut self, disposer: impl FnOnce() + 'static) {
        self.scope.defer(disposer);
    }

    /// Tear down every listener and timer. Handlers are inert afterwards.
    /// Returns the resources that were released.
    pub fn unmount(&mut self) -> Vec<Resource> {
        if !self.mounted {
            return Vec::new();
        }
        self.mounted = false;
        tracing::debug!(items = self.items.len(), "carousel unmounted");
        self.release_resources()
    }

    // ---- input handlers -----------------------------------------------

    /// Returns `None` for keys the carousel does not handle so the host can
    /// let them propagate.
    pub fn key_down(&mut self, key: Key, now: Instant) -> Option<Outcome> {
        if !self.mounted {
            return None;
        }
        let intent = key.intent(self.config.orientation, self.items.len())?;
        Some(self.submit(intent, NavigationSource::Keyboard, now))
    }

    pub fn pointer_down(&mut self, position: f32, now: Instant) {
        if !self.mounted || self.items.is_empty() {
            return;
        }
        self.settle(now);
        self.gesture.start(position, now);
    }

    /// Returns the track offset to render while dragging.
    pub fn pointer_move(&mut self, position: f32, now: Instant) -> Option<f32> {
        if !self.mounted {
            return None;
        }
        self.gesture.move_to(position, now)?;
        Some(self.track_offset())
    }

    /// Resolve the drag. Anything short of a commit becomes a snap-back to
    /// the current index, including a direction dropped by the lock.
    pub fn pointer_up(&mut self, now: Instant) -> Option<Outcome> {
        if !self.mounted {
            return None;
        }
        let intent = self.gesture.end(now)?;
        let outcome = self.submit(intent, NavigationSource::Pointer, now);
        if outcome.is_committed() {
            return Some(outcome);
        }
        let index = self.current_index();
        tracing::debug!(?outcome, index, "drag snaps back");
        Some(Outcome::SnapBack { index })
    }

    pub fn pointer_cancel(&mut self) -> Option<Outcome> {
        if !self.gesture.cancel() {
            return None;
        }
        Some(Outcome::SnapBack {
            index: self.current_index(),
        })
    }

    /// Pointer entered the carousel: suppress autoplay while the visitor
    /// inspects a slide.
    pub fn pointer_enter(&mut self) {
        if self.config.pause_on_hover && !self.controller.is_paused() {
            self.controller.pause();
            self.hover_paused = true;
        }
    }

    /// Pointer left: resume, unless the host paused explicitly.
    pub fn pointer_leave(&mut self) {
        if self.hover_paused {
            self.controller.resume();
            self.hover_paused = false;
        }
    }

    /// Feed a wheel event. A burst that had already gone quiet is resolved
    /// first, so hosts that only forward wheel events still navigate.
    pub fn wheel(&mut self, delta: WheelDelta, now: Instant) -> Option<Outcome> {
        if !self.mounted || self.items.is_empty() {
            return None;
        }
        self.settle(now);
        let settled = self.poll_wheel(now);
        self.wheel.push(delta.dominant(), now);
        if self.wheel.is_pending() {
            self.scope.acquire(Resource::WheelTimer);
        }
        settled
    }

    /// Viewport or container size changed.
    pub fn resize(
        &mut self,
        viewport_width: f32,
        container_width: f32,
        item_width: f32,
    ) -> f32 {
        self.layout.resize(
            viewport_width,
            container_width,
            item_width,
            self.current_index(),
        )
    }

    /// Fire any elapsed deadline: releases the transition lock and resolves
    /// a quiet wheel burst.
    pub fn poll(&mut self, now: Instant) -> Option<Outcome> {
        if !self.mounted {
            return None;
        }
        self.settle(now);
        self.poll_wheel(now)
    }

    /// Per-frame tick. Delta time is measured from the previous frame, so
    /// the first frame after mount only establishes the baseline.
    pub fn frame(&mut self, now: Instant) -> Option<Outcome> {
        if !self.mounted {
            return None;
        }
        let delta = self
            .last_frame
            .map(|prev| now.saturating_duration_since(prev))
            .unwrap_or_default();
        self.last_frame = Some(now);

        // A wheel burst that went nowhere must not swallow this frame's
        // elapsed time.
        let settled = self.poll(now);
        if settled.is_some_and(|outcome| outcome.is_committed()) {
            return settled;
        }
        if self.autoplay.tick(delta, self.autoplay_held()) {
            return Some(self.submit(
                NavigationIntent::Next,
                NavigationSource::Autoplay,
                now,
            ));
        }
        settled
    }

    /// Fixed-interval autoplay callback for hosts without frame timestamps.
    pub fn autoplay_interval(&mut self, now: Instant) -> Option<Outcome> {
        if !self.mounted {
            return None;
        }
        self.settle(now);
        if self.autoplay.interval_elapsed(self.autoplay_held()) {
            return Some(self.submit(
                NavigationIntent::Next,
                NavigationSource::Autoplay,
                now,
            ));
        }
        None
    }

    // ---- internals ----------------------------------------------------

    fn submit(
        &mut self,
        intent: NavigationIntent,
        source: NavigationSource,
        now: Instant,
    ) -> Outcome {
        if !self.mounted {
            return Outcome::Dropped(DropReason::Unmounted);
        }
        self.settle(now);
        let outcome = self.controller.submit(intent, source, now);
        if let Outcome::Committed { to, .. } = outcome {
            self.autoplay.reset();
            self.layout.set_active(to);
            self.scope.acquire(Resource::TransitionTimer);
            if let Some(callback) = self.on_slide_change.as_mut() {
                callback(to);
            }
        }
        outcome
    }

    fn settle(&mut self, now: Instant) {
        if self.controller.settle(now) {
            self.scope.release(Resource::TransitionTimer);
        }
    }

    fn poll_wheel(&mut self, now: Instant) -> Option<Outcome> {
        let direction = self.wheel.poll(now);
        if !self.wheel.is_pending() {
            self.scope.release(Resource::WheelTimer);
        }
        let direction = direction?;
        Some(self.submit(direction.into(), NavigationSource::Wheel, now))
    }

    fn autoplay_held(&self) -> bool {
        self.controller.is_paused()
            || self.controller.is_transitioning()
            || self.gesture.is_active()
            || !self.controller.can_go_next()
    }

    fn mount(&mut self) {
        self.mounted = true;
        self.acquire_resources();
        tracing::debug!(
            items = self.items.len(),
            index = self.current_index(),
            autoplay = self.config.autoplay,
            "carousel mounted"
        );
    }

    fn acquire_resources(&mut self) {
        if self.items.is_empty() {
            return;
        }
        for listener in Resource::LISTENERS {
            self.scope.acquire(listener);
        }
        self.scope.acquire(Resource::FrameLoop);
        if self.config.autoplay {
            self.acquire_autoplay_interval();
        }
    }

    fn acquire_autoplay_interval(&mut self) {
        if self.config.autoplay_mode == AutoplayMode::Interval {
            self.scope.acquire(Resource::AutoplayInterval);
        }
    }

    fn release_resources(&mut self) -> Vec<Resource> {
        self.controller.cancel_transition();
        self.wheel.cancel();
        self.gesture.cancel();
        self.autoplay.reset();
        self.last_frame = None;
        self.hover_paused = false;
        self.scope.teardown()
    }
}

impl Drop for CarouselEngine {
    fn drop(&mut self) {
        self.unmount();
    }
}
