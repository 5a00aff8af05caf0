//! LayoutResolver: track offset that centers the active item
//!
//! The resolver is a pure function of the active index and the host's
//! measurements. It holds the last measurements only so the offset can be
//! reapplied on index changes without the host re-measuring.

use std::ops::Range;

use vitrine_model::{LayoutMetrics, LoopPolicy};

use crate::config::{GapBreakpoint, LayoutConfig};

/// One entry of the rendering window around the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSlot {
    /// Index into the item list.
    pub index: usize,
    /// Position relative to the active item (0 is active, -1 the left
    /// neighbour).
    pub relative: isize,
}

#[derive(Debug, Clone)]
pub struct LayoutResolver {
    breakpoints: Vec<GapBreakpoint>,
    viewport_width: f32,
    metrics: LayoutMetrics,
    offset: f32,
}

impl LayoutResolver {
    pub fn new(cfg: &LayoutConfig) -> Self {
        Self {
            breakpoints: cfg.breakpoints.clone(),
            viewport_width: 0.0,
            metrics: LayoutMetrics::default(),
            offset: 0.0,
        }
    }

    /// `(container - item) / 2 - active * (item + gap)`.
    ///
    /// Unmeasured or non-finite inputs yield 0 so a transform is never fed
    /// `NaN` during the first layout pass.
    pub fn compute_offset(
        container_width: f32,
        item_width: f32,
        gap: f32,
        active_index: usize,
    ) -> f32 {
        let metrics = LayoutMetrics::new(container_width, item_width, gap);
        if !metrics.is_measured() {
            return 0.0;
        }
        let offset = (container_width - item_width) / 2.0
            - active_index as f32 * metrics.stride();
        if offset.is_finite() { offset } else { 0.0 }
    }

    /// Step function over the configured breakpoints: the gap of the widest
    /// breakpoint not exceeding `viewport_width`.
    pub fn gap_for(&self, viewport_width: f32) -> f32 {
        let Some(first) = self.breakpoints.first() else {
            return 0.0;
        };
        if !viewport_width.is_finite() {
            return first.gap;
        }
        self.breakpoints
            .iter()
            .take_while(|bp| bp.min_viewport <= viewport_width)
            .last()
            .unwrap_or(first)
            .gap
    }

    /// Adopt new measurements and recompute the gap and offset.
    pub fn resize(
        &mut self,
        viewport_width: f32,
        container_width: f32,
        item_width: f32,
        active_index: usize,
    ) -> f32 {
        self.viewport_width = viewport_width;
        self.metrics = LayoutMetrics::new(
            container_width,
            item_width,
            self.gap_for(viewport_width),
        );
        self.set_active(active_index)
    }

    /// Reapply the offset for a new active index.
    pub fn set_active(&mut self, active_index: usize) -> f32 {
        self.offset = Self::compute_offset(
            self.metrics.container_width,
            self.metrics.item_width,
            self.metrics.gap,
            active_index,
        );
        self.offset
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Resting offset of the track for the active item.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Resting offset plus a live drag displacement.
    pub fn track_offset(&self, drag_offset: f32) -> f32 {
        if !self.metrics.is_measured() || !drag_offset.is_finite() {
            return self.offset;
        }
        self.offset + drag_offset
    }

    /// Items within `radius` of the active one, ordered left to right.
    ///
    /// Wrapping carousels fill the window from the other end; each item
    /// appears at most once even when the window is wider than the list.
    pub fn visible_window(
        active_index: usize,
        item_count: usize,
        radius: usize,
        loop_policy: LoopPolicy,
    ) -> Vec<WindowSlot> {
        if item_count == 0 {
            return Vec::new();
        }
        let active = active_index.min(item_count - 1) as isize;
        let count = item_count as isize;
        let radius = radius.min(item_count) as isize;

        // Nearest neighbours claim an item first so the active slot always
        // sits at relative 0.
        let order = std::iter::once(0)
            .chain((1..=radius).flat_map(|d| [-d, d]));
        let mut slots = Vec::with_capacity((2 * radius + 1) as usize);
        for relative in order {
            let raw = active + relative;
            let index = match loop_policy {
                LoopPolicy::Wrap => raw.rem_euclid(count),
                LoopPolicy::Clamp if (0..count).contains(&raw) => raw,
                LoopPolicy::Clamp => continue,
            } as usize;
            if slots.iter().any(|s: &WindowSlot| s.index == index) {
                continue;
            }
            slots.push(WindowSlot { index, relative });
        }
        slots.sort_unstable_by_key(|s| s.relative);
        slots
    }

    /// Contiguous index range covered by a clamped window; convenience for
    /// hosts that slice their item list.
    pub fn window_range(
        active_index: usize,
        item_count: usize,
        radius: usize,
    ) -> Range<usize> {
        if item_count == 0 {
            return 0..0;
        }
        let active = active_index.min(item_count - 1);
        let start = active.saturating_sub(radius);
        let end = active.saturating_add(radius).saturating_add(1).min(item_count);
        start..end
    }
}
