//! IndexController: the single writer of the current index
//!
//! Every input source (keyboard, pointer, wheel, autoplay, programmatic
//! calls) submits a [`NavigationIntent`] here. The controller clamps or
//! wraps the target, enforces the transition lock and reports an
//! [`Outcome`]. Intents that arrive while a commit is settling are dropped,
//! never queued: rapid input collapses to the last settled state.

use std::time::{Duration, Instant};

use vitrine_model::{
    Direction, DropReason, LoopPolicy, NavigationIntent, NavigationSource,
    Outcome, Phase,
};

use crate::config::TransitionConfig;

#[derive(Debug, Clone)]
pub struct IndexController {
    item_count: usize,
    current: usize,
    loop_policy: LoopPolicy,
    paused: bool,
    phase: Phase,
    /// When the transition lock releases; `Some` only while transitioning.
    release_at: Option<Instant>,
    transition: TransitionConfig,
}

impl IndexController {
    /// `initial_index` is clamped or wrapped into range like any other
    /// request.
    pub fn new(
        item_count: usize,
        initial_index: usize,
        loop_policy: LoopPolicy,
        transition: TransitionConfig,
    ) -> Self {
        let mut controller = Self {
            item_count,
            current: 0,
            loop_policy,
            paused: false,
            phase: Phase::Idle,
            release_at: None,
            transition,
        };
        controller.current =
            controller.normalize(initial_index.min(isize::MAX as usize) as isize);
        controller
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn release_at(&self) -> Option<Instant> {
        self.release_at
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn loop_policy(&self) -> LoopPolicy {
        self.loop_policy
    }

    pub fn can_go_next(&self) -> bool {
        self.item_count > 1
            && (self.loop_policy.wraps() || self.current + 1 < self.item_count)
    }

    pub fn can_go_prev(&self) -> bool {
        self.item_count > 1 && (self.loop_policy.wraps() || self.current > 0)
    }

    /// Lock duration applied to the next commit.
    pub fn transition_duration(&self) -> Duration {
        self.transition.effective_duration()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.transition.reduced_motion = reduced;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Release the transition lock once its deadline has passed.
    /// Returns true when the lock was released by this call.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.release_at {
            Some(at) if now >= at => {
                self.release_at = None;
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Release the lock immediately (teardown, catalogue replacement).
    pub fn cancel_transition(&mut self) -> bool {
        let was = self.release_at.take().is_some();
        self.phase = Phase::Idle;
        was
    }

    /// Adopt a new item count, re-clamping the current index. An empty or
    /// single-item carousel sits at index 0.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if item_count == 0 {
            self.current = 0;
            self.cancel_transition();
        } else if self.current >= item_count {
            self.current = item_count - 1;
        }
    }

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

    /// Arbitrate one intent.
    pub fn submit(
        &mut self,
        intent: NavigationIntent,
        source: NavigationSource,
        now: Instant,
    ) -> Outcome {
        if let NavigationIntent::DragResolved(None) = intent {
            return Outcome::SnapBack {
                index: self.current,
            };
        }
        if self.item_count <= 1 {
            return self.drop_intent(intent, source, DropReason::Empty);
        }
        if self.is_transitioning() {
            return self.drop_intent(intent, source, DropReason::Transitioning);
        }

        let target = match self.resolve(intent) {
            Ok(target) => target,
            Err(reason) => return self.drop_intent(intent, source, reason),
        };
        self.commit(target, source, now)
    }

    /// Target index for `intent`, or why it goes nowhere. Ignores the lock.
    pub fn resolve(&self, intent: NavigationIntent) -> Result<usize, DropReason> {
        if self.item_count <= 1 {
            return Err(DropReason::Empty);
        }
        let target = match intent {
            NavigationIntent::Next => self.step(Direction::Next)?,
            NavigationIntent::Prev => self.step(Direction::Prev)?,
            NavigationIntent::DragResolved(Some(direction)) => {
                self.step(direction)?
            }
            NavigationIntent::DragResolved(None) => self.current,
            NavigationIntent::GoTo(index) => self.normalize(index),
        };
        if target == self.current {
            Err(DropReason::Unchanged)
        } else {
            Ok(target)
        }
    }

    fn step(&self, direction: Direction) -> Result<usize, DropReason> {
        let raw = self.current as isize + direction.step();
        if !self.loop_policy.wraps()
            && (raw < 0 || raw >= self.item_count as isize)
        {
            return Err(DropReason::Boundary);
        }
        Ok(self.normalize(raw))
    }

    /// Clamp or wrap an arbitrary index into `[0, item_count)`.
    fn normalize(&self, index: isize) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        let count = self.item_count as isize;
        match self.loop_policy {
            LoopPolicy::Wrap => index.rem_euclid(count) as usize,
            LoopPolicy::Clamp => index.clamp(0, count - 1) as usize,
        }
    }

    fn commit(
        &mut self,
        target: usize,
        source: NavigationSource,
        now: Instant,
    ) -> Outcome {
        let from = self.current;
        let duration = self.transition_duration();
        self.current = target;
        self.phase = Phase::Transitioning;
        self.release_at = Some(now + duration);
        tracing::debug!(
            from,
            to = target,
            ?source,
            lock_ms = duration.as_millis() as u64,
            "slide committed"
        );
        Outcome::Committed {
            from,
            to: target,
            source,
        }
    }

    fn drop_intent(
        &self,
        intent: NavigationIntent,
        source: NavigationSource,
        reason: DropReason,
    ) -> Outcome {
        tracing::trace!(?intent, ?source, ?reason, "intent dropped");
        Outcome::Dropped(reason)
    }
}
