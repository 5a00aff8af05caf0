//! Scoped resource lifetimes for a mounted engine
//!
//! Every listener the host binds and every deferred callback the engine
//! relies on is recorded here when acquired and released together on
//! teardown. Host-side detach callbacks registered with [`Scope::defer`]
//! run in reverse acquisition order, the way drops unwind.

use std::fmt;

/// A listener, loop or timer owned by an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    KeyboardListener,
    PointerListener,
    WheelListener,
    ResizeListener,
    /// Per-frame tick loop.
    FrameLoop,
    /// Fixed-interval autoplay callback (hosts without frame timestamps).
    AutoplayInterval,
    /// Deferred release of the transition lock.
    TransitionTimer,
    /// Wheel quiet-period timer.
    WheelTimer,
}

impl Resource {
    /// Listeners the host binds for the lifetime of a mounted engine.
    pub const LISTENERS: [Resource; 4] = [
        Resource::KeyboardListener,
        Resource::PointerListener,
        Resource::WheelListener,
        Resource::ResizeListener,
    ];

    pub fn is_timer(self) -> bool {
        matches!(self, Resource::TransitionTimer | Resource::WheelTimer)
    }
}

type Disposer = Box<dyn FnOnce()>;

/// Explicit disposer list.
#[derive(Default)]
pub struct Scope {
    held: Vec<Resource>,
    disposers: Vec<Disposer>,
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("held", &self.held)
            .field("disposers", &self.disposers.len())
            .finish()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `resource` as held. Acquiring twice is a no-op.
    pub fn acquire(&mut self, resource: Resource) -> bool {
        if self.is_held(resource) {
            return false;
        }
        self.held.push(resource);
        true
    }

    /// Release a single resource (a timer that fired, a cancelled burst).
    pub fn release(&mut self, resource: Resource) -> bool {
        let before = self.held.len();
        self.held.retain(|r| *r != resource);
        before != self.held.len()
    }

    pub fn is_held(&self, resource: Resource) -> bool {
        self.held.contains(&resource)
    }

    pub fn held(&self) -> &[Resource] {
        &self.held
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.disposers.is_empty()
    }

    /// Register a host callback to run on teardown (detach a DOM listener,
    /// cancel a platform timer).
    pub fn defer(&mut self, disposer: impl FnOnce() + 'static) {
        self.disposers.push(Box::new(disposer));
    }

    pub fn pending_disposers(&self) -> usize {
        self.disposers.len()
    }

    /// Release everything. Returns the resources that were held, most
    /// recently acquired first.
    pub fn teardown(&mut self) -> Vec<Resource> {
        while let Some(disposer) = self.disposers.pop() {
            disposer();
        }
        let mut released = std::mem::take(&mut self.held);
        released.reverse();
        if !released.is_empty() {
            tracing::debug!(?released, "scope torn down");
        }
        released
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn acquire_is_idempotent() {
        let mut scope = Scope::new();
        assert!(scope.acquire(Resource::FrameLoop));
        assert!(!scope.acquire(Resource::FrameLoop));
        assert_eq!(scope.held(), &[Resource::FrameLoop]);
    }

    #[test]
    fn release_single_timer() {
        let mut scope = Scope::new();
        scope.acquire(Resource::FrameLoop);
        scope.acquire(Resource::TransitionTimer);
        assert!(scope.release(Resource::TransitionTimer));
        assert!(!scope.release(Resource::TransitionTimer));
        assert!(scope.is_held(Resource::FrameLoop));
    }

    #[test]
    fn teardown_runs_disposers_in_reverse() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = Scope::new();
        for name in ["keyboard", "pointer", "resize"] {
            let log = Rc::clone(&log);
            scope.defer(move || log.borrow_mut().push(name));
        }
        scope.acquire(Resource::KeyboardListener);
        scope.acquire(Resource::FrameLoop);

        let released = scope.teardown();
        assert_eq!(
            released,
            vec![Resource::FrameLoop, Resource::KeyboardListener]
        );
        assert_eq!(*log.borrow(), vec!["resize", "pointer", "keyboard"]);
        assert!(scope.is_empty());
        assert!(scope.teardown().is_empty());
    }

    #[test]
    fn drop_runs_disposers() {
        let fired = Rc::new(RefCell::new(false));
        {
            let mut scope = Scope::new();
            let fired = Rc::clone(&fired);
            scope.defer(move || *fired.borrow_mut() = true);
        }
        assert!(*fired.borrow());
    }
}
