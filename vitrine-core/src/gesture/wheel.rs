//! Wheel/trackpad input as a synthetic, debounced gesture.

use std::time::Instant;

use vitrine_model::Direction;

use crate::config::WheelConfig;

/// Accumulates wheel deltas and resolves a burst to at most one step once
/// the wheel has been quiet for the configured period.
///
/// Every event re-arms the quiet period, so trackpad momentum keeps the
/// burst open instead of firing repeatedly.
#[derive(Debug, Clone)]
pub struct WheelDebouncer {
    cfg: WheelConfig,
    accumulated: f32,
    events: u32,
    deadline: Option<Instant>,
}

impl WheelDebouncer {
    pub fn new(cfg: WheelConfig) -> Self {
        Self {
            cfg,
            accumulated: 0.0,
            events: 0,
            deadline: None,
        }
    }

    /// True while a burst is open and waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Record one wheel event. Positive deltas scroll toward the next item.
    pub fn push(&mut self, delta: f32, now: Instant) {
        if !self.cfg.enabled || !delta.is_finite() || delta == 0.0 {
            return;
        }
        self.accumulated += delta;
        self.events += 1;
        self.deadline = Some(now + self.cfg.quiet_period);
        tracing::trace!(
            delta,
            accumulated = self.accumulated,
            events = self.events,
            "wheel accumulate"
        );
    }

    /// Close the burst if its quiet period has elapsed.
    ///
    /// Returns the resolved direction when the accumulated delta reached the
    /// threshold; a burst below it is discarded silently.
    pub fn poll(&mut self, now: Instant) -> Option<Direction> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        let total = std::mem::take(&mut self.accumulated);
        let events = std::mem::take(&mut self.events);
        self.deadline = None;

        if total.abs() < self.cfg.threshold {
            tracing::trace!(total, events, "wheel burst below threshold");
            return None;
        }
        Some(if total > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        })
    }

    /// Discard any open burst.
    pub fn cancel(&mut self) -> bool {
        self.accumulated = 0.0;
        self.events = 0;
        self.deadline.take().is_some()
    }

    pub fn config(&self) -> WheelConfig {
        self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_resolves_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut w = WheelDebouncer::new(WheelConfig::default());
        for i in 0..5 {
            w.push(10.0, t0 + ms(i * 2));
        }
        let last = t0 + ms(8);
        assert_eq!(w.poll(last + ms(39)), None);
        assert!(w.is_pending());
        assert_eq!(w.poll(last + ms(40)), Some(Direction::Next));
        assert_eq!(w.poll(last + ms(80)), None);
        assert!(!w.is_pending());
    }

    #[test]
    fn each_event_rearms_the_window() {
        let t0 = Instant::now();
        let mut w = WheelDebouncer::new(WheelConfig::default());
        w.push(-20.0, t0);
        w.push(-20.0, t0 + ms(30));
        // 40 ms after the first event but only 10 after the second.
        assert_eq!(w.poll(t0 + ms(40)), None);
        assert_eq!(w.poll(t0 + ms(70)), Some(Direction::Prev));
    }

    #[test]
    fn small_burst_is_discarded() {
        let t0 = Instant::now();
        let mut w = WheelDebouncer::new(WheelConfig::default());
        w.push(10.0, t0);
        w.push(5.0, t0 + ms(5));
        assert_eq!(w.poll(t0 + ms(100)), None);
        assert_eq!(w.accumulated(), 0.0);
        assert!(!w.is_pending());
    }

    #[test]
    fn opposing_deltas_cancel_out() {
        let t0 = Instant::now();
        let mut w = WheelDebouncer::new(WheelConfig::default());
        w.push(30.0, t0);
        w.push(-30.0, t0 + ms(5));
        assert_eq!(w.poll(t0 + ms(100)), None);
    }

    #[test]
    fn disabled_wheel_ignores_input() {
        let cfg = WheelConfig {
            enabled: false,
            ..WheelConfig::default()
        };
        let mut w = WheelDebouncer::new(cfg);
        w.push(100.0, Instant::now());
        assert!(!w.is_pending());
    }
}
