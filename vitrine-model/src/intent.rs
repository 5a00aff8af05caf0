//! Navigation intents and the outcomes the controller reports for them.

/// Step direction along the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Signed index step: +1 for next, -1 for previous.
    pub const fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Direction::Next => Direction::Prev,
            Direction::Prev => Direction::Next,
        }
    }
}

/// A request to move the carousel, produced by an input source.
///
/// Intents are transient: the index controller is the single arbiter that
/// decides whether one is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NavigationIntent {
    Next,
    Prev,
    /// Absolute target. Out-of-range values are clamped or wrapped.
    GoTo(isize),
    /// Result of a released drag; `None` means snap back.
    DragResolved(Option<Direction>),
}

impl From<Direction> for NavigationIntent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Next => NavigationIntent::Next,
            Direction::Prev => NavigationIntent::Prev,
        }
    }
}

/// Which input produced an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NavigationSource {
    Programmatic,
    Keyboard,
    Pointer,
    Wheel,
    Autoplay,
}

/// Why an intent was not honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DropReason {
    /// A previous commit is still settling.
    Transitioning,
    /// The resolved target is the current index.
    Unchanged,
    /// Stepping past the first or last item with looping disabled.
    Boundary,
    /// Fewer than two items; there is nowhere to go.
    Empty,
    /// The engine has been torn down.
    Unmounted,
}

/// What the controller did with a submitted intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Committed {
        from: usize,
        to: usize,
        source: NavigationSource,
    },
    /// A drag did not resolve to navigation; the track must animate back to
    /// `index`.
    SnapBack { index: usize },
    Dropped(DropReason),
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed { .. })
    }

    /// Target index of a commit, if any.
    pub fn committed_index(&self) -> Option<usize> {
        match self {
            Outcome::Committed { to, .. } => Some(*to),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_steps() {
        assert_eq!(Direction::Next.step(), 1);
        assert_eq!(Direction::Prev.step(), -1);
        assert_eq!(Direction::Next.reversed(), Direction::Prev);
    }

    #[test]
    fn outcome_helpers() {
        let c = Outcome::Committed {
            from: 1,
            to: 2,
            source: NavigationSource::Keyboard,
        };
        assert!(c.is_committed());
        assert_eq!(c.committed_index(), Some(2));
        assert_eq!(
            Outcome::Dropped(DropReason::Transitioning).committed_index(),
            None
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&Outcome::SnapBack { index: 3 })
            .expect("serialize");
        assert_eq!(json, r#"{"snap_back":{"index":3}}"#);
    }
}
