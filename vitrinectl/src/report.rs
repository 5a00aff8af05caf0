//! Human-readable replay output.

use vitrine_model::{DropReason, NavigationSource, Outcome};

use crate::replay::{ReplayRecord, ReplaySummary};

pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Committed { from, to, source } => {
            format!("committed {from} -> {to} ({})", source_name(*source))
        }
        Outcome::SnapBack { index } => format!("snap back to {index}"),
        Outcome::Dropped(reason) => format!("dropped ({})", reason_name(*reason)),
    }
}

pub fn line(record: &ReplayRecord) -> String {
    format!(
        "{:>7}ms  {:<14} {:<36} index={} progress={:.1}{}",
        record.at_ms,
        record.event,
        describe(&record.outcome),
        record.index,
        record.progress,
        if record.transitioning { " locked" } else { "" },
    )
}

pub fn summary(summary: &ReplaySummary) -> String {
    format!(
        "final index {} of {} after {} commit(s)",
        summary.final_index, summary.item_count, summary.commits
    )
}

fn source_name(source: NavigationSource) -> &'static str {
    match source {
        NavigationSource::Programmatic => "programmatic",
        NavigationSource::Keyboard => "keyboard",
        NavigationSource::Pointer => "pointer",
        NavigationSource::Wheel => "wheel",
        NavigationSource::Autoplay => "autoplay",
    }
}

fn reason_name(reason: DropReason) -> &'static str {
    match reason {
        DropReason::Transitioning => "transitioning",
        DropReason::Unchanged => "unchanged",
        DropReason::Boundary => "boundary",
        DropReason::Empty => "empty",
        DropReason::Unmounted => "unmounted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_outcome() {
        assert_eq!(
            describe(&Outcome::Committed {
                from: 9,
                to: 0,
                source: NavigationSource::Wheel,
            }),
            "committed 9 -> 0 (wheel)"
        );
        assert_eq!(describe(&Outcome::SnapBack { index: 2 }), "snap back to 2");
        assert_eq!(
            describe(&Outcome::Dropped(DropReason::Boundary)),
            "dropped (boundary)"
        );
    }
}
