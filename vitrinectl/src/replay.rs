//! Drive an engine through a script on a synthetic clock.

use std::time::{Duration, Instant};

use serde::Serialize;
use vitrine_core::{CarouselEngine, EngineConfig, WheelDelta};
use vitrine_model::Outcome;

use crate::script::{Action, Script, ScriptError, parse_key};

/// One outcome reported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    pub at_ms: u64,
    pub event: &'static str,
    pub outcome: Outcome,
    pub index: usize,
    pub transitioning: bool,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub records: Vec<ReplayRecord>,
    pub final_index: usize,
    pub item_count: usize,
    pub commits: usize,
}

/// Replay `script` against a fresh engine. With `frame_ms`, synthetic
/// frames are interleaved every `frame_ms` until the script ends.
pub fn replay(
    script: &Script,
    config: EngineConfig,
    frame_ms: Option<u64>,
) -> Result<ReplaySummary, ScriptError> {
    if frame_ms == Some(0) {
        return Err(ScriptError::ZeroFrameInterval);
    }
    script.check()?;

    let mut engine = CarouselEngine::new(script.catalogue(), config)?;
    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    if let Some(vp) = script.viewport {
        engine.resize(vp.width, vp.container, vp.item);
    }

    let mut records = Vec::new();
    let mut next_frame = frame_ms.map(|_| 0u64);

    for (index, event) in script.events.iter().enumerate() {
        run_frames(
            &mut engine,
            &mut next_frame,
            frame_ms,
            event.at_ms,
            &at,
            &mut records,
        );
        let outcome =
            apply(&mut engine, index, &event.action, at(event.at_ms))?;
        record(
            &engine,
            &mut records,
            event.at_ms,
            event.action.label(),
            outcome,
        );
    }

    let end = script.end_ms();
    run_frames(
        &mut engine,
        &mut next_frame,
        frame_ms,
        end,
        &at,
        &mut records,
    );
    let settled = engine.poll(at(end));
    record(&engine, &mut records, end, "poll", settled);

    let commits = records.iter().filter(|r| r.outcome.is_committed()).count();
    tracing::debug!(
        events = script.events.len(),
        outcomes = records.len(),
        commits,
        "replay finished"
    );
    Ok(ReplaySummary {
        final_index: engine.current_index(),
        item_count: engine.item_count(),
        commits,
        records,
    })
}

fn run_frames(
    engine: &mut CarouselEngine,
    next_frame: &mut Option<u64>,
    frame_ms: Option<u64>,
    until_ms: u64,
    at: &impl Fn(u64) -> Instant,
    records: &mut Vec<ReplayRecord>,
) {
    let (Some(step), Some(next)) = (frame_ms, next_frame.as_mut()) else {
        return;
    };
    while *next <= until_ms {
        let outcome = engine.frame(at(*next));
        record(engine, records, *next, "frame", outcome);
        *next += step;
    }
}

fn apply(
    engine: &mut CarouselEngine,
    index: usize,
    action: &Action,
    now: Instant,
) -> Result<Option<Outcome>, ScriptError> {
    let outcome = match action {
        Action::Key { key } => engine.key_down(parse_key(index, key)?, now),
        Action::PointerDown { position } => {
            engine.pointer_down(*position, now);
            None
        }
        Action::PointerMove { position } => {
            engine.pointer_move(*position, now);
            None
        }
        Action::PointerUp => engine.pointer_up(now),
        Action::PointerCancel => engine.pointer_cancel(),
        Action::Enter => {
            engine.pointer_enter();
            None
        }
        Action::Leave => {
            engine.pointer_leave();
            None
        }
        Action::Wheel { dx, dy } => engine.wheel(WheelDelta::new(*dx, *dy), now),
        Action::Resize {
            width,
            container,
            item,
        } => {
            engine.resize(*width, *container, *item);
            None
        }
        Action::Frame => engine.frame(now),
        Action::Poll => engine.poll(now),
        Action::Interval => engine.autoplay_interval(now),
        Action::Next => Some(engine.go_to_next(now)),
        Action::Prev => Some(engine.go_to_prev(now)),
        Action::GoTo { index } => Some(engine.go_to_slide(*index, now)),
        Action::Pause => {
            engine.pause();
            None
        }
        Action::Resume => {
            engine.resume();
            None
        }
        Action::ReducedMotion { enabled } => {
            engine.set_reduced_motion(*enabled);
            None
        }
    };
    Ok(outcome)
}

fn record(
    engine: &CarouselEngine,
    records: &mut Vec<ReplayRecord>,
    at_ms: u64,
    event: &'static str,
    outcome: Option<Outcome>,
) {
    let Some(outcome) = outcome else {
        return;
    };
    records.push(ReplayRecord {
        at_ms,
        event,
        outcome,
        index: engine.current_index(),
        transitioning: engine.is_transitioning(),
        progress: engine.progress(),
    });
}
