//! Shared fixtures for engine integration tests.
#![allow(dead_code)]

use std::time::{Duration, Instant};

use vitrine_core::{CarouselEngine, EngineConfig};
use vitrine_model::CarouselItem;

pub fn items(n: usize) -> Vec<CarouselItem> {
    (0..n)
        .map(|i| {
            CarouselItem::from_slug(&format!("landing-{i}"))
                .with_category("catalogue")
        })
        .collect()
}

pub fn engine(n: usize, config: EngineConfig) -> CarouselEngine {
    CarouselEngine::new(items(n), config).expect("valid config")
}

/// Manually advanced clock; the engine only ever sees these instants.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self { now: Instant::now() }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, ms: u64) -> Instant {
        self.now += Duration::from_millis(ms);
        self.now
    }
}
