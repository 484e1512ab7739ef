use std::time::{Duration, Instant};

use ::rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::canvas::{Bounds, Canvas};
use crate::config;
use crate::error::{CellCycleError, Result};
use crate::events::{EventTally, LifecycleSubscriber, TracingLogger};
use crate::pool::CellPool;
use crate::reporting::{FrameTimeSummary, FrameTimes};

/// What happened during one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameSummary {
    pub frame: u64,
    pub events: EventTally,
    pub census: [usize; 3],
}

/// Whole-run totals, printed on exit when requested.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub cells: usize,
    pub frames: u64,
    pub elapsed_secs: f64,
    pub events: EventTally,
    pub frame_ms: FrameTimeSummary,
}

pub struct Simulation {
    pub pool: CellPool,
    pub bounds: Bounds,
    pub rng: ChaCha8Rng,
    pub seed: u64,
    pub frame: u64,
    running: bool,
    started_at: Option<Instant>,
    last_step: Option<Instant>,
    frame_times: FrameTimes,
    totals: EventTally,
}

impl Simulation {
    /// Build the pool and run every cell's first tick. The tracing logger is
    /// subscribed before any cell is born.
    pub fn new(
        cell_count: usize,
        seed: u64,
        bounds: Bounds,
        canvas: &mut impl Canvas,
    ) -> Result<Self> {
        Self::with_subscribers(cell_count, seed, bounds, canvas, vec![Box::new(TracingLogger)])
    }

    pub fn with_subscribers(
        cell_count: usize,
        seed: u64,
        bounds: Bounds,
        canvas: &mut impl Canvas,
        subscribers: Vec<Box<dyn LifecycleSubscriber>>,
    ) -> Result<Self> {
        if cell_count == 0 || cell_count > config::MAX_CELL_COUNT {
            return Err(CellCycleError::InvalidCellCount {
                requested: cell_count,
                max: config::MAX_CELL_COUNT,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pool = CellPool::new();
        for subscriber in subscribers {
            pool.subscribe(subscriber);
        }
        let events = pool.populate(cell_count, &mut rng, &bounds, canvas);
        tracing::info!(cells = pool.len(), seed, "cell pool populated");

        Ok(Self {
            pool,
            bounds,
            rng,
            seed,
            frame: 0,
            running: false,
            started_at: None,
            last_step: None,
            frame_times: FrameTimes::new(),
            totals: EventTally::from_events(&events),
        })
    }

    pub fn start(&mut self) {
        self.running = true;
        self.started_at = Some(Instant::now());
        tracing::info!(frame = self.frame, "simulation started");
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_step = None;
        tracing::info!(frame = self.frame, "simulation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time since the last `start`.
    pub fn elapsed(&self) -> Duration {
        self.started_at.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Clear the canvas and run one update/draw pass. A stopped simulation
    /// leaves the canvas and every cell untouched.
    pub fn step(&mut self, canvas: &mut impl Canvas) -> Option<FrameSummary> {
        if !self.running {
            return None;
        }

        let now = Instant::now();
        if let Some(prev) = self.last_step.replace(now) {
            self.frame_times
                .push(now.duration_since(prev).as_secs_f64() * 1000.0);
        }

        canvas.clear();
        let events = self
            .pool
            .update_and_draw(&mut self.rng, &self.bounds, canvas);
        self.frame += 1;

        let tally = EventTally::from_events(&events);
        self.totals.merge(tally);
        Some(FrameSummary {
            frame: self.frame,
            events: tally,
            census: self.pool.phase_census(),
        })
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            cells: self.pool.len(),
            frames: self.frame,
            elapsed_secs: self.elapsed().as_secs_f64(),
            events: self.totals,
            frame_ms: self.frame_times.summary(),
        }
    }
}
