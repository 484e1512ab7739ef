use ::rand::Rng;

use crate::canvas::{Bounds, Canvas};
use crate::cell::{Cell, CellInit};
use crate::events::{CellId, LifecycleEvent, LifecycleSubscriber};
use crate::lifecycle::PhaseKind;

/// Fixed-size, ordered collection of every cell. Filled once at startup.
#[derive(Default)]
pub struct CellPool {
    cells: Vec<Cell>,
    next_id: CellId,
    subscribers: Vec<Box<dyn LifecycleSubscriber>>,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn LifecycleSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Spawn `count` random cells. Each is born and ticked once, and its
    /// events delivered, before the next one is created.
    pub fn populate(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
        bounds: &Bounds,
        canvas: &mut impl Canvas,
    ) -> Vec<LifecycleEvent> {
        self.cells.reserve_exact(count);
        let mut events = Vec::new();
        for _ in 0..count {
            let init = CellInit::random(self.next_id, bounds, rng);
            self.next_id += 1;

            let mut cell = Cell::new(init, rng);
            tracing::trace!(
                cell = cell.id,
                color = %init.color,
                cycles = ?cell.lifespan().spans().iter().map(|s| s.cycles).collect::<Vec<_>>(),
                "cell spawned"
            );
            let start = events.len();
            cell.birth(&mut events);
            cell.update(rng, bounds, canvas, &mut events);
            self.cells.push(cell);
            dispatch(&mut self.subscribers, &events[start..]);
        }
        events
    }

    /// One synchronous pass over every cell, in pool order. Subscribers see
    /// a cell's events before the next cell updates.
    pub fn update_and_draw(
        &mut self,
        rng: &mut impl Rng,
        bounds: &Bounds,
        canvas: &mut impl Canvas,
    ) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();
        for cell in &mut self.cells {
            let start = events.len();
            cell.update(rng, bounds, canvas, &mut events);
            dispatch(&mut self.subscribers, &events[start..]);
        }
        events
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells in each phase kind, indexed by `PhaseKind::rank`.
    pub fn phase_census(&self) -> [usize; 3] {
        let mut census = [0; 3];
        for kind in self.cells.iter().filter_map(|c| c.phase()).map(|p| p.kind) {
            census[kind.rank()] += 1;
        }
        census
    }

    pub fn count_in(&self, kind: PhaseKind) -> usize {
        self.phase_census()[kind.rank()]
    }
}

fn dispatch(subscribers: &mut [Box<dyn LifecycleSubscriber>], events: &[LifecycleEvent]) {
    for event in events {
        for subscriber in subscribers.iter_mut() {
            subscriber.on_event(event);
        }
    }
}
