use std::fmt;

use serde::Serialize;

pub type CellId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventKey {
    Birth,
    Death,
    PhaseEnd,
}

impl EventKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Birth => "birth",
            Self::Death => "death",
            Self::PhaseEnd => "phase end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventValue {
    Alive,
    Dead,
    NextPhase,
}

impl EventValue {
    pub fn label(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::NextPhase => "next phase",
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LifecycleEvent {
    pub cell_id: CellId,
    pub key: EventKey,
    pub value: EventValue,
}

impl LifecycleEvent {
    pub fn birth(cell_id: CellId) -> Self {
        Self {
            cell_id,
            key: EventKey::Birth,
            value: EventValue::Alive,
        }
    }

    pub fn death(cell_id: CellId) -> Self {
        Self {
            cell_id,
            key: EventKey::Death,
            value: EventValue::Dead,
        }
    }

    pub fn phase_end(cell_id: CellId) -> Self {
        Self {
            cell_id,
            key: EventKey::PhaseEnd,
            value: EventValue::NextPhase,
        }
    }
}

/// Receives every lifecycle event, synchronously and in emission order.
pub trait LifecycleSubscriber {
    fn on_event(&mut self, event: &LifecycleEvent);
}

/// Default subscriber: writes each event to the tracing log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl LifecycleSubscriber for TracingLogger {
    fn on_event(&mut self, event: &LifecycleEvent) {
        tracing::debug!(
            cell = event.cell_id,
            key = event.key.label(),
            value = event.value.label(),
            "cell lifecycle"
        );
    }
}

/// Event counts folded from one or more frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventTally {
    pub births: u32,
    pub deaths: u32,
    pub phase_ends: u32,
}

impl EventTally {
    pub fn from_events(events: &[LifecycleEvent]) -> Self {
        let mut tally = Self::default();
        for event in events {
            tally.record(event);
        }
        tally
    }

    pub fn record(&mut self, event: &LifecycleEvent) {
        match event.key {
            EventKey::Birth => self.births += 1,
            EventKey::Death => self.deaths += 1,
            EventKey::PhaseEnd => self.phase_ends += 1,
        }
    }

    pub fn merge(&mut self, other: EventTally) {
        self.births += other.births;
        self.deaths += other.deaths;
        self.phase_ends += other.phase_ends;
    }
}
