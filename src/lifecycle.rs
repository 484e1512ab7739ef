use ::rand::Rng;

use crate::config;

pub const PHASE_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Growing,
    Mature,
    Decaying,
}

impl PhaseKind {
    pub const ALL: [Self; 3] = [Self::Growing, Self::Mature, Self::Decaying];

    pub fn label(self) -> &'static str {
        match self {
            Self::Growing => "growing",
            Self::Mature => "mature",
            Self::Decaying => "decaying",
        }
    }

    /// Position of this kind in `ALL`, used for census arrays.
    pub fn rank(self) -> usize {
        match self {
            Self::Growing => 0,
            Self::Mature => 1,
            Self::Decaying => 2,
        }
    }

    /// Growing and mature cells are drawn filled; decaying ones as a ring.
    pub fn is_alive(self) -> bool {
        !matches!(self, Self::Decaying)
    }
}

/// One entry in a cell's lifespan table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseSpan {
    pub kind: PhaseKind,
    /// Frame budget; the phase ends once the lifeticker exceeds it.
    pub cycles: u32,
}

impl PhaseSpan {
    fn random(kind: PhaseKind, (min, max): (u32, u32), rng: &mut impl Rng) -> Self {
        Self {
            kind,
            cycles: rng.gen_range(min..=max),
        }
    }
}

/// Result of moving to the next span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub span: PhaseSpan,
    /// True when the table wrapped from decaying back to growing.
    pub wrapped: bool,
}

/// Fixed four-phase table with a pointer to the next span.
#[derive(Clone, Debug)]
pub struct Lifespan {
    spans: [PhaseSpan; PHASE_COUNT],
    next: usize,
    current: Option<usize>,
}

impl Lifespan {
    pub fn random(rng: &mut impl Rng) -> Self {
        let spans = [
            PhaseSpan::random(PhaseKind::Growing, config::GROWING_CYCLES, rng),
            PhaseSpan::random(PhaseKind::Mature, config::MATURE_CYCLES, rng),
            PhaseSpan::random(PhaseKind::Mature, config::MATURE_CYCLES, rng),
            PhaseSpan::random(PhaseKind::Decaying, config::DECAYING_CYCLES, rng),
        ];
        Self::from_spans(spans)
    }

    pub fn from_spans(spans: [PhaseSpan; PHASE_COUNT]) -> Self {
        Self {
            spans,
            next: 0,
            current: None,
        }
    }

    /// Enter the next phase, wrapping to the first after the last.
    pub fn advance(&mut self) -> Advance {
        let wrapped = self.current.is_some() && self.next == 0;
        let idx = self.next;
        self.current = Some(idx);
        self.next = (idx + 1) % PHASE_COUNT;
        Advance {
            span: self.spans[idx],
            wrapped,
        }
    }

    /// Index of the current phase, `None` before the first advance.
    #[cfg(test)]
    pub fn phase_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<PhaseSpan> {
        self.current.map(|idx| self.spans[idx])
    }

    pub fn spans(&self) -> &[PhaseSpan; PHASE_COUNT] {
        &self.spans
    }
}
