// Rolling statistics for the phase census and lifecycle churn.
use crate::events::EventTally;

/// Ring buffer that stores the last N samples of a metric.
pub struct RingBuffer {
    data: Vec<f32>,
    head: usize,
    len: usize,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![0.0; capacity],
            head: 0,
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Return samples in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.len < self.capacity {
            0
        } else {
            self.head
        };
        (0..self.len).map(move |i| self.data[(start + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn last(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            let idx = (self.head + self.capacity - 1) % self.capacity;
            Some(self.data[idx])
        }
    }
}

pub struct CellStats {
    pub growing: RingBuffer,
    pub mature: RingBuffer,
    pub decaying: RingBuffer,
    pub births: RingBuffer,
    pub deaths: RingBuffer,

    // Accumulated between samples
    pub pending: EventTally,
    pub total: EventTally,
    pub sample_interval: u32,
    pub frame_counter: u32,
}

impl CellStats {
    pub fn new(capacity: usize, sample_interval: u32) -> Self {
        Self {
            growing: RingBuffer::new(capacity),
            mature: RingBuffer::new(capacity),
            decaying: RingBuffer::new(capacity),
            births: RingBuffer::new(capacity),
            deaths: RingBuffer::new(capacity),
            pending: EventTally::default(),
            total: EventTally::default(),
            sample_interval: sample_interval.max(1),
            frame_counter: 0,
        }
    }

    /// Record one frame's census and events; pushes a sample every interval.
    pub fn record(&mut self, census: [usize; 3], tally: EventTally) {
        self.pending.merge(tally);
        self.total.merge(tally);

        self.frame_counter += 1;
        if self.frame_counter % self.sample_interval != 0 {
            return;
        }

        self.growing.push(census[0] as f32);
        self.mature.push(census[1] as f32);
        self.decaying.push(census[2] as f32);
        self.births.push(self.pending.births as f32);
        self.deaths.push(self.pending.deaths as f32);

        self.pending = EventTally::default();
    }
}
