use serde::Serialize;

/// Percentile summary of frame durations, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameTimeSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

#[derive(Debug, Clone)]
pub struct FrameTimes {
    samples: Vec<f64>,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for FrameTimes {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimes {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn push(&mut self, millis: f64) {
        self.sum += millis;
        self.min = self.min.min(millis);
        self.max = self.max.max(millis);
        self.samples.push(millis);
    }

    pub fn summary(&self) -> FrameTimeSummary {
        if self.samples.is_empty() {
            return FrameTimeSummary::default();
        }

        let mut sorted = self.samples.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        FrameTimeSummary {
            count: self.samples.len(),
            min: self.min,
            max: self.max,
            mean: self.sum / self.samples.len() as f64,
            p50: percentile_nearest_rank(&sorted, 0.50),
            p95: percentile_nearest_rank(&sorted, 0.95),
            p99: percentile_nearest_rank(&sorted, 0.99),
        }
    }
}

fn percentile_nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = ((p * sorted.len() as f64).ceil() as usize).saturating_sub(1);
    sorted[rank.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_summary_is_reasonable() {
        let mut times = FrameTimes::new();
        for i in 1..=100 {
            times.push(i as f64);
        }
        let s = times.summary();
        assert_eq!(s.count, 100);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 100.0);
        assert!((s.mean - 50.5).abs() < 1e-6);
        assert_eq!(s.p50, 50.0);
        assert_eq!(s.p95, 95.0);
        assert_eq!(s.p99, 99.0);
    }

    #[test]
    fn empty_summary_is_zeroed() {
        assert_eq!(FrameTimes::new().summary(), FrameTimeSummary::default());
    }
}
