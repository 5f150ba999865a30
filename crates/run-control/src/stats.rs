//! Rolling frame-rate telemetry.

use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of rate samples retained in the window.
pub const WINDOW_CAPACITY: usize = 100;

/// Read-only view of the current telemetry, in units per second.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Most recent instantaneous rate.
    pub latest: f64,
    /// Minimum rate over the window.
    pub min: f64,
    /// Maximum rate over the window.
    pub max: f64,
    /// Mean rate over the window.
    pub mean: f64,
}

/// Converts successive [`record`](FrameStatsSampler::record) calls into a
/// bounded window of instantaneous rate estimates.
///
/// The window holds at most [`WINDOW_CAPACITY`] samples, evicting the
/// oldest first. The window itself is never exposed; readers get a
/// [`FrameStats`] snapshot.
#[derive(Debug, Default)]
pub struct FrameStatsSampler {
    window: VecDeque<f64>,
    last_sample: Option<Instant>,
}

impl FrameStatsSampler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW_CAPACITY),
            last_sample: None,
        }
    }

    /// Record `units` of work completed since the previous call.
    ///
    /// The first call only establishes the timing baseline and emits no
    /// rate. A call with no measurable elapsed time is skipped rather than
    /// divided by zero.
    pub fn record(&mut self, units: f64) {
        self.record_at(units, Instant::now());
    }

    fn record_at(&mut self, units: f64, now: Instant) {
        if let Some(prev) = self.last_sample {
            let elapsed = now.duration_since(prev).as_secs_f64();
            if elapsed > 0.0 {
                if self.window.len() == WINDOW_CAPACITY {
                    self.window.pop_front();
                }
                self.window.push_back(units / elapsed);
            }
        }
        self.last_sample = Some(now);
    }

    /// Current statistics. All zeros until the first rate is recorded.
    #[must_use]
    pub fn snapshot(&self) -> FrameStats {
        let Some(&latest) = self.window.back() else {
            return FrameStats::default();
        };

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &rate in &self.window {
            min = min.min(rate);
            max = max.max(rate);
            sum += rate;
        }

        FrameStats {
            latest,
            min,
            max,
            mean: sum / self.window.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Feed samples one second apart so the rate equals the unit count.
    fn feed(sampler: &mut FrameStatsSampler, units: impl IntoIterator<Item = f64>) {
        let base = Instant::now();
        // Baseline call; emits no rate.
        sampler.record_at(0.0, base);
        for (i, u) in units.into_iter().enumerate() {
            sampler.record_at(u, base + Duration::from_secs(i as u64 + 1));
        }
    }

    #[test]
    fn first_call_emits_no_rate() {
        let mut sampler = FrameStatsSampler::new();
        sampler.record_at(1.0, Instant::now());
        assert_eq!(sampler.snapshot(), FrameStats::default());
    }

    #[test]
    fn zero_elapsed_is_skipped() {
        let mut sampler = FrameStatsSampler::new();
        let now = Instant::now();
        sampler.record_at(1.0, now);
        sampler.record_at(1.0, now);
        assert_eq!(sampler.snapshot(), FrameStats::default());
    }

    #[test]
    fn min_max_mean_over_window() {
        let mut sampler = FrameStatsSampler::new();
        feed(&mut sampler, [30.0, 60.0, 120.0]);

        let stats = sampler.snapshot();
        assert_eq!(stats.latest, 120.0);
        assert_eq!(stats.min, 30.0);
        assert_eq!(stats.max, 120.0);
        assert_eq!(stats.mean, 70.0);
    }

    #[test]
    fn window_is_bounded_and_evicts_fifo() {
        let mut sampler = FrameStatsSampler::new();
        // 150 rate samples valued 1..=150; the first 50 must be evicted.
        feed(&mut sampler, (1..=150).map(f64::from));

        assert_eq!(sampler.window.len(), WINDOW_CAPACITY);
        let stats = sampler.snapshot();
        assert_eq!(stats.min, 51.0);
        assert_eq!(stats.max, 150.0);
        assert_eq!(stats.latest, 150.0);
        assert_eq!(stats.mean, (51.0 + 150.0) / 2.0);
    }
}
