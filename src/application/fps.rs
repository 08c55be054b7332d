use std::collections::VecDeque;

const WINDOW: usize = 100;

/// Frames-per-second summary over the recent window
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FpsStats {
    pub latest: f32,
    pub mean: f32,
    pub min: f32,
    pub max: f32,
}

/// Sliding window of the last 100 frame rates.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: VecDeque<f32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame that took `delta_seconds`. Non-positive deltas are skipped.
    pub fn record(&mut self, delta_seconds: f32) {
        if delta_seconds <= 0.0 || !delta_seconds.is_finite() {
            return;
        }
        if self.frames.len() == WINDOW {
            self.frames.pop_front();
        }
        self.frames.push_back(1.0 / delta_seconds);
    }

    pub fn stats(&self) -> Option<FpsStats> {
        let latest = *self.frames.back()?;
        let sum: f32 = self.frames.iter().sum();
        let min = self.frames.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.frames.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        Some(FpsStats {
            latest,
            mean: sum / self.frames.len() as f32,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_stats() {
        assert_eq!(FpsCounter::new().stats(), None);
    }

    #[test]
    fn test_stats() {
        let mut fps = FpsCounter::new();
        fps.record(0.5);
        fps.record(0.25);
        fps.record(0.0);

        let stats = fps.stats().unwrap();
        assert_eq!(stats.latest, 4.0);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_window_drops_oldest() {
        let mut fps = FpsCounter::new();
        fps.record(1.0);
        for _ in 0..WINDOW {
            fps.record(0.5);
        }
        assert_eq!(fps.stats().unwrap().min, 2.0);
    }
}
