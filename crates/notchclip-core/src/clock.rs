use crate::constants::MS_TO_SEC;

/// Turns frame-pacing timestamps (ms) into the animation time in seconds.
///
/// The host promises monotonic timestamps; a stale one is clamped to the
/// latest seen so derived time never runs backwards.
#[derive(Clone, Debug, Default)]
pub struct AnimationClock {
    last_ms: Option<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, timestamp_ms: f64) -> f64 {
        let ts = if timestamp_ms.is_finite() {
            timestamp_ms.max(0.0)
        } else {
            0.0
        };
        let ts = match self.last_ms {
            Some(prev) if ts < prev => prev,
            _ => ts,
        };
        self.last_ms = Some(ts);
        ts * MS_TO_SEC
    }

    /// Seconds at the most recent frame, if any frame was seen.
    pub fn seconds(&self) -> Option<f64> {
        self.last_ms.map(|ms| ms * MS_TO_SEC)
    }
}
