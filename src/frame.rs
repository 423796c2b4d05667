use crate::constants::FRAME_STATS_INTERVAL_SEC;
use instant::Instant;

/// Counts drawn frames and reports an average rate every few seconds.
pub struct FrameStats {
    label: &'static str,
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            window_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn record(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {} {:.1} fps over {:.1}s",
                self.label,
                self.frames as f32 / elapsed,
                elapsed
            );
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}
