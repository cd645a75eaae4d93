use std::time::{Duration, Instant};

/// Timing of the update+render part of each turn
///
/// Waiting for the player is not counted: call [`FrameStats::begin`] once the
/// input has arrived and [`FrameStats::finish`] after the frame is on screen.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    started: Option<Instant>,
    last: Option<Duration>,
    frames: u64,
    total: Duration,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.begin_at(Instant::now());
    }

    pub fn begin_at(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn finish(&mut self) -> Option<Duration> {
        self.finish_at(Instant::now())
    }

    /// Close the frame opened by `begin_at`; None if no frame was open
    pub fn finish_at(&mut self, now: Instant) -> Option<Duration> {
        let started = self.started.take()?;
        let elapsed = now.saturating_duration_since(started);
        self.last = Some(elapsed);
        self.frames += 1;
        self.total += elapsed;
        Some(elapsed)
    }

    /// Seconds taken by the last finished frame
    pub fn last_secs(&self) -> Option<f64> {
        self.last.map(|d| d.as_secs_f64())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean frames per second over every finished frame
    pub fn average_fps(&self) -> Option<f64> {
        if self.frames == 0 {
            return None;
        }
        Some(fps(self.total.as_secs_f64() / self.frames as f64))
    }
}

fn fps(secs: f64) -> f64 {
    if secs > 0.0 {
        1.0 / secs
    } else {
        0.0
    }
}

/// `FRAME RATE = 250.000 at 0.004 s/frame`
pub fn frame_rate_label(secs: f64) -> String {
    format!("FRAME RATE = {:.3} at {:.3} s/frame", fps(secs), secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_without_begin_is_none() {
        let mut stats = FrameStats::new();
        assert_eq!(stats.finish(), None);
        assert_eq!(stats.frames(), 0);
        assert_eq!(stats.average_fps(), None);
    }

    #[test]
    fn test_measures_between_begin_and_finish() {
        let mut stats = FrameStats::new();
        let t0 = Instant::now();

        stats.begin_at(t0);
        let d = stats.finish_at(t0 + Duration::from_millis(4)).unwrap();
        assert_eq!(d, Duration::from_millis(4));
        assert_eq!(stats.last_secs(), Some(0.004));

        stats.begin_at(t0 + Duration::from_millis(100));
        stats.finish_at(t0 + Duration::from_millis(112));
        assert_eq!(stats.frames(), 2);
        let avg = stats.average_fps().unwrap();
        assert!((avg - 125.0).abs() < 1e-6, "avg fps {}", avg);
    }

    #[test]
    fn test_label_format() {
        assert_eq!(frame_rate_label(0.004), "FRAME RATE = 250.000 at 0.004 s/frame");
        assert_eq!(frame_rate_label(0.0), "FRAME RATE = 0.000 at 0.000 s/frame");
    }
}
