use std::time::{Duration, Instant};

/// Stopwatch behind the elapsed-time display. Stopping freezes the reading;
/// a game ends once, so later stops are ignored.
#[derive(Copy, Clone, Debug)]
pub struct GameClock {
    started: Instant,
    frozen: Option<Duration>,
}

impl GameClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            frozen: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started.elapsed())
    }

    pub fn stop(&mut self) {
        if self.frozen.is_none() {
            self.frozen = Some(self.started.elapsed());
        }
    }

    pub fn mmss(&self) -> String {
        format_mmss(self.elapsed())
    }
}

pub fn format_mmss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(59)), "00:59");
        assert_eq!(format_mmss(Duration::from_secs(125)), "02:05");
        assert_eq!(format_mmss(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn stop_freezes_once() {
        let mut clock = GameClock::start();
        clock.stop();
        let frozen = clock.elapsed();
        clock.stop();
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn running_clock_is_not_frozen() {
        let clock = GameClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
