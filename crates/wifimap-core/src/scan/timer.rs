use std::time::{Duration, Instant};

/// Periodic scan tick.
///
/// `fire` returns true at most once per elapsed interval; missed ticks are
/// not queued up.
#[derive(Clone, Debug)]
pub struct ScanTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl ScanTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, if running.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = ScanTimer::new(Duration::from_millis(3000));
        assert!(!timer.fire(t0));
        timer.start(t0);
        assert!(!timer.fire(t0 + Duration::from_millis(2999)));
        assert!(timer.fire(t0 + Duration::from_millis(3000)));
        assert!(!timer.fire(t0 + Duration::from_millis(3001)));
        // Long stall: one tick, not a burst.
        assert!(timer.fire(t0 + Duration::from_millis(20_000)));
        assert!(!timer.fire(t0 + Duration::from_millis(20_001)));
    }

    #[test]
    fn test_stop_halts_ticks() {
        let t0 = Instant::now();
        let mut timer = ScanTimer::new(Duration::from_millis(10));
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.fire(t0 + Duration::from_secs(1)));
        assert_eq!(timer.time_until_next(t0), None);
    }
}
