use std::time::{Duration, Instant};

/// Fixed-interval step clock driven by the host loop.
///
/// A stopped ticker never reports a due tick, so stopping and starting it
/// again replaces the previous schedule instead of running a second one.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Starts (or restarts) the schedule; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and re-arms when a tick has elapsed.
    ///
    /// At most one tick is reported per call; a host that stalls does not
    /// receive a burst of catch-up steps.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last_tick) = self.last_tick else {
            return false;
        };

        if now.saturating_duration_since(last_tick) < self.interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }

    /// Time left until the next tick, or `None` while stopped.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        let last_tick = self.last_tick?;
        Some(
            self.interval
                .saturating_sub(now.saturating_duration_since(last_tick)),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Ticker;

    const INTERVAL: Duration = Duration::from_millis(130);

    #[test]
    fn stopped_ticker_never_fires() {
        let mut ticker = Ticker::new(INTERVAL);
        let now = Instant::now();

        assert!(!ticker.is_running());
        assert!(!ticker.poll(now + INTERVAL * 10));
        assert_eq!(ticker.time_until_next(now), None);
    }

    #[test]
    fn fires_once_per_elapsed_interval() {
        let mut ticker = Ticker::new(INTERVAL);
        let start = Instant::now();
        ticker.start(start);

        assert!(!ticker.poll(start + Duration::from_millis(100)));
        assert!(ticker.poll(start + INTERVAL));
        assert!(!ticker.poll(start + INTERVAL + Duration::from_millis(10)));
        assert!(ticker.poll(start + INTERVAL * 2));
    }

    #[test]
    fn stall_yields_a_single_tick() {
        let mut ticker = Ticker::new(INTERVAL);
        let start = Instant::now();
        ticker.start(start);

        let late = start + INTERVAL * 5;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
    }

    #[test]
    fn restart_replaces_the_schedule() {
        let mut ticker = Ticker::new(INTERVAL);
        let start = Instant::now();
        ticker.start(start);

        let restart_at = start + Duration::from_millis(120);
        ticker.stop();
        ticker.start(restart_at);

        assert!(!ticker.poll(start + INTERVAL));
        assert_eq!(
            ticker.time_until_next(restart_at + Duration::from_millis(30)),
            Some(Duration::from_millis(100))
        );
        assert!(ticker.poll(restart_at + INTERVAL));
    }
}
