//! Countdown scheduling.
//!
//! [`Ticker`] turns wall-clock time into whole one-second ticks. It holds no
//! game state: the owner polls it and applies each tick to the live session,
//! so a tick always sees the current state. A disarmed ticker never fires.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    Disarmed,
    /// Armed; the first deadline is set on the next poll.
    Pending,
    Due(Instant),
}

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    schedule: Schedule,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            schedule: Schedule::Disarmed,
        }
    }

    /// (Re)start the schedule; the first tick fires one interval after the
    /// next poll.
    pub fn arm(&mut self) {
        self.schedule = Schedule::Pending;
    }

    pub fn disarm(&mut self) {
        self.schedule = Schedule::Disarmed;
    }

    pub fn is_armed(&self) -> bool {
        self.schedule != Schedule::Disarmed
    }

    /// Number of whole ticks that have come due by `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        match self.schedule {
            Schedule::Disarmed => 0,
            Schedule::Pending => {
                self.schedule = Schedule::Due(now + self.interval);
                0
            }
            Schedule::Due(deadline) => {
                if now < deadline || self.interval.is_zero() {
                    return 0;
                }
                let late = now.duration_since(deadline);
                let extra = (late.as_nanos() / self.interval.as_nanos()) as u32;
                let count = extra.saturating_add(1);
                self.schedule = Schedule::Due(deadline + self.interval * count);
                count
            }
        }
    }

    /// How long a caller may block before the next tick is due.
    ///
    /// Returns `idle` when disarmed.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.schedule {
            Schedule::Disarmed => idle,
            Schedule::Pending => Duration::ZERO,
            Schedule::Due(deadline) => deadline.saturating_duration_since(now).min(idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn disarmed_ticker_never_fires() {
        let mut t = Ticker::new(SEC);
        let start = Instant::now();
        assert_eq!(t.poll(start), 0);
        assert_eq!(t.poll(start + SEC * 10), 0);
        assert!(!t.is_armed());
    }

    #[test]
    fn first_poll_sets_the_deadline() {
        let mut t = Ticker::new(SEC);
        let start = Instant::now();
        t.arm();
        assert_eq!(t.poll(start), 0);
        assert_eq!(t.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(t.poll(start + SEC), 1);
        assert_eq!(t.poll(start + SEC), 0);
        assert_eq!(t.poll(start + SEC * 2), 1);
    }

    #[test]
    fn late_polls_catch_up() {
        let mut t = Ticker::new(SEC);
        let start = Instant::now();
        t.arm();
        t.poll(start);
        assert_eq!(t.poll(start + Duration::from_millis(3500)), 3);
        assert_eq!(t.poll(start + SEC * 4), 1);
    }

    #[test]
    fn rearming_restarts_the_interval() {
        let mut t = Ticker::new(SEC);
        let start = Instant::now();
        t.arm();
        t.poll(start);
        t.arm();
        assert_eq!(t.poll(start + Duration::from_millis(900)), 0);
        assert_eq!(t.poll(start + Duration::from_millis(1800)), 0);
        assert_eq!(t.poll(start + Duration::from_millis(1900)), 1);
    }

    #[test]
    fn timeout_tracks_the_deadline() {
        let mut t = Ticker::new(SEC);
        let start = Instant::now();
        let idle = Duration::from_millis(250);
        assert_eq!(t.timeout(start, idle), idle);

        t.arm();
        assert_eq!(t.timeout(start, idle), Duration::ZERO);
        t.poll(start);
        assert_eq!(t.timeout(start + Duration::from_millis(900), idle), Duration::from_millis(100));
        assert_eq!(t.timeout(start + SEC * 2, idle), Duration::ZERO);
    }
}
