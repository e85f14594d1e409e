//! Countdown Timer
//!
//! A countdown advanced by frame time instead of a platform callback.
//! The first `advance` after `start` (even a zero-length one) reports a tick
//! with the full remaining time, then one tick per interval follows while
//! time is left. `Finish` is reported exactly once, after which the timer
//! stops.

use std::time::Duration;

/// Something the timer wants the owner to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: Duration },
    Finish,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    total: Duration,
    interval: Duration,
    elapsed: Duration,
    next_tick: Duration,
    running: bool,
}

impl CountdownTimer {
    /// Creates a stopped timer. Intervals shorter than 1ms are raised to 1ms.
    pub fn new(total: Duration, interval: Duration) -> Self {
        CountdownTimer {
            total,
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            next_tick: Duration::ZERO,
            running: false,
        }
    }

    /// Starts (or restarts) the countdown from the full duration
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.next_tick = Duration::ZERO;
        self.running = true;
    }

    /// Stops the countdown; no further events are produced
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time until finish as of the last `advance`
    #[cfg(test)]
    pub fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.elapsed)
    }

    /// Moves the countdown forward by `dt` and returns every event that fell
    /// inside that window, in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        self.elapsed = (self.elapsed + dt).min(self.total);

        while self.next_tick < self.total && self.next_tick <= self.elapsed {
            events.push(TimerEvent::Tick {
                remaining: self.total - self.next_tick,
            });
            self.next_tick += self.interval;
        }

        if self.elapsed >= self.total {
            events.push(TimerEvent::Finish);
            self.running = false;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_stopped_timer_is_silent() {
        let mut timer = CountdownTimer::new(secs(60), secs(1));
        assert!(timer.advance(secs(5)).is_empty());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_first_advance_reports_full_time() {
        let mut timer = CountdownTimer::new(secs(60), secs(1));
        timer.start();

        let events = timer.advance(Duration::ZERO);
        assert_eq!(events, vec![TimerEvent::Tick { remaining: secs(60) }]);
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let mut timer = CountdownTimer::new(secs(60), secs(1));
        timer.start();
        timer.advance(Duration::ZERO);

        assert!(timer.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(
            timer.advance(Duration::from_millis(1)),
            vec![TimerEvent::Tick { remaining: secs(59) }]
        );

        // A long frame catches up on every missed tick
        let events = timer.advance(secs(3));
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick { remaining: secs(58) },
                TimerEvent::Tick { remaining: secs(57) },
                TimerEvent::Tick { remaining: secs(56) },
            ]
        );
    }

    #[test]
    fn test_finish_fires_once() {
        let mut timer = CountdownTimer::new(secs(3), secs(1));
        timer.start();

        let events = timer.advance(secs(10));
        assert_eq!(events.len(), 4); // 3 ticks + finish
        assert_eq!(events.last(), Some(&TimerEvent::Finish));
        assert!(!timer.is_running());
        assert!(timer.advance(secs(1)).is_empty());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_uneven_total_never_ticks_zero() {
        let mut timer = CountdownTimer::new(Duration::from_millis(2500), secs(1));
        timer.start();

        let events = timer.advance(secs(5));
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick { remaining: Duration::from_millis(2500) },
                TimerEvent::Tick { remaining: Duration::from_millis(1500) },
                TimerEvent::Tick { remaining: Duration::from_millis(500) },
                TimerEvent::Finish,
            ]
        );
    }

    #[test]
    fn test_cancel_silences_timer() {
        let mut timer = CountdownTimer::new(secs(60), secs(1));
        timer.start();
        timer.advance(secs(2));
        timer.cancel();

        assert!(timer.advance(secs(120)).is_empty());
        assert_eq!(timer.remaining(), secs(58));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timer = CountdownTimer::new(Duration::from_millis(3), Duration::ZERO);
        timer.start();
        assert_eq!(timer.advance(Duration::from_millis(3)).len(), 4);
    }
}
