use std::fmt;
use std::time::{Duration, Instant};

/// Interval between two countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Hours/minutes/seconds decomposition of a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn from_secs(total: u64) -> Self {
        Self {
            hours: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    /// Reached zero. Terminal.
    Finished,
    /// Stopped by the user before reaching zero. Terminal.
    Cancelled,
}

/// Result of a single [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The counter moved one second closer to zero.
    Ticked(Hms),
    /// The counter reached zero on this tick. Reported exactly once.
    Finished,
    /// The countdown is no longer running; nothing happened.
    Idle,
}

/// One-second granularity countdown counter.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u64,
    state: CountdownState,
    ticks: u64,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self {
            remaining: total_secs,
            state: CountdownState::Running,
            ticks: 0,
        }
    }

    pub fn from_hms(hms: Hms) -> Self {
        Self::new(hms.total_secs())
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn hms(&self) -> Hms {
        Hms::from_secs(self.remaining)
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Number of ticks processed while running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the countdown by one second.
    ///
    /// A zero-length countdown finishes on its first tick. Once finished or
    /// cancelled every further call returns [`TickOutcome::Idle`].
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != CountdownState::Running {
            return TickOutcome::Idle;
        }
        self.ticks += 1;
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.state = CountdownState::Finished;
            tracing::debug!(ticks = self.ticks, "countdown finished");
            return TickOutcome::Finished;
        }
        tracing::trace!(remaining = self.remaining, "countdown tick");
        TickOutcome::Ticked(self.hms())
    }

    /// Stop immediately regardless of the remaining time.
    pub fn cancel(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Cancelled;
        }
    }
}

/// Schedules ticks at roughly one-second intervals.
///
/// Each tick is scheduled relative to the moment the previous one was
/// observed, so drift accumulates when frames arrive late.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    last: Instant,
    interval: Duration,
}

impl TickSchedule {
    pub fn new(start: Instant) -> Self {
        Self::with_interval(start, TICK_INTERVAL)
    }

    pub fn with_interval(start: Instant, interval: Duration) -> Self {
        Self {
            last: start,
            interval,
        }
    }

    /// Returns `true` and re-arms when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }
}
