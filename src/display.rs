use crate::countdown::{Countdown, CountdownState, Hms, TickOutcome, TickSchedule};
use crate::preset::{DigitGroup, Preset, Size};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const COMPLETION_TITLE: &str = "Timer Done";
pub const COMPLETION_MESSAGE: &str = "Your countdown has finished!";
pub const DONE_TEXT: &str = "Done!";

/// Smallest window a display opens with.
pub const MIN_WINDOW: Size = Size { w: 300, h: 200 };
const WINDOW_MARGIN: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayText {
    Digits(Hms),
    Done,
}

impl DisplayText {
    /// Text drawn for `group`, or `None` when the group is not drawn.
    ///
    /// Once finished only the hours slot is used, showing [`DONE_TEXT`].
    pub fn label(&self, group: DigitGroup) -> Option<String> {
        match self {
            DisplayText::Digits(hms) => Some(format!("{:02}", group.pick(*hms))),
            DisplayText::Done if group == DigitGroup::Hours => Some(DONE_TEXT.to_string()),
            DisplayText::Done => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Ticked(Hms),
    /// Fired once when the countdown reaches zero.
    Completed { alarm: Option<PathBuf> },
}

/// A running countdown window built from a frozen preset.
#[derive(Debug)]
pub struct ActiveDisplay {
    id: u64,
    preset: Preset,
    countdown: Countdown,
    schedule: TickSchedule,
    visible: bool,
    closed: bool,
}

impl ActiveDisplay {
    pub fn new(id: u64, preset: Preset, now: Instant) -> Self {
        let countdown = Countdown::from_hms(preset.duration);
        tracing::info!(id, name = %preset.name, secs = countdown.remaining(), "display launched");
        Self {
            id,
            preset,
            countdown,
            schedule: TickSchedule::new(now),
            visible: true,
            closed: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_finished(&self) -> bool {
        self.countdown.state() == CountdownState::Finished
    }

    pub fn text(&self) -> DisplayText {
        if self.is_finished() {
            DisplayText::Done
        } else {
            DisplayText::Digits(self.countdown.hms())
        }
    }

    pub fn tooltip(&self) -> String {
        if self.is_finished() {
            format!("Timer: {DONE_TEXT}")
        } else {
            format!("Timer: {}", self.countdown.hms())
        }
    }

    /// Tick if a second has passed since the previous tick.
    pub fn poll(&mut self, now: Instant) -> Option<DisplayEvent> {
        if !self.countdown.is_running() || !self.schedule.poll(now) {
            return None;
        }
        self.tick()
    }

    /// Advance the countdown by one tick unconditionally.
    pub fn tick(&mut self) -> Option<DisplayEvent> {
        match self.countdown.tick() {
            TickOutcome::Ticked(hms) => Some(DisplayEvent::Ticked(hms)),
            TickOutcome::Finished => {
                tracing::info!(id = self.id, name = %self.preset.name, "display finished");
                Some(DisplayEvent::Completed {
                    alarm: self.preset.alarm.clone(),
                })
            }
            TickOutcome::Idle => None,
        }
    }

    /// Time until the next tick, or `None` when no more ticks will happen.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.countdown
            .is_running()
            .then(|| self.schedule.until_next(now))
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Terminate early. The countdown stops immediately.
    pub fn stop(&mut self) {
        if !self.closed {
            tracing::info!(id = self.id, remaining = self.countdown.remaining(), "display stopped");
        }
        self.countdown.cancel();
        self.closed = true;
    }

    /// Window size covering every digit group plus a margin.
    pub fn window_size(&self) -> Size {
        let (w, h) = DigitGroup::ALL
            .iter()
            .map(|g| self.preset.layout(*g))
            .fold((0, 0), |(w, h), l| {
                (
                    w.max(l.position.x.saturating_add(l.size.w)),
                    h.max(l.position.y.saturating_add(l.size.h)),
                )
            });
        Size::new(
            w.saturating_add(WINDOW_MARGIN).max(MIN_WINDOW.w),
            h.saturating_add(WINDOW_MARGIN).max(MIN_WINDOW.h),
        )
    }
}
