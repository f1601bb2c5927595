//! Single-slot cancellable phase timer on a virtual clock.
//!
//! The battle only ever waits on one thing at a time (the intro pause, the
//! answer countdown, or a display delay), so the timer holds at most one
//! pending deadline. Scheduling replaces whatever was pending, so a timer
//! from an earlier phase can never fire once the next one is armed.

use std::time::Duration;
use tracing::trace;

use super::state::Phase;

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Intro pause is over; open the answer window.
    IntroDelay,
    /// Answer window expired without a submission.
    Countdown,
    /// Judge display is over; apply HP.
    JudgeDelay,
    /// HP display is over; next turn or end.
    HpDelay,
}

impl TimerKind {
    /// The only phase in which this timer may act.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            TimerKind::IntroDelay => Phase::Intro,
            TimerKind::Countdown => Phase::Answer,
            TimerKind::JudgeDelay => Phase::Judge,
            TimerKind::HpDelay => Phase::Hp,
        }
    }
}

/// A timer and the virtual time it fires at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub kind: TimerKind,
    pub deadline: Duration,
}

/// One pending timer at most.
#[derive(Clone, Debug, Default)]
pub struct PhaseTimer {
    pending: Option<ScheduledTimer>,
}

impl PhaseTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at `deadline`, cancelling any pending timer.
    pub fn schedule(&mut self, kind: TimerKind, deadline: Duration) {
        self.cancel();
        trace!(?kind, deadline_ms = deadline.as_millis() as u64, "timer scheduled");
        self.pending = Some(ScheduledTimer { kind, deadline });
    }

    /// Drop the pending timer, if any.
    pub fn cancel(&mut self) -> Option<TimerKind> {
        let cancelled = self.pending.take().map(|p| p.kind);
        if let Some(kind) = cancelled {
            trace!(?kind, "timer cancelled");
        }
        cancelled
    }

    /// Kind and deadline of the pending timer.
    #[must_use]
    pub fn pending(&self) -> Option<(TimerKind, Duration)> {
        self.pending.map(|p| (p.kind, p.deadline))
    }

    /// Remove and return the pending timer if its deadline is at or before `now`.
    pub fn take_due(&mut self, now: Duration) -> Option<ScheduledTimer> {
        if self.pending.is_some_and(|p| p.deadline <= now) {
            self.pending.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_at_deadline() {
        let mut timer = PhaseTimer::new();
        timer.schedule(TimerKind::IntroDelay, ms(1000));

        assert!(timer.take_due(ms(999)).is_none());
        let fired = timer.take_due(ms(1000)).unwrap();
        assert_eq!(fired.kind, TimerKind::IntroDelay);
        assert_eq!(fired.deadline, ms(1000));
        assert!(timer.take_due(ms(5000)).is_none());
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut timer = PhaseTimer::new();
        timer.schedule(TimerKind::Countdown, ms(1000));
        timer.schedule(TimerKind::JudgeDelay, ms(2000));

        assert_eq!(timer.pending(), Some((TimerKind::JudgeDelay, ms(2000))));
        // the replaced countdown never fires, even past its deadline
        assert!(timer.take_due(ms(1500)).is_none());
        assert_eq!(timer.take_due(ms(2000)).unwrap().kind, TimerKind::JudgeDelay);
    }

    #[test]
    fn test_cancel() {
        let mut timer = PhaseTimer::new();
        timer.schedule(TimerKind::Countdown, ms(100));

        assert_eq!(timer.cancel(), Some(TimerKind::Countdown));
        assert_eq!(timer.cancel(), None);
        assert!(timer.take_due(ms(1000)).is_none());
    }

    #[test]
    fn test_kind_phase() {
        assert_eq!(TimerKind::Countdown.phase(), Phase::Answer);
        assert_eq!(TimerKind::HpDelay.phase(), Phase::Hp);
    }
}
