use super::driver::TickSink;
use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

/// A source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give another to a scheduler.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Rc::new(Cell::new(Instant::now())) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Turns tick requests into deadlines the host can wait on.
///
/// Only one tick is ever pending: a new request replaces the previous one. The host waits for
/// input for at most [Scheduler::time_until_due] and then calls [Scheduler::take_due] to find out
/// whether the tick should be delivered, so the thread is never put to sleep between ticks.
#[derive(Debug)]
pub struct Scheduler<C = SystemClock> {
    clock: C,
    due: Option<Instant>,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, due: None }
    }

    /// Whether a tick has been requested and not delivered yet.
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// How long until the pending tick is due, zero if it already is.
    pub fn time_until_due(&self) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(self.clock.now()))
    }

    /// Consume the pending tick if it's due.
    pub fn take_due(&mut self) -> bool {
        match self.due {
            Some(due) if due <= self.clock.now() => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

impl<C: Clock> TickSink for Scheduler<C> {
    fn request_tick(&mut self, after: Duration) {
        self.due = Some(self.clock.now() + after);
    }
}
