use super::cursor::Cursor;
use log::{debug, trace};
use std::time::Duration;

/// Something that can be asked to deliver a tick later on.
///
/// The host decides how ticks are actually delivered. A request may never be honored, in which
/// case the animation simply stays paused where it is.
pub trait TickSink {
    /// Ask for [Driver::on_tick] to be called once `after` has elapsed.
    fn request_tick(&mut self, after: Duration);
}

/// Whether a driver is currently requesting ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DriverState {
    Idle,
    Running,
}

/// A start/stop gated tick loop.
///
/// While running, every tick advances the cursor and requests the next tick after a fixed delay.
/// The loop stops by itself when the transition in flight completes. At most one tick stream is
/// ever requested: starting an already running driver does nothing.
#[derive(Debug)]
pub struct Driver<S> {
    sink: S,
    state: DriverState,
    delay: Duration,
}

impl<S: TickSink> Driver<S> {
    pub fn new(sink: S, delay: Duration) -> Self {
        Self { sink, state: DriverState::Idle, delay }
    }

    /// Start requesting ticks, beginning with one right away.
    ///
    /// Returns `false` if the driver was already running.
    pub fn start(&mut self) -> bool {
        if self.state == DriverState::Running {
            return false;
        }
        debug!("driver is now {}", DriverState::Running);
        self.state = DriverState::Running;
        self.sink.request_tick(Duration::ZERO);
        true
    }

    /// Handle a tick delivered by the host.
    ///
    /// Ticks that arrive while idle are ignored. Returns the completed value on the tick that
    /// finishes the transition in flight.
    pub fn on_tick(&mut self, cursor: &mut Cursor, step: f32) -> Option<f32> {
        if self.state != DriverState::Running {
            trace!("ignoring tick while {}", self.state);
            return None;
        }
        match cursor.tick(step) {
            Some(value) => {
                debug!("transition completed at {value}, driver is now {}", DriverState::Idle);
                self.state = DriverState::Idle;
                Some(value)
            }
            None => {
                self.sink.request_tick(self.delay);
                None
            }
        }
    }

    /// Stop requesting ticks.
    ///
    /// A tick that was already requested is still delivered but ignored. The cursor is left as it
    /// is so the transition can be resumed by starting the driver again.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            debug!("driver stopped, now {}", DriverState::Idle);
        }
        self.state = DriverState::Idle;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
