mod chain;
mod common;
mod cursor;
mod driver;
mod interpolator;
mod schedule;

pub use chain::{Boundary, Chain, ChainError, Node};
pub use common::{Direction, Frame};
pub use cursor::Cursor;
pub use driver::{Driver, DriverState, TickSink};
pub use interpolator::{Interpolator, OVERSHOOT_THRESHOLD};
pub use schedule::{Clock, ManualClock, Scheduler, SystemClock};

use crate::config::AnimationConfig;
use log::debug;

/// The card animation: a cursor walking the palette plus the driver that ticks it.
///
/// This is what the host talks to. Taps start transitions, ticks delivered through the sink
/// advance them, and [CardAnimation::frame] tells the renderer what to draw.
#[derive(Debug)]
pub struct CardAnimation<S> {
    cursor: Cursor,
    driver: Driver<S>,
    step: f32,
}

impl<S: TickSink> CardAnimation<S> {
    /// Create an animation over `palette_size` cards.
    pub fn new(palette_size: usize, config: &AnimationConfig, sink: S) -> Result<Self, ChainError> {
        let chain = Chain::new(palette_size)?;
        Ok(Self { cursor: Cursor::new(chain), driver: Driver::new(sink, config.tick_delay()), step: config.step })
    }

    /// Handle a tap.
    ///
    /// Starts a transition on the active card if it's resting. A transition that was paused half
    /// way through is resumed instead. Returns whether ticks are being requested afterwards.
    pub fn tap(&mut self) -> bool {
        if self.cursor.begin() || self.cursor.is_transitioning() {
            self.driver.start();
        } else {
            debug!("ignoring tap on card {}", self.cursor.active_index());
        }
        self.driver.is_running()
    }

    /// Handle a tick delivered by the host.
    pub fn tick(&mut self) -> Option<f32> {
        self.driver.on_tick(&mut self.cursor, self.step)
    }

    /// Stop ticking, leaving the transition in flight where it is.
    pub fn pause(&mut self) {
        self.driver.stop();
    }

    pub fn frame(&self) -> Frame {
        self.cursor.frame()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn sink(&self) -> &S {
        self.driver.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.driver.sink_mut()
    }
}
