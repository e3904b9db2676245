use crate::{
    animation::{CardAnimation, Clock, Scheduler},
    render::{Canvas, Repaint},
};
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use std::{
    io::{self, Stdout, Write},
    time::Duration,
};

/// How long the host may block waiting for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    /// A tick is pending and is due after this long.
    Until(Duration),
    /// Nothing is pending, only input can change what's on screen.
    Forever,
}

/// What an input event means to the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Tap,
    Pause,
    Quit,
    Redraw,
    Ignored,
}

impl From<&Event> for Input {
    fn from(event: &Event) -> Self {
        match event {
            Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
                KeyCode::Char('p') => Self::Pause,
                _ => Self::Tap,
            },
            Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), .. }) => Self::Tap,
            Event::Resize(..) => Self::Redraw,
            _ => Self::Ignored,
        }
    }
}

/// Puts the terminal in raw mode on an alternate screen, and restores it when dropped.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl TerminalGuard<Stdout> {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }
}

impl<W: Write> TerminalGuard<W> {
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the animation in the terminal until the user quits.
pub struct TerminalHost<'a, C: Clock> {
    animation: CardAnimation<Scheduler<C>>,
    canvas: Canvas<'a>,
}

impl<'a, C: Clock> TerminalHost<'a, C> {
    pub fn new(animation: CardAnimation<Scheduler<C>>, canvas: Canvas<'a>) -> Self {
        Self { animation, canvas }
    }

    pub fn run<W: Write>(&mut self, guard: &mut TerminalGuard<W>) -> io::Result<()> {
        let mut repaint = Some(Repaint::Full);
        loop {
            if let Some(mode) = repaint.take() {
                let (columns, rows) = terminal::size()?;
                self.canvas.draw(guard.writer(), columns, rows, self.animation.frame(), mode)?;
            }

            // wait for input until the next tick is due rather than sleeping through it
            let event = match self.wait() {
                Wait::Until(timeout) => event::poll(timeout)?.then(event::read).transpose()?,
                Wait::Forever => Some(event::read()?),
            };
            if let Some(event) = event {
                match Input::from(&event) {
                    Input::Quit => {
                        info!("quitting");
                        return Ok(());
                    }
                    Input::Tap => {
                        let running = self.animation.tap();
                        debug!("tap, animation running: {running}");
                    }
                    Input::Pause => self.animation.pause(),
                    Input::Redraw => repaint = Some(Repaint::Full),
                    Input::Ignored => (),
                }
            }
            if self.handle_due_tick() {
                repaint.get_or_insert(Repaint::Card);
            }
        }
    }

    /// How long to wait for input before the next tick is due.
    pub fn wait(&self) -> Wait {
        match self.animation.sink().time_until_due() {
            Some(timeout) => Wait::Until(timeout),
            None => Wait::Forever,
        }
    }

    /// Deliver the pending tick if it's due. Returns whether a tick was delivered.
    fn handle_due_tick(&mut self) -> bool {
        if !self.animation.sink_mut().take_due() {
            return false;
        }
        if let Some(value) = self.animation.tick() {
            info!("card {} is now active, last transition settled at {value}", self.animation.frame().active_index);
        }
        true
    }
}
