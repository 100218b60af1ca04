//! Waiting between generations and noticing stop requests

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// What the run loop should do after waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Owned by the caller of `Simulation::run`; decides when the loop ends
pub trait Pacer {
    /// Block for `interval`, returning `Control::Stop` if a stop was requested
    fn wait(&mut self, interval: Duration) -> Result<Control>;
}

impl<F> Pacer for F
where
    F: FnMut(Duration) -> Result<Control>,
{
    fn wait(&mut self, interval: Duration) -> Result<Control> {
        self(interval)
    }
}

/// Sleeps for the interval and never asks to stop
#[derive(Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, interval: Duration) -> Result<Control> {
        std::thread::sleep(interval);
        Ok(Control::Continue)
    }
}

/// Polls terminal input while waiting; `q`, `Esc` and `Ctrl-C` stop the run.
///
/// Needs raw mode, which the terminal renderer enables.
#[derive(Debug, Default)]
pub struct KeyboardPacer;

impl Pacer for KeyboardPacer {
    fn wait(&mut self, interval: Duration) -> Result<Control> {
        let deadline = Instant::now() + interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if event::poll(remaining)? {
                if let Event::Key(key) = event::read()? {
                    if is_quit_key(&key) {
                        return Ok(Control::Stop);
                    }
                }
            }
            if Instant::now() >= deadline {
                return Ok(Control::Continue);
            }
        }
    }
}

/// Whether a key press asks the simulation to quit
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
