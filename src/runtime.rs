use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

use crate::{App, AppAction};

#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Where terminal events come from. A plain channel receiver is one, which
/// is how tests script a session.
pub trait EventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

impl EventSource for Receiver<AppEvent> {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        Receiver::recv_timeout(self, timeout)
    }
}

/// Reads the real terminal on a background thread
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                // windows reports releases too
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(CtEvent::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    log::error!("terminal event read failed: {e}");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// How long to wait for input before ticking. Ticks only matter while the
/// confetti is flying, so the idle wait is long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pace {
    pub animating: Duration,
    pub idle: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            animating: Duration::from_millis(50),
            idle: Duration::from_millis(500),
        }
    }
}

impl Pace {
    pub fn wait_for(&self, app: &App) -> Duration {
        if app.confetti.is_active() {
            self.animating
        } else {
            self.idle
        }
    }
}

/// What the draw loop should do after one dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Idle,
    Quit,
}

/// Pulls one event at a time and applies it to the app
pub struct Runner<E: EventSource> {
    events: E,
    pace: Pace,
}

impl<E: EventSource> Runner<E> {
    pub fn new(events: E) -> Self {
        Self::with_pace(events, Pace::default())
    }

    pub fn with_pace(events: E, pace: Pace) -> Self {
        Self { events, pace }
    }

    /// Next event, or a tick once the wait runs out or the source is gone
    pub fn next_event(&self, wait: Duration) -> AppEvent {
        self.events.recv_timeout(wait).unwrap_or(AppEvent::Tick)
    }

    pub fn dispatch(&self, app: &mut App) -> Outcome {
        match self.next_event(self.pace.wait_for(app)) {
            AppEvent::Tick if app.confetti.is_active() => {
                app.on_tick();
                Outcome::Redraw
            }
            AppEvent::Tick => Outcome::Idle,
            AppEvent::Resize => Outcome::Redraw,
            AppEvent::Key(key) => match app.on_key(key) {
                AppAction::Quit => Outcome::Quit,
                AppAction::Continue => Outcome::Redraw,
            },
        }
    }
}
