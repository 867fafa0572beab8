use std::time::{Duration, Instant};

use log::info;

use crate::config::TICK_INTERVAL;
use crate::error::AppError;
use crate::game::{GameState, StepOutcome};
use crate::input::{self, InputEvent, Key};
use crate::terminal_runtime::TerminalSession;
use crate::tick::TickTimer;

/// How long the loop waits for input while no tick is scheduled.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Session controller: owns the game state and its tick timer.
///
/// All mutation goes through [`Session::on_tick`] and [`Session::on_key`],
/// which the event loop calls from a single thread. Both return whether the
/// frame must be repainted.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    timer: TickTimer,
}

impl Session {
    /// Starts a running session whose first tick is due one interval after `now`.
    #[must_use]
    pub fn new(state: GameState, now: Instant) -> Self {
        let mut timer = TickTimer::new(TICK_INTERVAL);
        timer.start(now);
        info!("session started, food at {:?}", state.food.position);

        Self { state, timer }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// One timer firing: step the simulation if running, then repaint.
    pub fn on_tick(&mut self) -> bool {
        if let StepOutcome::Died(_) = self.state.step() {
            self.timer.stop();
        }
        true
    }

    /// Fires [`Session::on_tick`] if the timer is due at `now`.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        self.timer.poll(now) && self.on_tick()
    }

    /// Handles one key press.
    ///
    /// Direction keys change the heading for the next tick; restart only
    /// works on the game-over screen and restarts the timer from `now`.
    pub fn on_key(&mut self, key: Key, now: Instant) -> bool {
        if let Some(direction) = key.direction() {
            self.state.turn(direction);
            return false;
        }

        if key == Key::Restart && self.state.is_game_over() {
            self.state.reset();
            self.timer.start(now);
            return true;
        }

        false
    }

    /// Time the event loop may block on input before the next tick.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }
}

/// Drives the session until the player quits.
pub fn run(terminal: &mut TerminalSession, session: &mut Session) -> Result<(), AppError> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(session.state())?;
            needs_redraw = false;
        }

        let timeout = session
            .time_until_next_tick(Instant::now())
            .unwrap_or(IDLE_POLL_INTERVAL);

        match input::poll_input(timeout)? {
            Some(InputEvent::Quit) => break,
            Some(InputEvent::Resize) => needs_redraw = true,
            Some(InputEvent::Key(key)) => {
                needs_redraw |= session.on_key(key, Instant::now());
            }
            None => {}
        }

        needs_redraw |= session.poll_timer(Instant::now());
    }

    info!("quit with score {}", session.state().score);
    Ok(())
}
