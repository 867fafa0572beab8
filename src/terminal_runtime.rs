use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::GameState;
use crate::renderer;

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Terminal modes switched on so far; dropping undoes exactly those.
#[derive(Debug, Default)]
struct Modes {
    raw: bool,
    alternate_screen: bool,
}

impl Modes {
    fn all() -> Self {
        Self {
            raw: true,
            alternate_screen: true,
        }
    }

    fn restore(&mut self) {
        if self.alternate_screen {
            if let Err(error) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
                warn!("failed to leave alternate screen: {error}");
            }
            self.alternate_screen = false;
        }

        if self.raw {
            if let Err(error) = disable_raw_mode() {
                warn!("failed to disable raw mode: {error}");
            }
            self.raw = false;
        }
    }
}

impl Drop for Modes {
    fn drop(&mut self) {
        self.restore();
    }
}

/// The terminal the game draws on, in raw mode on the alternate screen.
///
/// Setup is staged: if any step fails, the steps already taken are undone
/// before the error is returned. Dropping the session restores the terminal.
pub struct TerminalSession {
    terminal: AppTerminal,
    _modes: Modes,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let mut modes = Modes::default();

        enable_raw_mode()?;
        modes.raw = true;

        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        modes.alternate_screen = true;

        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        debug!("terminal session entered, size {:?}", terminal.size()?);

        Ok(Self {
            terminal,
            _modes: modes,
        })
    }

    /// Paints one frame of `state`.
    pub fn draw(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, state))
            .map(|_| ())
    }
}

/// Restores the terminal before the default panic report is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        Modes::all().restore();
        default_hook(panic_info);
    }));
}
