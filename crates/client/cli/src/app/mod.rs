//! Terminal application loop.
mod message;
mod session;

pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use session::{MatchOutcome, MatchSession};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::config::CliConfig;
use crate::input::{self, KeyAction};
use crate::presentation::{terminal, ui};

pub struct CliApp {
    session: MatchSession,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Self {
        tracing::info!(
            "Starting match on a {}x{} board (move {}, attack {})",
            config.board.width,
            config.board.height,
            config.game.movement_range,
            config.game.attack_range
        );
        Self {
            session: MatchSession::new(&config),
        }
    }

    pub fn run(mut self) -> Result<()> {
        let mut tui = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        loop {
            ui::render(&mut tui, &self.session)?;
            self.session.settle_motion();

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match input::handle_key(key) {
                KeyAction::Quit => break,
                KeyAction::Signal(signal) => {
                    let outcome = self.session.apply(signal);
                    tracing::debug!("{} -> {:?}", signal, outcome);
                }
                KeyAction::None => {}
            }
        }

        tracing::info!(
            "Session ended on turn {} ({:?})",
            self.session.turn(),
            self.session.outcome()
        );
        Ok(())
    }
}
