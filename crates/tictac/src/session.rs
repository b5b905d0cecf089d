//! The interaction loop: show the game, collect a move, apply it, check for a result.

use crate::render::{render_game, render_outcome};
use crate::seats::{Attempt, Seat};
use anyhow::Result;
use std::io::Write;
use tictac_core::{Game, GameError, Outcome, Turn};
use tracing::{debug, info, instrument, warn};

/// Drives one game to completion.
pub struct Session<W> {
    game: Game,
    human: Box<dyn Seat>,
    computer: Box<dyn Seat>,
    out: W,
    ascii: bool,
}

impl<W: Write> Session<W> {
    /// Creates a session.
    ///
    /// `human` answers every turn in a multiplayer game, and the player's
    /// turns otherwise. `computer` answers the computer's turns in a
    /// single-player game.
    pub fn new(
        game: Game,
        human: Box<dyn Seat>,
        computer: Box<dyn Seat>,
        out: W,
        ascii: bool,
    ) -> Self {
        Self {
            game,
            human,
            computer,
            out,
            ascii,
        }
    }

    /// Read access to the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until the game has a winner or a tie, then reports it.
    ///
    /// # Errors
    ///
    /// Fails if writing output fails, if a seat cannot produce a move (for
    /// example, input closed), or on an engine contract failure.
    #[instrument(skip(self), fields(size = self.game.size(), multi = self.game.is_multiplayer()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(first = ?self.game.first_mover(), "Session started");
        let mut pending: Option<GameError> = None;

        loop {
            if let Some(outcome) = self.game.get_winner() {
                return self.finish(outcome);
            }

            write!(
                self.out,
                "{}",
                render_game(&self.game, self.ascii, pending.as_ref())
            )?;

            let turn = self.game.turn();
            let seat = Self::seat_for(
                &mut self.human,
                &mut self.computer,
                self.game.is_multiplayer(),
                turn,
            );
            write!(self.out, "{}", seat.announce(turn, self.ascii))?;
            self.out.flush()?;

            match seat.attempt(&mut self.game).await? {
                Attempt::Played(mov) => {
                    debug!(%mov, human = seat.is_human(), "Turn complete");
                    pending = None;
                }
                Attempt::Rejected(err) => {
                    warn!(error = %err, "Re-prompting");
                    pending = Some(err);
                }
            }
        }
    }

    /// Which seat answers for `turn`. The engine does not decide this.
    fn seat_for<'a>(
        human: &'a mut Box<dyn Seat>,
        computer: &'a mut Box<dyn Seat>,
        multi: bool,
        turn: Turn,
    ) -> &'a mut Box<dyn Seat> {
        if multi || turn == Turn::Player {
            human
        } else {
            computer
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome> {
        let line = self.game.winning_line().map(|(line, _)| line);
        write!(self.out, "{}", render_game(&self.game, self.ascii, None))?;
        writeln!(self.out, "{}", render_outcome(&outcome, line, self.ascii))?;
        self.out.flush()?;
        info!(%outcome, "Game over");
        Ok(outcome)
    }
}
