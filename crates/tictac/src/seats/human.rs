//! Human seat reading typed coordinates, one per line.

use super::{Attempt, Seat};
use crate::render::render_prompt;
use anyhow::{Result, anyhow};
use tictac_core::{Game, Turn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument, warn};

/// Human player typing moves like `b2` or `2B`.
pub struct HumanSeat<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanSeat<R> {
    /// Creates a seat reading lines from `input`.
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Seat for HumanSeat<R> {
    #[instrument(skip_all, fields(turn = ?game.turn()))]
    async fn attempt(&mut self, game: &mut Game) -> Result<Attempt> {
        let line = self
            .lines
            .next_line()
            .await?
            .ok_or_else(|| anyhow!("Input closed before the game finished"))?;
        debug!(input = %line, "Read move text");

        match game.submit_input(&line) {
            Ok(mov) => Ok(Attempt::Played(mov)),
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "Move rejected, asking again");
                Ok(Attempt::Rejected(e))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn announce(&self, turn: Turn, ascii: bool) -> String {
        render_prompt(turn, ascii)
    }

    fn is_human(&self) -> bool {
        true
    }
}
