//! Computer seat: a short pause, then a uniformly random open cell.

use super::{Attempt, Seat};
use crate::render::mark;
use crate::settings::ThinkDelay;
use anyhow::Result;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tictac_core::{Game, Turn};
use tracing::{debug, instrument};

/// Random mover backed by a cryptographically strong generator.
///
/// `rng` only picks cells. Pauses are drawn from the OS generator so the
/// configured pacing never shifts which cells a seeded seat picks.
pub struct ComputerSeat<R> {
    rng: R,
    pace: OsRng,
    think: ThinkDelay,
}

impl<R: RngCore + CryptoRng + Send> ComputerSeat<R> {
    /// Creates a computer seat pausing within `think` before every move.
    pub fn new(rng: R, think: ThinkDelay) -> Self {
        Self {
            rng,
            pace: OsRng,
            think,
        }
    }
}

#[async_trait::async_trait]
impl<R: RngCore + CryptoRng + Send> Seat for ComputerSeat<R> {
    #[instrument(skip_all, fields(turn = ?game.turn()))]
    async fn attempt(&mut self, game: &mut Game) -> Result<Attempt> {
        let pause = self.think.sample(&mut self.pace);
        debug!(?pause, "Thinking");
        tokio::time::sleep(pause).await;

        let mov = game.play_computer_move(&mut self.rng)?;
        Ok(Attempt::Played(mov))
    }

    fn announce(&self, turn: Turn, ascii: bool) -> String {
        format!("{} {} is thinking...\n", turn.name(), mark(turn, ascii))
    }

    fn is_human(&self) -> bool {
        false
    }
}
