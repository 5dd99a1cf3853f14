//! The turn loop: one `Player`, one owned `GameEngine`, one guess per turn.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::common::BoardError;
use crate::config::GameConfig;
use crate::game::{GameEngine, GameSnapshot};
use crate::player::Player;
use crate::ui::{self, BoardView};

/// What happened over a whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    /// Final state of every finished game, in order.
    pub games: Vec<GameSnapshot>,
    /// Inputs rejected as malformed or off the board.
    pub invalid_inputs: usize,
}

/// Drives games for a player until they decline a replay.
pub struct Session<P, R> {
    player: P,
    config: GameConfig,
    rng: R,
}

impl<P: Player, R: Rng> Session<P, R> {
    pub fn new(player: P, config: GameConfig, rng: R) -> Self {
        Self {
            player,
            config,
            rng,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn into_player(self) -> P {
        self.player
    }

    /// Games until the player stops, each behind the start gate. I/O
    /// failures end the session with an error.
    pub fn run(&mut self) -> anyhow::Result<SessionSummary> {
        let mut summary = SessionSummary {
            games: Vec::new(),
            invalid_inputs: 0,
        };

        self.player.wait_for_start()?;
        let mut engine = GameEngine::new(self.config.clone(), &mut self.rng)
            .map_err(|e| anyhow::anyhow!(e))?;

        loop {
            summary.invalid_inputs += self.play_game(&mut engine)?;
            let snapshot = engine.snapshot();
            info!("game {} won in {} guesses", summary.games.len() + 1, snapshot.guesses);
            summary.games.push(snapshot);

            if !self.player.play_again()? {
                break;
            }
            self.player.wait_for_start()?;
            engine.reset(&mut self.rng).map_err(|e| anyhow::anyhow!(e))?;
        }
        Ok(summary)
    }

    /// Play turns until every ship is sunk; returns the rejected input count.
    fn play_game(&mut self, engine: &mut GameEngine) -> anyhow::Result<usize> {
        let mut invalid = 0;
        while !engine.is_won() {
            let view = BoardView::new(engine.board());
            self.player.show_board(&view)?;
            let raw = self.player.next_guess(&view)?;

            match engine.guess(&raw) {
                Ok(result) => {
                    debug!("{:?} -> {:?}", raw, result);
                    for message in ui::messages(result) {
                        self.player.notify(message)?;
                    }
                }
                Err(BoardError::InvalidInput(e)) => {
                    debug!("rejected guess {:?}: {}", raw, e);
                    invalid += 1;
                    self.player.notify(ui::INVALID_INPUT)?;
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
        self.player.show_board(&BoardView::new(engine.board()))?;
        Ok(invalid)
    }
}
