use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::coord::Coord;
use crate::player::Player;
use crate::ui::{BoardView, Marker};

/// Automatic player: fires next to earlier hits, otherwise at random.
pub struct AiPlayer {
    rng: SmallRng,
    replays: usize,
}

impl AiPlayer {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self { rng, replays: 0 }
    }

    /// Accept `replays` "play again" prompts before declining.
    pub fn with_replays(mut self, replays: usize) -> Self {
        self.replays = replays;
        self
    }

    /// Choose an untried cell, or `None` if the board is exhausted.
    pub fn select_target(&mut self, view: &BoardView<'_>) -> Option<Coord> {
        let n = view.size();
        let hits: Vec<Coord> = view
            .markers()
            .filter(|&(_, m)| m == Marker::Hit)
            .map(|(c, _)| c)
            .collect();

        let mut targets: Vec<Coord> = hits
            .iter()
            .flat_map(|h| h.neighbours(n))
            .filter(|&c| view.marker(c) == Marker::Unknown)
            .collect();
        targets.sort();
        targets.dedup();

        if targets.is_empty() {
            targets = view
                .markers()
                .filter(|&(_, m)| m == Marker::Unknown)
                .map(|(c, _)| c)
                .collect();
        }
        if targets.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..targets.len());
        Some(targets[pick])
    }
}

impl Player for AiPlayer {
    fn next_guess(&mut self, view: &BoardView<'_>) -> anyhow::Result<String> {
        let target = self
            .select_target(view)
            .ok_or_else(|| anyhow::anyhow!("no untried cells left"))?;
        Ok(target.to_string())
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        if self.replays == 0 {
            return Ok(false);
        }
        self.replays -= 1;
        Ok(true)
    }
}
