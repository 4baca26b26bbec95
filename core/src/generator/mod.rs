use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Lays mines on an empty board and fills in neighbor counts.
pub trait MineGenerator {
    /// Places exactly `mine_count` mines. With a `safe_origin`, the 3×3 block around it stays
    /// mine-free.
    fn generate(
        &mut self,
        board: &mut Board,
        mine_count: CellCount,
        safe_origin: Option<Coord2>,
    ) -> Result<()>;
}

/// When mines are laid relative to the first move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationPolicy {
    /// Lay mines as soon as the game starts; the first reveal may hit a mine.
    Eager,
    /// Lay mines on the first reveal, keeping its 3×3 neighborhood clear.
    #[default]
    Deferred,
}

/// Generates `board` with a [`RandomMineGenerator`] seeded from `seed`.
pub fn generate(
    board: &mut Board,
    mine_count: CellCount,
    safe_origin: Option<Coord2>,
    seed: u64,
) -> Result<()> {
    RandomMineGenerator::new(seed).generate(board, mine_count, safe_origin)
}
