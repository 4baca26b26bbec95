use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {coords:?} are outside of a board of size {size:?}")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Reason a board or generator configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board must have at least one row and one column")]
    EmptyBoard,
    #[error("too many mines, requested {mines} but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("mines were already placed on this board")]
    AlreadyGenerated,
    #[error("board has more than 255 rows or columns")]
    BoardTooLarge,
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
