#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use win::*;

mod board;
mod cell;
mod error;
mod generator;
mod reveal;
mod session;
mod types;
mod win;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validated configuration: at least one row and column, and at least one cell without a
    /// mine.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }

        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(ConfigIssue::TooManyMines {
                mines: self.mines,
                cells,
            }
            .into());
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Classic difficulty presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 9×9, 10 mines
    #[default]
    Beginner,
    /// 16×16, 40 mines
    Intermediate,
    /// 30 columns by 16 rows, 99 mines
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Self::Expert => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

/// Outcome of revealing a single cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was flagged or already open, nothing changed
    AlreadyRevealedOrFlagged,
    Mine,
    /// No adjacent mines, the zero region around it can be expanded
    Empty,
    Numbered(u8),
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            AlreadyRevealedOrFlagged => false,
            Mine => true,
            Empty => true,
            Numbered(_) => true,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            assert_eq!(config.validate(), Ok(()), "{}", difficulty.name());
        }
        assert_eq!(Difficulty::Expert.config().total_cells(), 480);
        assert_eq!(GameConfig::default(), GameConfig::from(Difficulty::Beginner));
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 9, 1),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
        assert_eq!(
            GameConfig::new(9, 0, 1),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
    }

    #[test]
    fn config_needs_a_safe_cell() {
        assert!(GameConfig::new(3, 3, 8).is_ok());
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 9,
                cells: 9
            }))
        );
    }

    #[test]
    fn config_reads_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 16, "cols": 30, "mines": 99}"#).unwrap();
        assert_eq!(config, Difficulty::Expert.config());

        let difficulty: Difficulty = serde_json::from_str(r#""Intermediate""#).unwrap();
        assert_eq!(GameConfig::from(difficulty), GameConfig::new(16, 16, 40).unwrap());

        let policy: GenerationPolicy = serde_json::from_str(r#""Eager""#).unwrap();
        assert_eq!(policy, GenerationPolicy::Eager);
        assert_eq!(GenerationPolicy::default(), GenerationPolicy::Deferred);
    }

    #[test]
    fn only_no_op_reveal_has_no_update() {
        assert!(!RevealOutcome::AlreadyRevealedOrFlagged.has_update());
        assert!(RevealOutcome::Empty.has_update());
        assert!(RevealOutcome::Numbered(3).has_update());
        assert!(RevealOutcome::Mine.is_mine());
    }
}
