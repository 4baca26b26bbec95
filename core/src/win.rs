use crate::*;

/// Whether every non-mine cell is revealed. Mines may be hidden, flagged or not.
pub fn check_won(board: &Board) -> bool {
    board
        .iter_cells()
        .all(|(_, cell)| cell.is_mine() || cell.is_revealed())
}

impl Board {
    pub fn is_won(&self) -> bool {
        check_won(self)
    }
}
