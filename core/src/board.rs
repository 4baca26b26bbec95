use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A fixed-size grid of cells, the sole owner of cell state.
///
/// Cells are stored row-major: `rows` rows of `cols` cells, so the flat index of `(x, y)` is
/// `y * cols + x`. Mines are laid once per board, either by a [`MineGenerator`] or through
/// [`Board::from_mines`]; a new game allocates a new board.
///
/// Deserializing only trusts the mine positions and cell states, counts and counters are
/// rebuilt from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: Array2<Cell>,
    mines_total: CellCount,
    mines_remaining: isize,
    generated: bool,
}

impl Board {
    /// Empty board: every cell hidden with a count of zero, no mines yet.
    pub fn new(rows: Coord, cols: Coord) -> Self {
        Self {
            cells: Array2::default([usize::from(rows), usize::from(cols)]),
            mines_total: 0,
            mines_remaining: 0,
            generated: false,
        }
    }

    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Board with mines at exactly the given coordinates and counts filled in.
    ///
    /// Duplicate coordinates are laid once.
    pub fn from_mines(rows: Coord, cols: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(rows, cols);
        for &coords in mine_coords {
            board.validate_coords(coords)?;
        }
        board.lay_mines(mine_coords);
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                coords,
                size: self.size(),
            })
        }
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    /// Bounds as `(cols, rows)`, in the same `(x, y)` order as coordinates.
    pub fn size(&self) -> Coord2 {
        (self.cols(), self.rows())
    }

    pub fn rows(&self) -> Coord {
        self.cells.nrows().try_into().unwrap()
    }

    pub fn cols(&self) -> Coord {
        self.cells.ncols().try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn mines_total(&self) -> CellCount {
        self.mines_total
    }

    /// Display counter: total mines minus placed flags. Can go negative with excess flags.
    pub fn mines_remaining(&self) -> isize {
        self.mines_remaining
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub(crate) fn at_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self.cells[coords.to_nd_index()])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn for_each_neighbor(&self, coords: Coord2, mut f: impl FnMut(Coord2)) {
        for pos in self.iter_neighbors(coords) {
            f(pos);
        }
    }

    /// All cells with their coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_revealed())
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_flagged())
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| predicate(cell))
            .count()
            .try_into()
            .unwrap()
    }

    /// Marks every coordinate as a mine, then increments the count of each non-mine neighbor
    /// once per adjacent mine. Coordinates must already be validated.
    ///
    /// Flags placed before the mines were laid still count against `mines_remaining`.
    pub(crate) fn lay_mines(&mut self, mine_coords: &[Coord2]) {
        for &coords in mine_coords {
            self.cells[coords.to_nd_index()].set_value(CellValue::Mine);
        }

        let mut laid: CellCount = 0;
        for (y, x) in self
            .cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(index, _)| index)
            .collect::<Vec<_>>()
        {
            let coords = (x as Coord, y as Coord);
            for pos in self.iter_neighbors(coords) {
                self.cells[pos.to_nd_index()].increment();
            }
            laid += 1;
        }

        self.mines_total = laid;
        self.mines_remaining = laid as isize - self.flagged_count() as isize;
        self.generated = true;
    }

    pub(crate) fn adjust_mines_remaining(&mut self, delta: FlagDelta) {
        self.mines_remaining += isize::from(delta);
    }
}

#[derive(Deserialize)]
struct BoardRepr {
    cells: Array2<Cell>,
    generated: bool,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let (rows, cols) = repr.cells.dim();
        let (Ok(rows), Ok(cols)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(ConfigIssue::BoardTooLarge.into());
        };

        let mut board = Self::new(rows, cols);
        let mut mines = Vec::new();
        for ((y, x), cell) in repr.cells.indexed_iter() {
            let coords = (x as Coord, y as Coord);
            board.at_mut(coords)?.set_state(cell.state());
            if cell.is_mine() {
                mines.push(coords);
            }
        }

        if repr.generated || !mines.is_empty() {
            board.lay_mines(&mines);
        } else {
            board.mines_remaining = -(board.flagged_count() as isize);
        }
        Ok(board)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    /// Panics when `coords` is out of bounds; use [`Board::at`] for a checked lookup.
    fn index(&self, coords: Coord2) -> &Self::Output {
        match self.at(coords) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}
