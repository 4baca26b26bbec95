use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform rejection sampling: draw random cells until enough distinct, allowed sites are found.
///
/// Termination is probabilistic. It is fast as long as the mine count leaves a reasonable share
/// of the board free, which holds for every [`Difficulty`] preset.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum SafeZone {
    Nothing,
    Cell(Coord2),
    Block(Coord2),
}

impl SafeZone {
    fn excludes(self, coords: Coord2) -> bool {
        match self {
            Self::Nothing => false,
            Self::Cell(origin) => origin == coords,
            Self::Block(origin) => is_neighbor(origin, coords),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(
        &mut self,
        board: &mut Board,
        mine_count: CellCount,
        safe_origin: Option<Coord2>,
    ) -> Result<()> {
        if board.is_generated() {
            return Err(ConfigIssue::AlreadyGenerated.into());
        }
        let config = GameConfig::new(board.rows(), board.cols(), mine_count)?;

        let safe_zone = match safe_origin {
            None => SafeZone::Nothing,
            Some(origin) => {
                let origin = board.validate_coords(origin)?;
                let block_cells = board.iter_neighbors(origin).count() + 1;
                let free_cells = usize::from(config.total_cells()) - block_cells;
                if free_cells < usize::from(mine_count) {
                    log::warn!(
                        "Cannot keep the 3x3 block around {:?} clear of {} mines, only the start cell stays safe",
                        origin,
                        mine_count
                    );
                    SafeZone::Cell(origin)
                } else {
                    SafeZone::Block(origin)
                }
            }
        };

        let (cols, rows) = board.size();
        let mut taken: Array2<bool> = Array2::default([usize::from(rows), usize::from(cols)]);
        let mut sites = Vec::with_capacity(mine_count.into());
        let mut draws: u32 = 0;

        while sites.len() < usize::from(mine_count) {
            let y = self.rng.random_range(0..rows);
            let x = self.rng.random_range(0..cols);
            let coords = (x, y);
            draws += 1;

            if taken[coords.to_nd_index()] || safe_zone.excludes(coords) {
                continue;
            }
            taken[coords.to_nd_index()] = true;
            sites.push(coords);
        }

        board.lay_mines(&sites);
        log::debug!(
            "Generated {}x{} board with {} mines after {} draws, safe zone: {:?}",
            cols,
            rows,
            mine_count,
            draws,
            safe_zone
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(board: &Board, mine_count: CellCount) {
        assert_eq!(board.mine_positions().count(), usize::from(mine_count));
        assert_eq!(board.mines_total(), mine_count);
        for (coords, cell) in board.iter_cells() {
            if let Some(count) = cell.count() {
                let expected = board
                    .iter_neighbors(coords)
                    .filter(|&pos| board[pos].is_mine())
                    .count();
                assert_eq!(usize::from(count), expected, "count mismatch at {coords:?}");
            }
        }
    }

    #[test]
    fn places_exact_mine_count_with_consistent_counts() {
        for seed in 0..32 {
            let mut board = Board::new(16, 30);
            generate(&mut board, 99, None, seed).unwrap();
            assert_consistent(&board, 99);
        }
    }

    #[test]
    fn beginner_first_click_block_is_clear() {
        for seed in 0..64 {
            let mut board = Board::new(9, 9);
            generate(&mut board, 10, Some((4, 4)), seed).unwrap();

            assert_consistent(&board, 10);
            for x in 3..=5 {
                for y in 3..=5 {
                    assert!(!board[(x, y)].is_mine(), "mine at {:?} with seed {seed}", (x, y));
                }
            }
            let center = board[(4, 4)].count();
            assert!(matches!(center, Some(count) if count <= 8));
        }
    }

    #[test]
    fn corner_origin_clears_clipped_block() {
        let mut board = Board::new(4, 4);
        generate(&mut board, 12, Some((0, 0)), 7).unwrap();

        assert_consistent(&board, 12);
        assert!(!board[(0, 0)].is_mine());
        assert!(!board[(1, 0)].is_mine());
        assert!(!board[(0, 1)].is_mine());
        assert!(!board[(1, 1)].is_mine());
        assert_eq!(board[(0, 0)].count(), Some(0));
    }

    #[test]
    fn crowded_board_keeps_only_origin_safe() {
        let mut board = Board::new(3, 3);
        generate(&mut board, 8, Some((1, 1)), 3).unwrap();

        assert_consistent(&board, 8);
        assert_eq!(board[(1, 1)].count(), Some(8));
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let mut a = Board::new(16, 16);
        let mut b = Board::new(16, 16);
        generate(&mut a, 40, Some((2, 3)), 42).unwrap();
        generate(&mut b, 40, Some((2, 3)), 42).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn zero_mines_is_allowed() {
        let mut board = Board::new(2, 2);
        generate(&mut board, 0, None, 1).unwrap();

        assert!(board.is_generated());
        assert!(board.iter_cells().all(|(_, cell)| cell.is_zero()));
    }

    #[test]
    fn rejects_too_many_mines() {
        let mut board = Board::new(3, 3);

        assert_eq!(
            generate(&mut board, 9, None, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 9,
                cells: 9
            }))
        );
        assert!(!board.is_generated());
    }

    #[test]
    fn rejects_empty_board() {
        let mut board = Board::new(0, 5);

        assert_eq!(
            generate(&mut board, 0, None, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
    }

    #[test]
    fn rejects_second_generation() {
        let mut board = Board::new(5, 5);
        generate(&mut board, 3, None, 0).unwrap();

        assert_eq!(
            generate(&mut board, 3, None, 1),
            Err(GameError::InvalidConfiguration(ConfigIssue::AlreadyGenerated))
        );
    }

    #[test]
    fn rejects_origin_outside_board() {
        let mut board = Board::new(5, 5);

        assert_eq!(
            generate(&mut board, 3, Some((5, 0)), 0),
            Err(GameError::OutOfBounds {
                coords: (5, 0),
                size: (5, 5)
            })
        );
    }
}
