use alloc::vec;

use crate::*;

impl Board {
    /// Reveals a single hidden cell. Flagged and already revealed cells are left untouched.
    ///
    /// A [`RevealOutcome::Empty`] result is not expanded here, follow up with
    /// [`Board::expand_zeros`] or use [`Board::reveal_and_expand`].
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let cell = self.at_mut(coords)?;
        if !cell.is_hidden() {
            return Ok(RevealOutcome::AlreadyRevealedOrFlagged);
        }

        cell.set_state(CellState::Revealed);
        let outcome = match cell.value() {
            CellValue::Mine => RevealOutcome::Mine,
            CellValue::Count(0) => RevealOutcome::Empty,
            CellValue::Count(count) => RevealOutcome::Numbered(count),
        };
        log::debug!("Revealed cell at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Flags a hidden cell or unflags a flagged one.
    ///
    /// Returns the change to apply to a remaining-mines counter: `-1` when a flag was placed,
    /// `1` when one was removed and `0` for revealed cells. The board's own
    /// [`mines_remaining`](Board::mines_remaining) is updated by the same amount.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagDelta> {
        let cell = self.at_mut(coords)?;
        let delta = match cell.state() {
            CellState::Hidden => {
                cell.set_state(CellState::Flagged);
                -1
            }
            CellState::Flagged => {
                cell.set_state(CellState::Hidden);
                1
            }
            CellState::Revealed => 0,
        };
        self.adjust_mines_remaining(delta);
        Ok(delta)
    }

    /// Flood-fills the zero region around `origin`, revealing it and its numbered border.
    ///
    /// Only runs when `origin` holds a zero count and is not flagged. Flagged cells are never
    /// revealed. Returns the number of newly revealed cells.
    pub fn expand_zeros(&mut self, origin: Coord2) -> Result<CellCount> {
        let origin_cell = self.at_mut(origin)?;
        if origin_cell.is_flagged() || !origin_cell.is_zero() {
            return Ok(0);
        }

        let mut opened: CellCount = 0;
        if origin_cell.is_hidden() {
            origin_cell.set_state(CellState::Revealed);
            opened += 1;
        }

        // cells are pushed only on their hidden -> revealed transition, so at most once
        let mut to_visit = vec![origin];
        log::trace!("Starting flood-fill from {:?}", origin);

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.iter_neighbors(visit_coords) {
                let neighbor = self.at_mut(pos)?;
                if !neighbor.is_hidden() {
                    continue;
                }

                neighbor.set_state(CellState::Revealed);
                opened += 1;
                log::trace!("Flood opened cell at {:?}: {:?}", pos, neighbor.value());

                if neighbor.is_zero() {
                    to_visit.push(pos);
                }
            }
        }

        log::debug!("Flood-fill from {:?} opened {} cells", origin, opened);
        Ok(opened)
    }

    /// [`Board::reveal`] followed by [`Board::expand_zeros`] when the cell turns out empty.
    pub fn reveal_and_expand(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let outcome = self.reveal(coords)?;
        if outcome == RevealOutcome::Empty {
            self.expand_zeros(coords)?;
        }
        Ok(outcome)
    }
}
