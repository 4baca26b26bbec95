use serde::{Deserialize, Serialize};

/// What lies under a cell: a mine, or the number of mines around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Count(u8),
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible state of a cell. A cell is never both flagged and revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: CellValue,
    state: CellState,
}

impl Cell {
    pub const fn new(value: CellValue, state: CellState) -> Self {
        Self { value, state }
    }

    pub const fn value(self) -> CellValue {
        self.value
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.value, CellValue::Mine)
    }

    /// Adjacent mine count, `None` for mines.
    pub const fn count(self) -> Option<u8> {
        match self.value {
            CellValue::Mine => None,
            CellValue::Count(count) => Some(count),
        }
    }

    pub const fn is_zero(self) -> bool {
        matches!(self.value, CellValue::Count(0))
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.state, CellState::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.state, CellState::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.state, CellState::Revealed)
    }

    pub(crate) fn set_value(&mut self, value: CellValue) {
        self.value = value;
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Bumps the neighbor count; mines keep their value.
    pub(crate) fn increment(&mut self) {
        if let CellValue::Count(count) = &mut self.value {
            *count += 1;
        }
    }
}
