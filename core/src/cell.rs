/// State of a single board position.
///
/// `is_mine`, `mines_around` and `is_empty` are fixed once the board is
/// generated, `revealed` and `flagged` only change on the player board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_mine: bool,
    /// Mines among the up-to-8 neighbors.
    pub mines_around: u8,
    /// Neither a mine nor next to one.
    pub is_empty: bool,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    /// Copy of this cell with the player-facing state cleared.
    pub const fn hidden(self) -> Self {
        Self {
            revealed: false,
            flagged: false,
            ..self
        }
    }

    pub const fn is_hidden(self) -> bool {
        !self.revealed
    }
}
