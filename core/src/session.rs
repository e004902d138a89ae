use crate::*;

/// A game in progress: the fully revealed truth board and the board the player sees.
///
/// Both boards share one mine layout. Moves only touch the player board and
/// consult the truth board for mines. The session never ends itself, callers
/// stop on [`MoveOutcome::Lose`] or [`MoveOutcome::Win`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MineBoard {
    config: BoardConfig,
    truth: Grid,
    player: Grid,
    mines_remaining: CellCount,
}

impl MineBoard {
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;

        let mut truth = create_board(&config)?;
        let player = truth.hidden_copy();
        truth.reveal_all();

        log::debug!(
            "New session {}x{} with {} mines",
            config.width,
            config.height,
            config.mines
        );

        Ok(Self {
            config,
            truth,
            player,
            mines_remaining: config.mines,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn truth(&self) -> &Grid {
        &self.truth
    }

    pub fn player(&self) -> &Grid {
        &self.player
    }

    /// Mines not covered by a flag yet.
    pub fn mines_remaining(&self) -> CellCount {
        self.mines_remaining
    }

    /// Opens the cell at 1-indexed `(x, y)`.
    ///
    /// Only the target cell is revealed, empty neighbors stay hidden. Hitting
    /// a mine leaves the cell hidden.
    pub fn open(&mut self, x: i32, y: i32) -> Result<MoveOutcome> {
        let coords = self.player_coords(x, y)?;

        if self.truth[coords].is_mine {
            log::debug!("Opened mine at {:?}", coords);
            return Ok(MoveOutcome::Lose);
        }

        self.player[coords].revealed = true;
        log::trace!(
            "Opened cell at {:?}, mines around: {}",
            coords,
            self.player[coords].mines_around
        );
        Ok(MoveOutcome::Continue)
    }

    /// Flags the cell at 1-indexed `(x, y)`.
    ///
    /// Flagging with one mine or fewer remaining is treated as flagging the
    /// last mine and wins without touching the board.
    pub fn flag(&mut self, x: i32, y: i32) -> Result<MoveOutcome> {
        let coords = self.player_coords(x, y)?;

        if self.mines_remaining <= 1 {
            log::debug!("Last mine flagged at {:?}", coords);
            return Ok(MoveOutcome::Win);
        }

        self.player[coords].flagged = true;
        self.mines_remaining -= 1;
        log::trace!(
            "Flagged cell at {:?}, {} mines remaining",
            coords,
            self.mines_remaining
        );
        Ok(MoveOutcome::Continue)
    }

    /// Converts 1-indexed player input to board coordinates.
    fn player_coords(&self, x: i32, y: i32) -> Result<Coord2> {
        if self.player.is_degenerate() {
            log::warn!("Move on a degenerate board");
            return Err(GameError::DegenerateBoard);
        }

        let (width, height) = self.player.size();
        let to_index = |value: i32, max: Coord| {
            value
                .checked_sub(1)
                .and_then(|index| Coord::try_from(index).ok())
                .filter(|&index| index < max)
        };

        match (to_index(x, width), to_index(y, height)) {
            (Some(column), Some(row)) => Ok((column, row)),
            _ => {
                log::warn!(
                    "Move at ({}, {}) outside {}x{} board",
                    x,
                    y,
                    width,
                    height
                );
                Err(GameError::OutOfBounds { x, y })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(width: Coord, height: Coord, mines: &[Coord2]) -> MineBoard {
        let truth = Grid::from_mine_coords(width, height, mines).unwrap();
        let config = BoardConfig::new(width, height, truth.mine_count(), 1);
        let player = truth.hidden_copy();
        let mut truth = truth;
        truth.reveal_all();

        MineBoard {
            config,
            truth,
            player,
            mines_remaining: config.mines,
        }
    }

    #[test]
    fn new_session_hides_player_board() {
        let board = MineBoard::new(BoardConfig::new(3, 3, 4, 1)).unwrap();

        assert_eq!(board.mines_remaining(), 4);
        assert!(board.truth().indexed_cells().all(|(_, cell)| cell.revealed));
        assert!(board.player().indexed_cells().all(|(_, cell)| !cell.revealed));
        assert_eq!(board.player().mine_coords(), board.truth().mine_coords());
    }

    #[test]
    fn open_reveals_single_safe_cell() {
        let mut board = session(3, 3, &[(2, 2)]);

        assert_eq!(board.open(1, 1).unwrap(), MoveOutcome::Continue);

        assert!(board.player()[(0, 0)].revealed);
        // no cascade into the empty neighbors
        assert!(!board.player()[(1, 0)].revealed);
        assert!(!board.player()[(0, 1)].revealed);
    }

    #[test]
    fn open_mine_loses_without_revealing() {
        let mut board = session(3, 3, &[(0, 0), (2, 2)]);

        assert_eq!(board.open(3, 3).unwrap(), MoveOutcome::Lose);

        assert!(!board.player()[(2, 2)].revealed);
    }

    #[test]
    fn open_uses_x_as_column() {
        let mut board = session(4, 2, &[(3, 1)]);

        assert_eq!(board.open(4, 1).unwrap(), MoveOutcome::Continue);
        assert!(board.player()[(3, 0)].revealed);
        assert_eq!(board.open(4, 2).unwrap(), MoveOutcome::Lose);
    }

    #[test]
    fn open_outside_board_fails() {
        let mut board = MineBoard::new(BoardConfig::new(3, 3, 4, 1)).unwrap();

        assert_eq!(
            board.open(100, 100),
            Err(GameError::OutOfBounds { x: 100, y: 100 })
        );
        assert_eq!(
            board.open(-100, -100),
            Err(GameError::OutOfBounds { x: -100, y: -100 })
        );
        assert_eq!(board.open(0, 1), Err(GameError::OutOfBounds { x: 0, y: 1 }));
        assert_eq!(board.open(1, 4), Err(GameError::OutOfBounds { x: 1, y: 4 }));
        assert_eq!(
            board.open(i32::MIN, 1),
            Err(GameError::OutOfBounds { x: i32::MIN, y: 1 })
        );
        assert_eq!(
            board.open(1, i32::MAX),
            Err(GameError::OutOfBounds { x: 1, y: i32::MAX })
        );
    }

    #[test]
    fn truth_and_player_boards_share_size() {
        for config in [
            BoardConfig::new(2, 2, 1, 1),
            BoardConfig::new(7, 3, 5, 2),
            BoardConfig::expert(3),
        ] {
            let mut board = MineBoard::new(config).unwrap();
            let (width, height) = board.player().size();

            assert_eq!(board.truth().size(), (width, height));
            assert_eq!(board.player().size(), (config.width, config.height));
            // the far corner is reachable on both boards
            assert!(board.open(i32::from(width), i32::from(height)).is_ok());
        }
    }

    #[test]
    fn moves_on_empty_session_fail() {
        let mut board = MineBoard::default();

        assert_eq!(board.open(1, 1), Err(GameError::DegenerateBoard));
        assert_eq!(board.flag(1, 1), Err(GameError::DegenerateBoard));
    }

    #[test]
    fn flag_marks_cell_and_counts_down() {
        let mut board = session(3, 3, &[(0, 0), (1, 1), (2, 2)]);

        assert_eq!(board.flag(1, 1).unwrap(), MoveOutcome::Continue);

        assert!(board.player()[(0, 0)].flagged);
        assert_eq!(board.mines_remaining(), 2);
    }

    #[test]
    fn flag_wins_on_last_mine() {
        let mut board = session(3, 3, &[(0, 0), (1, 1), (2, 2)]);

        assert_eq!(board.flag(1, 1).unwrap(), MoveOutcome::Continue);
        assert_eq!(board.flag(2, 2).unwrap(), MoveOutcome::Continue);
        assert_eq!(board.mines_remaining(), 1);

        let before = board.clone();
        assert_eq!(board.flag(3, 3).unwrap(), MoveOutcome::Win);
        assert_eq!(board, before);
        assert!(!board.player()[(2, 2)].flagged);
    }

    #[test]
    fn flag_outside_board_fails() {
        let mut board = session(3, 3, &[(0, 0), (2, 2)]);

        assert_eq!(board.flag(4, 1), Err(GameError::OutOfBounds { x: 4, y: 1 }));
        assert_eq!(board.mines_remaining(), 2);
    }

    #[test]
    fn invalid_config_fails_construction() {
        assert_eq!(
            MineBoard::new(BoardConfig::new(3, 3, 9, 1)),
            Err(ConfigError::TooManyMines { mines: 9, cells: 9 }.into())
        );
        assert_eq!(
            MineBoard::new(BoardConfig::new(3, 3, 2, 0)),
            Err(ConfigError::NonPositiveSeed(0).into())
        );
        assert_eq!(
            MineBoard::new(BoardConfig::new(3, 1, 1, 1)),
            Err(ConfigError::InvalidHeight(1).into())
        );
    }
}
