use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::*;

/// Rectangular board of `height` rows by `width` columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
}

/// Boards are stored row-major, so `(x, y)` lands at `[y, x]`.
fn nd_index((x, y): Coord2) -> [usize; 2] {
    [y.into(), x.into()]
}

impl Grid {
    /// Allocates a board of zero-valued cells.
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            cells: Array2::default(nd_index((width, height))),
        }
    }

    /// Builds a board with mines at the given coordinates and computes the counts around them.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(width, height);

        for &coords in mine_coords {
            grid.validate_coords(coords)?;
            grid[coords].is_mine = true;
        }

        grid.compute_adjacency();
        Ok(grid)
    }

    pub fn width(&self) -> Coord {
        self.cells.ncols().try_into().unwrap_or(Coord::MAX)
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn size(&self) -> Coord2 {
        (self.width(), self.height())
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.width(), self.height())
    }

    /// Whether the board is too small to play on, this includes an unallocated board.
    pub fn is_degenerate(&self) -> bool {
        self.width() < 2 || self.height() < 2
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.size();
        if coords.0 < width && coords.1 < height {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(nd_index(coords))
    }

    pub fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(nd_index(coords))
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Mine positions in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.indexed_cells()
            .filter(|(_, cell)| cell.is_mine)
            .map(|(coords, _)| coords)
            .collect()
    }

    /// All cells with their coordinates, row by row.
    pub fn indexed_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }

    /// Row-major copy of every cell.
    pub fn to_flat(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    /// The up-to-8 cells touching `(x, y)`, row by row.
    ///
    /// The 3x3 window around the cell is clipped to the board, so edge and
    /// corner cells get fewer neighbors and nothing wraps around.
    pub fn neighbors(&self, (x, y): Coord2) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        let columns = x.saturating_sub(1)..x.saturating_add(2).min(width);
        let rows = y.saturating_sub(1)..y.saturating_add(2).min(height);

        rows.flat_map(move |ny| columns.clone().map(move |nx| (nx, ny)))
            .filter(move |&pos| pos != (x, y))
    }

    /// Marks `mines` distinct cells as mines, drawn from a generator seeded with `seed`.
    ///
    /// Any previous layout is cleared first, call [`Grid::compute_adjacency`] afterwards.
    pub fn place_mines(&mut self, mines: CellCount, seed: Seed) -> Result<()> {
        log::debug!("Placing {} mines with seed {}", mines, seed);

        let state = match u64::try_from(seed) {
            Ok(state) if state > 0 => state,
            _ => {
                log::warn!("Rejected non-positive seed {}", seed);
                return Err(ConfigError::NonPositiveSeed(seed).into());
            }
        };

        if self.cells.is_empty() {
            log::warn!("Cannot place mines on an empty board");
            return Err(GameError::DegenerateBoard);
        }

        let cells = self.total_cells();
        if mines >= cells {
            log::warn!(
                "Too many mines, requested {} but board only has {} cells",
                mines,
                cells
            );
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }

        self.cells.fill(Cell::default());
        self.scatter_mines(mines, SmallRng::seed_from_u64(state));
        Ok(())
    }

    /// Draws positions uniformly from the whole board, redrawing on collision.
    fn scatter_mines(&mut self, mines: CellCount, mut rng: impl Rng) {
        let cells = self.total_cells();
        let width = CellCount::from(self.width());

        let mut positions = BTreeSet::new();
        while positions.len() < mines as usize {
            let position: CellCount = rng.random_range(0..cells);
            if !positions.insert(position) {
                log::trace!("Position {} already taken, drawing again", position);
            }
        }

        for position in positions {
            let coords = ((position % width) as Coord, (position / width) as Coord);
            self[coords].is_mine = true;
            log::trace!("Mine placed at {:?}", coords);
        }
    }

    /// Recomputes `mines_around` and `is_empty` from the current mine layout.
    pub fn compute_adjacency(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.mines_around = 0;
        }

        let mines = self.mine_coords();
        for &coords in &mines {
            for neighbor in self.neighbors(coords) {
                self[neighbor].mines_around += 1;
            }
        }

        for cell in self.cells.iter_mut() {
            cell.is_empty = !cell.is_mine && cell.mines_around == 0;
        }

        log::debug!("Computed adjacency for {} mines", mines.len());
    }

    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.revealed = true;
        }
    }

    /// Same layout with every cell hidden and unflagged.
    pub fn hidden_copy(&self) -> Self {
        Self {
            cells: self.cells.mapv(Cell::hidden),
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[nd_index(coords)]
    }
}
