/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Seed fixing the pseudo-random mine layout, only positive values are accepted.
pub type Seed = i64;

/// Number of cells on a `width` by `height` board.
pub const fn area(width: Coord, height: Coord) -> CellCount {
    width as CellCount * height as CellCount
}
