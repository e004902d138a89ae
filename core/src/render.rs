use alloc::string::{String, ToString};
use core::fmt::{self, Display, Write};

use crate::*;

/// What a cell looks like when printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Flagged,
    Hidden,
    Mine,
    Empty,
    Number(u8),
}

impl Glyph {
    /// Flags win over everything, hidden cells never leak their content.
    pub const fn of(cell: &Cell) -> Self {
        if cell.flagged {
            Self::Flagged
        } else if !cell.revealed {
            Self::Hidden
        } else if cell.is_mine {
            Self::Mine
        } else if cell.is_empty {
            Self::Empty
        } else {
            Self::Number(cell.mines_around)
        }
    }
}

impl Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flagged => f.write_char('⚑'),
            Self::Hidden => f.write_char('■'),
            Self::Mine => f.write_char('X'),
            Self::Empty => f.write_char('□'),
            Self::Number(count) => write!(f, "{}", count),
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", Glyph::of(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One line per row, glyphs separated by spaces.
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}
