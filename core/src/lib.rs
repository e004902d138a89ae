#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod render;
mod session;
mod types;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub seed: Seed,
}

impl BoardConfig {
    /// Unvalidated config, see [`BoardConfig::validate`].
    pub const fn new(width: Coord, height: Coord, mines: CellCount, seed: Seed) -> Self {
        Self {
            width,
            height,
            mines,
            seed,
        }
    }

    pub const fn beginner(seed: Seed) -> Self {
        Self::new(9, 9, 10, seed)
    }

    pub const fn intermediate(seed: Seed) -> Self {
        Self::new(16, 16, 40, seed)
    }

    pub const fn expert(seed: Seed) -> Self {
        Self::new(30, 16, 99, seed)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.width, self.height)
    }

    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        let result = if self.width < 2 {
            Err(ConfigError::InvalidWidth(self.width))
        } else if self.height < 2 {
            Err(ConfigError::InvalidHeight(self.height))
        } else if self.mines == 0 {
            Err(ConfigError::NoMines)
        } else if self.mines >= self.total_cells() {
            Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells: self.total_cells(),
            })
        } else if self.seed <= 0 {
            Err(ConfigError::NonPositiveSeed(self.seed))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            log::warn!("Rejected board config {:?}: {}", self, err);
        }
        result
    }
}

/// Result of a player move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continue,
    Lose,
    Win,
}

impl MoveOutcome {
    /// Legacy numeric signal: `0` to continue, `1` on loss, `2` on win.
    pub const fn code(self) -> u8 {
        match self {
            Self::Continue => 0,
            Self::Lose => 1 << 0,
            Self::Win => 1 << 1,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lose | Self::Win)
    }
}
