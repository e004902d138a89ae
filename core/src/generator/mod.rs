use crate::*;
pub use seeded::*;

mod seeded;

pub trait BoardGenerator {
    fn generate(self, config: &BoardConfig) -> Result<Grid>;
}

/// Builds a fully computed board for `config` with the seeded generator.
pub fn create_board(config: &BoardConfig) -> Result<Grid> {
    SeededBoardGenerator.generate(config)
}
