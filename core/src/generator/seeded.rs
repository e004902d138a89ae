use super::*;

/// Uniform random layout reproducible from the config seed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SeededBoardGenerator;

impl BoardGenerator for SeededBoardGenerator {
    fn generate(self, config: &BoardConfig) -> Result<Grid> {
        log::debug!(
            "Creating {}x{} board with {} mines",
            config.width,
            config.height,
            config.mines
        );

        let mut grid = Grid::new(config.width, config.height);

        if config.mines != 0 {
            grid.place_mines(config.mines, config.seed)?;
            grid.compute_adjacency();
        }

        Ok(grid)
    }
}
