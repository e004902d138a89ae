use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use mineboard_core::{BoardConfig, CellCount, Coord, Seed};
use serde::Deserialize;

use crate::seed::new_seed;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    fn config(self, seed: Seed) -> BoardConfig {
        use Preset::*;
        match self {
            Beginner => BoardConfig::beginner(seed),
            Intermediate => BoardConfig::intermediate(seed),
            Expert => BoardConfig::expert(seed),
        }
    }
}

/// Partial board settings, every field left out falls back to the layer below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardSettings {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<Seed>,
}

impl BoardSettings {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Could not parse {}", path.display()))
    }

    /// Values set in `other` win.
    pub fn overlay(self, other: BoardSettings) -> Self {
        Self {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            mines: other.mines.or(self.mines),
            seed: other.seed.or(self.seed),
        }
    }

    /// Fills the gaps from `preset`, or a 10x10 board with 10 mines, and a fresh seed.
    pub fn resolve(self, preset: Option<Preset>) -> BoardConfig {
        let seed = self.seed.unwrap_or_else(new_seed);
        let base = match preset {
            Some(preset) => preset.config(seed),
            None => BoardConfig::new(10, 10, 10, seed),
        };

        BoardConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            mines: self.mines.unwrap_or(base.mines),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_file() {
        let settings = BoardSettings::from_toml("width = 12\nmines = 20\n").unwrap();

        assert_eq!(
            settings,
            BoardSettings {
                width: Some(12),
                mines: Some(20),
                ..Default::default()
            }
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(BoardSettings::from_toml("depth = 3").is_err());
    }

    #[test]
    fn flags_override_file() {
        let file = BoardSettings {
            width: Some(12),
            height: Some(8),
            seed: Some(3),
            ..Default::default()
        };
        let flags = BoardSettings {
            width: Some(20),
            ..Default::default()
        };

        let config = file.overlay(flags).resolve(None);

        assert_eq!(config, BoardConfig::new(20, 8, 10, 3));
    }

    #[test]
    fn preset_fills_missing_values() {
        let settings = BoardSettings {
            mines: Some(50),
            seed: Some(9),
            ..Default::default()
        };

        assert_eq!(
            settings.resolve(Some(Preset::Expert)),
            BoardConfig::new(30, 16, 50, 9)
        );
    }

    #[test]
    fn missing_seed_is_generated() {
        let config = BoardSettings::default().resolve(Some(Preset::Beginner));

        assert!(config.seed > 0);
        assert_eq!(config.validate(), Ok(()));
    }
}
