use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use sweeper_core::{CellCount, Coord, GameConfig};

/// Board settings as read from a TOML file, every key optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Settings {
    pub(crate) fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Could not parse settings")
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Values from `overrides` win over ours, missing ones fall back to the defaults.
    pub(crate) fn merge(self, overrides: Settings) -> Result<GameConfig> {
        let config = GameConfig::new_unchecked(
            overrides
                .rows
                .or(self.rows)
                .unwrap_or(GameConfig::DEFAULT_ROWS),
            overrides
                .cols
                .or(self.cols)
                .unwrap_or(GameConfig::DEFAULT_COLS),
            overrides
                .mines
                .or(self.mines)
                .unwrap_or(GameConfig::DEFAULT_MINES),
        );
        Ok(config.validate()?)
    }
}
