use clap::ValueEnum;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("custom difficulty needs --rows, --cols and --mines")]
    MissingCustomSize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    /// Board size for the fixed tiers; `Custom` has none.
    pub const fn preset(self) -> Option<GameConfig> {
        match self {
            Self::Beginner => Some(GameConfig::new(9, 9, 10)),
            Self::Intermediate => Some(GameConfig::new(16, 16, 40)),
            Self::Expert => Some(GameConfig::new(16, 30, 99)),
            Self::Custom => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub mines: u32,
}

impl GameConfig {
    pub const fn new(rows: u16, cols: u16, mines: u32) -> Self {
        Self { rows, cols, mines }
    }

    pub const fn total_cells(&self) -> u32 {
        self.rows as u32 * self.cols as u32
    }

    /// Enforces `mines < rows * cols`. Too many mines get clamped to 80% of
    /// the grid and the clamped count is returned so the caller can tell the
    /// player. Board generation relies on this bound to terminate.
    pub fn normalize(mut self) -> (Self, Option<u32>) {
        let total = self.total_cells();
        if self.mines < total {
            return (self, None);
        }
        let clamped = total * 8 / 10;
        log::warn!(
            "{} mines do not fit a {}x{} grid, clamping to {}",
            self.mines,
            self.rows,
            self.cols,
            clamped
        );
        self.mines = clamped;
        (self, Some(clamped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_sizes() {
        assert_eq!(
            Difficulty::Beginner.preset(),
            Some(GameConfig::new(9, 9, 10))
        );
        assert_eq!(
            Difficulty::Intermediate.preset(),
            Some(GameConfig::new(16, 16, 40))
        );
        assert_eq!(Difficulty::Expert.preset(), Some(GameConfig::new(16, 30, 99)));
        assert_eq!(Difficulty::Custom.preset(), None);
    }

    #[test]
    fn too_many_mines_clamp_to_80_percent() {
        let (config, clamped) = GameConfig::new(9, 9, 85).normalize();
        assert_eq!(config.mines, 64);
        assert_eq!(clamped, Some(64));
    }

    #[test]
    fn exact_fit_still_clamps() {
        // mines == cells leaves nothing to reveal, so it counts as too many
        let (config, clamped) = GameConfig::new(4, 4, 16).normalize();
        assert_eq!(config.mines, 12);
        assert_eq!(clamped, Some(12));
    }

    #[test]
    fn valid_config_is_untouched() {
        let (config, clamped) = GameConfig::new(16, 30, 99).normalize();
        assert_eq!(config, GameConfig::new(16, 30, 99));
        assert_eq!(clamped, None);
    }
}
