use crate::config::{ConfigError, Difficulty, GameConfig};
use clap::Parser;
use std::path::PathBuf;

/// Terminal minesweeper
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct MinegridArgs {
    /// difficulty tier
    #[arg(short, long, value_enum, default_value_t = Difficulty::Beginner)]
    pub difficulty: Difficulty,
    /// board rows, custom difficulty only
    #[arg(short = 'y', long, value_parser = clap::value_parser!(u16).range(1..=256))]
    pub rows: Option<u16>,
    /// board columns, custom difficulty only
    #[arg(short = 'x', long, value_parser = clap::value_parser!(u16).range(1..=256))]
    pub cols: Option<u16>,
    /// amount of mines, custom difficulty only
    #[arg(short, long)]
    pub mines: Option<u32>,
    /// append diagnostics to this file (stdout belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl MinegridArgs {
    /// Initial game configuration. Custom difficulty requires the full size
    /// triple; clap has already rejected non-numeric, negative and zero input.
    pub fn config(&self) -> Result<GameConfig, ConfigError> {
        match self.difficulty.preset() {
            Some(preset) => Ok(preset),
            None => self.custom_config().ok_or(ConfigError::MissingCustomSize),
        }
    }

    pub fn custom_config(&self) -> Option<GameConfig> {
        match (self.rows, self.cols, self.mines) {
            (Some(rows), Some(cols), Some(mines)) => Some(GameConfig::new(rows, cols, mines)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> MinegridArgs {
        let mut full = vec!["minegrid"];
        full.extend_from_slice(argv);
        MinegridArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn default_is_beginner() {
        let args = parse(&[]);
        assert_eq!(args.config(), Ok(GameConfig::new(9, 9, 10)));
    }

    #[test]
    fn custom_needs_the_full_triple() {
        let args = parse(&["--difficulty", "custom", "-y", "12", "-x", "20"]);
        assert_eq!(args.config(), Err(ConfigError::MissingCustomSize));

        let args = parse(&["--difficulty", "custom", "-y", "12", "-x", "20", "-m", "30"]);
        assert_eq!(args.config(), Ok(GameConfig::new(12, 20, 30)));
    }

    #[test]
    fn malformed_sizes_are_rejected_at_parse_time() {
        assert!(MinegridArgs::try_parse_from(["minegrid", "-y", "0"]).is_err());
        assert!(MinegridArgs::try_parse_from(["minegrid", "-x", "-3"]).is_err());
        assert!(MinegridArgs::try_parse_from(["minegrid", "-m", "lots"]).is_err());
    }
}
