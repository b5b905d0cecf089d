//! Command-line interface for tictac.

use crate::settings::{Overrides, ThinkDelay};
use clap::Parser;
use std::path::PathBuf;
use tictac_core::FirstMover;

/// Tic-tac-toe on an N×N board, against a friend or a random computer.
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (N for an N×N board) [default: 3]
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Who moves first: player, computer or random [default: player]
    #[arg(short, long)]
    pub first: Option<FirstMover>,

    /// Two humans share the keyboard instead of playing the computer
    #[arg(short, long, overrides_with = "no_multi")]
    pub multi: bool,

    /// Play the computer even if the settings file enables multiplayer
    #[arg(long, overrides_with = "multi")]
    pub no_multi: bool,

    /// TOML settings file; flags given here take precedence over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Computer thinking pause in milliseconds, as MIN-MAX or a fixed value [default: 1000-2000]
    #[arg(long, value_name = "MIN-MAX")]
    pub think_ms: Option<ThinkDelay>,

    /// Draw X and O instead of block glyphs
    #[arg(long, overrides_with = "no_ascii")]
    pub ascii: bool,

    /// Draw block glyphs even if the settings file asks for ASCII
    #[arg(long, overrides_with = "ascii")]
    pub no_ascii: bool,

    /// Where to write logs (filter with RUST_LOG)
    #[arg(long, default_value = "tictac.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// The values that override the settings file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            first: self.first,
            multi: switch(self.multi, self.no_multi),
            think: self.think_ms,
            ascii: switch(self.ascii, self.no_ascii),
        }
    }
}

/// `Some(true)` for `--x`, `Some(false)` for `--no-x`, `None` for neither.
/// Clap keeps only the last of a pair, so both are never set.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["tictac"]).unwrap();
        assert_eq!(cli.overrides(), Overrides::default());
        assert_eq!(cli.log_file, PathBuf::from("tictac.log"));
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "tictac", "-s", "4", "-f", "random", "-m", "--think-ms", "10-20", "--ascii",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.size, Some(4));
        assert_eq!(overrides.first, Some(FirstMover::Random));
        assert_eq!(overrides.multi, Some(true));
        assert_eq!(overrides.think, Some(ThinkDelay::new(10, 20).unwrap()));
        assert_eq!(overrides.ascii, Some(true));
    }

    #[test]
    fn test_negative_switches() {
        let cli = Cli::try_parse_from(["tictac", "--no-multi", "--no-ascii"]).unwrap();
        assert_eq!(cli.overrides().multi, Some(false));
        assert_eq!(cli.overrides().ascii, Some(false));
    }

    #[test]
    fn test_last_switch_wins() {
        let cli = Cli::try_parse_from(["tictac", "--multi", "--no-multi", "--no-ascii", "--ascii"])
            .unwrap();
        assert_eq!(cli.overrides().multi, Some(false));
        assert_eq!(cli.overrides().ascii, Some(true));
    }

    #[test]
    fn test_bad_first_mover_is_rejected() {
        assert!(Cli::try_parse_from(["tictac", "--first", "someone"]).is_err());
    }
}
