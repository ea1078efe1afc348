use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::table::selection::SelectionMode;

#[derive(Parser)]
#[command(name = "tg", about = concat!("[#] taskgrid v", env!("CARGO_PKG_VERSION"), " - an editable task table for your terminal"), version)]
pub struct Cli {
    /// Config file to load (defaults to taskgrid.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rows to seed (overrides config)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Row selection behavior (overrides config)
    #[arg(long, value_enum)]
    pub selection: Option<SelectionArg>,

    /// Fix the date randomizer for reproducible demos
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    Single,
    Multiple,
}

impl From<SelectionArg> for SelectionMode {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Single => SelectionMode::Single,
            SelectionArg::Multiple => SelectionMode::Multiple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from(["tg", "--rows", "5", "--selection", "single", "--seed", "42"]);
        assert_eq!(cli.rows, Some(5));
        assert_eq!(cli.selection, Some(SelectionArg::Single));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["tg"]);
        assert!(cli.rows.is_none());
        assert!(cli.selection.is_none());
        assert!(cli.seed.is_none());
    }
}
