use clap::Parser;

use crate::config;

/// Animated pool of cells cycling through birth, growth, maturity and decay.
#[derive(Debug, Parser)]
#[command(name = "cellcycle", version)]
pub struct Cli {
    /// Number of cells spawned at startup
    #[arg(short, long, default_value_t = config::INITIAL_CELL_COUNT)]
    pub cells: usize,

    /// Seed for every random draw (positions, colors, lifespans, jitter)
    #[arg(short, long, default_value_t = config::DEFAULT_SEED)]
    pub seed: u64,

    /// Log every lifecycle event
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON run summary to stdout when the window closes
    #[arg(long)]
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_match_config() {
        let cli = Cli::try_parse_from(["cellcycle"]).unwrap();
        assert_eq!(cli.cells, config::INITIAL_CELL_COUNT);
        assert_eq!(cli.seed, config::DEFAULT_SEED);
        assert!(!cli.verbose);
        assert!(!cli.summary);
    }

    #[test]
    fn parses_counts_and_flags() {
        let cli = Cli::try_parse_from(["cellcycle", "--cells", "12", "-s", "7", "-v", "--summary"])
            .unwrap();
        assert_eq!(cli.cells, 12);
        assert_eq!(cli.seed, 7);
        assert!(cli.verbose);
        assert!(cli.summary);
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert!(Cli::try_parse_from(["cellcycle", "--cells", "many"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }
}
