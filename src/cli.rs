//! CLI argument definitions.

use clap::Parser;

/// Argument parser for `task-bridge`.
///
/// Exactly three positional arguments, taken verbatim; there are no
/// options and no environment fallbacks for these values.
#[derive(Debug, Parser)]
#[command(
    name = "task-bridge",
    version,
    about = "Register a scheduled, periodically-pruned backup task"
)]
pub struct Cli {
    /// Identifier for the backup task (letters, digits, '-', '_').
    pub name: String,
    /// Cron expression for when backups run, e.g. "0 2 * * *".
    pub schedule: String,
    /// Cron expression for when retention pruning runs, e.g. "0 3 * * 0".
    pub prune_schedule: String,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_three_positional_arguments() {
        let cli = Cli::parse_from(["task-bridge", "nightly-db", "0 2 * * *", "0 3 * * 0"]);
        assert_eq!(cli.name, "nightly-db");
        assert_eq!(cli.schedule, "0 2 * * *");
        assert_eq!(cli.prune_schedule, "0 3 * * 0");
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["task-bridge", "nightly-db"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_from([
            "task-bridge",
            "nightly-db",
            "0 2 * * *",
            "0 3 * * 0",
            "extra"
        ])
        .is_err());
    }
}
