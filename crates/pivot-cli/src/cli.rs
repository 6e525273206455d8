use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pivot",
    about = "Pivot: find the index whose left and right sums agree",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the lowest pivot index, or -1 when none exists
    Find {
        /// Sequence values (negative numbers allowed)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Read the sequence from a file instead (`-` for stdin)
        #[arg(long, short = 'i')]
        input: Option<String>,

        /// Report every balancing index, not just the first
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the left and right sums around one index
    Check {
        /// Index to inspect
        #[arg(long)]
        index: usize,

        /// Sequence values (negative numbers allowed)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Read the sequence from a file instead (`-` for stdin)
        #[arg(long, short = 'i')]
        input: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_values_parse_as_positionals() {
        let cli = Cli::try_parse_from(["pivot", "find", "2", "1", "-1"]).unwrap();
        match cli.command {
            Commands::Find { values, .. } => assert_eq!(values, vec![2, 1, -1]),
            Commands::Check { .. } => panic!("expected find"),
        }
    }

    #[test]
    fn check_requires_index() {
        assert!(Cli::try_parse_from(["pivot", "check", "1", "2"]).is_err());
    }
}
