//! Pivot CLI: the `pivot` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            values,
            input,
            all,
            json,
        } => commands::find::run(values, input, all, json),

        Commands::Check {
            index,
            values,
            input,
            json,
        } => commands::check::run(index, values, input, json),
    }
}
