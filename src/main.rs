use bundle_delta::cmd::{self, CompareOptions};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Bundle size comparison for CI
///
/// bundle-delta compares the asset lists of two builds, pairs assets across
/// content-hash renames and reports what grew, shrank, appeared or vanished.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two bundle snapshots
    Compare {
        /// Base snapshot (JSON array of assets)
        base: PathBuf,

        /// Current snapshot (JSON array of assets)
        current: PathBuf,

        /// Report title, also used for the comment marker
        #[arg(short, long)]
        title: Option<String>,

        /// Write the markdown report to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,

        /// Config file to use instead of .bundle-delta.toml
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Fail when total parsed size grows by more than this percentage
        #[arg(long, value_name = "PERCENT")]
        max_increase: Option<f64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match cli.command {
        Some(Commands::Compare {
            base,
            current,
            title,
            output,
            json,
            config,
            max_increase,
        }) => cmd::cmd_compare(&CompareOptions {
            base,
            current,
            title,
            output,
            json,
            config,
            max_increase,
        }),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-delta v{}", env!("CARGO_PKG_VERSION"));
            println!("Bundle size comparison for CI\n");
            println!("Usage: bundle-delta <COMMAND>\n");
            println!("Commands:");
            println!("  compare      Compare two bundle snapshots");
            println!("  completions  Generate shell completions");
            println!("\nRun 'bundle-delta <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_delta::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
