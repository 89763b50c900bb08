//! Completions command implementation
//!
//! Handles the `bundle-delta completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::{value_parser, Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io::Write;

const BIN_NAME: &str = "bundle-delta";

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-delta completions bash > /etc/bash_completion.d/bundle-delta
///
/// # Zsh
/// bundle-delta completions zsh > ~/.zfunc/_bundle-delta
///
/// # Fish
/// bundle-delta completions fish > ~/.config/fish/completions/bundle-delta.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = completion_command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

// Cli lives in main.rs, so the command tree is rebuilt here
fn completion_command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle size comparison for CI")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare two bundle snapshots")
                .arg(Arg::new("base").required(true).value_name("BASE"))
                .arg(Arg::new("current").required(true).value_name("CURRENT"))
                .arg(Arg::new("title").long("title").short('t').value_name("TITLE"))
                .arg(Arg::new("output").long("output").short('o').value_name("FILE"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("config").long("config").value_name("FILE"))
                .arg(
                    Arg::new("max-increase")
                        .long("max-increase")
                        .value_name("PERCENT"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}
