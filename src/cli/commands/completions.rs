//! Shell completions for the converter and its subcommands
//!
//! ```bash
//! source <(tcmconv completions bash)
//! tcmconv completions zsh > "${fpath[1]}/_tcmconv"
//! tcmconv completions fish > ~/.config/fish/completions/tcmconv.fish
//! ```
//!
//! The scripts complete input flags such as `--format` with the values
//! `auto`, `flat` and `grouped`, and the `template` subcommand's format.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(args.shell, &mut stdout);
    stdout.flush().into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bash_covers_subcommands_and_flags() {
        let out = script(Shell::Bash);
        assert!(out.contains("tcmconv"));
        assert!(out.contains("template"));
        assert!(out.contains("--dry-run"));
        assert!(out.contains("--format"));
    }

    #[test]
    fn test_fish_offers_format_values() {
        let out = script(Shell::Fish);
        assert!(out.contains("-c tcmconv"));
        assert!(out.contains("grouped"));
    }
}
