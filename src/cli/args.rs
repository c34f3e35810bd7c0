//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, convert::ConvertArgs, template::TemplateArgs,
};

#[derive(Parser)]
#[command(name = "tcmconv")]
#[command(author, version, about = "Convert test case exports into a Testomat.io import CSV")]
#[command(long_about = "Convert test case exports into a Testomat.io import CSV.\n\nReads a CSV export from a test-management tool (one row per case, or one row per step grouped by case) and writes <name>_Testomatio.<ext> next to it.")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Log filter implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an example input file for a source format
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
