//! Default command - convert an export file

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cli::table::preview_table;
use crate::cli::GlobalOpts;
use crate::convert::convert;
use crate::core::{Config, FormatChoice};

#[derive(clap::Args, Debug, Default)]
pub struct ConvertArgs {
    /// CSV export to convert
    pub input: Option<PathBuf>,

    /// Source layout (default: detect from the header line)
    #[arg(long, value_enum)]
    pub format: Option<FormatChoice>,

    /// Write to this path instead of <name>_Testomatio.<ext>
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Convert and preview without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: ConvertArgs, global: &GlobalOpts) -> Result<()> {
    let input = args
        .input
        .ok_or_else(|| miette::miette!("Input file required. Usage: tcmconv <input-file.csv>"))?;

    if !input.exists() {
        return Err(miette::miette!("File not found: {}", input.display()));
    }

    let config = Config::load();
    let text = fs::read_to_string(&input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", input.display()))?;

    let format = args.format.unwrap_or_else(|| config.format()).resolve(&text);
    let conversion = convert(&text, format)?;

    let output = args
        .output
        .unwrap_or_else(|| config.output_path_for(&input));

    info!(
        input = %input.display(),
        output = %output.display(),
        %format,
        cases = conversion.records.len(),
        "conversion finished"
    );

    if args.dry_run {
        if !global.quiet {
            println!("{}", preview_table(&conversion));
            println!(
                "{} {} test cases from {} rows ({} format)",
                style("○").dim(),
                style(conversion.records.len()).cyan(),
                conversion.rows_read,
                format
            );
            println!(
                "{}",
                style(format!("Dry run complete. {} was not written.", output.display())).yellow()
            );
        }
        return Ok(());
    }

    // Render fully before touching the filesystem so failures leave no file
    let bytes = conversion.to_csv()?;
    fs::write(&output, bytes)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    if !global.quiet {
        println!(
            "{} {} test cases processed ({} format)",
            style("✓").green(),
            style(conversion.records.len()).cyan(),
            format
        );
        println!(
            "Conversion complete. Output written to {}",
            style(output.display()).yellow()
        );
    }

    Ok(())
}
