//! `tcmconv template` - print an example input for a source format

use console::style;
use csv::WriterBuilder;
use miette::{IntoDiagnostic, Result};
use std::io;

use crate::core::{FormatChoice, SourceFormat};

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Source layout to generate (flat or grouped)
    #[arg(value_enum)]
    pub format: FormatChoice,
}

/// Example rows for a source format, header first
pub fn template_rows(format: SourceFormat) -> Vec<Vec<&'static str>> {
    match format {
        SourceFormat::FlatCase => vec![
            vec![
                "Case ID",
                "Case",
                "Folder",
                "Priority",
                "Tags",
                "Created by",
                "Pre-condition",
                "Description",
                "Expected",
                "Test Type",
            ],
            vec![
                "42",
                "Login with valid credentials",
                "Auth",
                "P1-High",
                "smoke,auth",
                "Jane Doe",
                "<p>User account exists</p>",
                "Open the login page<br>Submit valid credentials",
                "<ul><li>Dashboard is shown</li><li>No error banner</li></ul>",
                "Functional",
            ],
        ],
        SourceFormat::GroupedSteps => vec![
            vec![
                "Entity Key",
                "Test Case Summary",
                "Test Case Folder Path",
                "Test Case Priority",
                "Label(s)",
                "Created By",
                "Step Description",
                "Step Expected Outcome(Plain Text)",
            ],
            vec![
                "1001",
                "Checkout with saved card",
                "Shop/Checkout",
                "Critical",
                "smoke, payments",
                "Jane Doe [jane@example.com]",
                "Preconditions: cart contains one item",
                "",
            ],
            vec!["", "", "", "", "", "", "Click buy", "Order confirmed"],
        ],
    }
}

pub fn run(args: TemplateArgs) -> Result<()> {
    let format = match args.format {
        FormatChoice::Grouped => SourceFormat::GroupedSteps,
        FormatChoice::Flat | FormatChoice::Auto => SourceFormat::FlatCase,
    };

    // Output to stdout (can be redirected to file)
    let mut wtr = WriterBuilder::new().from_writer(io::stdout());
    for row in template_rows(format) {
        wtr.write_record(&row).into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;

    // Print usage hint to stderr so it doesn't interfere with redirected output
    eprintln!();
    eprintln!(
        "{} Template generated. Redirect to file: tcmconv template {} > cases.csv",
        style("→").blue(),
        format
    );

    Ok(())
}
