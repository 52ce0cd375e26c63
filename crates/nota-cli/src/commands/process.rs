//! Process command - extract and name a single PDF.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use serde_json::json;
use tracing::debug;

use nota_core::namer::Namer;
use nota_core::pdf::PdfExtractor;
use nota_core::{rename_source, renamed_path};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Directory receiving the text file (default: configured output directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Keep the source PDF under its original name
    #[arg(long)]
    no_rename: bool,

    /// Show the derived name without writing or renaming anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Progress lines for a terminal
    Text,
    /// One JSON object describing the result
    Json,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(dir) = &args.output_dir {
        config.paths.output_dir = dir.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let namer = Namer::from_config(&config);
    let mut extractor = PdfExtractor::new();
    let prepared = namer
        .prepare(&args.input, &mut extractor)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;
    debug!("Derived fields: {:?}", prepared.fields);

    let rename = config.batch.rename_source && !args.no_rename;
    let text_only = matches!(args.format, OutputFormat::Text);

    let renamed_to = if args.dry_run {
        rename.then(|| renamed_path(&args.input, &prepared.fields))
    } else {
        if config.batch.create_output_dir {
            fs::create_dir_all(namer.output_dir())?;
        }

        if text_only {
            println!("Saving: {}", prepared.output_path.display());
        }
        namer.write(&prepared)?;
        if text_only {
            println!("{} Done", style("✓").green());
        }

        if rename {
            Some(rename_source(&args.input, &prepared.fields)?)
        } else {
            None
        }
    };

    match args.format {
        OutputFormat::Text => {
            if args.dry_run {
                println!("{}", prepared.file_name());
            }
            if let Some(target) = &renamed_to {
                println!(
                    "{} Renamed to {}",
                    style("ℹ").blue(),
                    target.display()
                );
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "source": args.input,
                "text_file": prepared.output_path,
                "renamed_to": renamed_to,
                "fields": prepared.fields,
                "dry_run": args.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
