//! Batch command - process every PDF of a directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use nota_core::models::invoice::InvoiceFields;
use nota_core::namer::Namer;
use nota_core::pdf::PdfExtractor;
use nota_core::{discover_pdfs, rename_source, renamed_path};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing the PDFs (default: <exe dir>/pdf)
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving the text files (default: <exe dir>/txt)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Keep the source PDFs under their original names
    #[arg(long)]
    no_rename: bool,

    /// Show the derived names without writing or renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Write a CSV summary of the run to this file
    #[arg(long)]
    summary: Option<PathBuf>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    fields: Option<InvoiceFields>,
    text_file: Option<PathBuf>,
    renamed_to: Option<PathBuf>,
    error: Option<String>,
    processing_time_ms: u64,
}

/// What happened to one file that was processed successfully.
struct Processed {
    fields: InvoiceFields,
    text_file: PathBuf,
    renamed_to: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(dir) = &args.input_dir {
        config.paths.input_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.paths.output_dir = dir.clone();
    }
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;
    let rename = config.batch.rename_source && !args.no_rename;

    let files = discover_pdfs(&config.paths.input_dir).with_context(|| {
        format!("Failed to list {}", config.paths.input_dir.display())
    })?;

    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            config.paths.input_dir.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if config.batch.create_output_dir && !args.dry_run {
        fs::create_dir_all(&config.paths.output_dir).with_context(|| {
            format!("Failed to create {}", config.paths.output_dir.display())
        })?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let namer = Namer::from_config(&config);
    let mut results = Vec::with_capacity(files.len());
    let mut abort = None;

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &namer, &pb, rename, args.dry_run);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(processed) => {
                results.push(ProcessResult {
                    path,
                    fields: Some(processed.fields),
                    text_file: Some(processed.text_file),
                    renamed_to: processed.renamed_to,
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = format!("{:#}", e);
                results.push(ProcessResult {
                    path: path.clone(),
                    fields: None,
                    text_file: None,
                    renamed_to: None,
                    error: Some(error_msg.clone()),
                    processing_time_ms,
                });

                if continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    abort = Some(e.context(format!("Failed to process {}", path.display())));
                    break;
                }
            }
        }

        pb.inc(1);
    }

    if abort.is_some() {
        pb.abandon();
    } else {
        pb.finish_and_clear();
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if let Some(e) = abort {
        return Err(e);
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let successful = results.len() - failed.len();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    namer: &Namer,
    pb: &ProgressBar,
    rename: bool,
    dry_run: bool,
) -> anyhow::Result<Processed> {
    let mut extractor = PdfExtractor::new();
    let prepared = namer.prepare(path, &mut extractor)?;

    if dry_run {
        pb.suspend(|| {
            println!("{} -> {}", path.display(), prepared.output_path.display())
        });
        let renamed_to = rename.then(|| renamed_path(path, &prepared.fields));
        return Ok(Processed {
            fields: prepared.fields,
            text_file: prepared.output_path,
            renamed_to,
        });
    }

    pb.suspend(|| println!("Saving: {}", prepared.output_path.display()));
    let text_file = namer.write(&prepared)?;
    pb.suspend(|| println!("{} Done", style("✓").green()));

    let renamed_to = if rename {
        Some(rename_source(path, &prepared.fields)?)
    } else {
        None
    };

    info!("Processed {}", path.display());

    Ok(Processed {
        fields: prepared.fields,
        text_file,
        renamed_to,
    })
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create summary {}", path.display()))?;

    wtr.write_record([
        "filename",
        "status",
        "client_code",
        "date",
        "invoice_number",
        "text_file",
        "renamed_to",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let display = |p: &Option<PathBuf>| {
            p.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
        };

        match &result.fields {
            Some(fields) => wtr.write_record([
                filename,
                "success",
                &fields.client_code,
                &fields.formatted_date,
                &fields.invoice_number,
                &display(&result.text_file),
                &display(&result.renamed_to),
                &result.processing_time_ms.to_string(),
                "",
            ])?,
            None => wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?,
        }
    }

    wtr.flush()?;
    Ok(())
}
