//! Batch command - analyze multiple text files into one CSV.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use ablage_core::{DocumentAnalyzer, TextAnalyzer};

use super::analyze::{csv_record, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input text files (e.g. "extracted/*.txt")
    #[arg(required = true)]
    pattern: String,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Continue after individual file failures
    #[arg(long)]
    keep_going: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    info!("analyzing {} files", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let analyzer = TextAnalyzer::with_config(&config);

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["datei", "typ", "absender", "datum", "betrag", "kurzfassung"])?;

    let mut failures = 0usize;

    for file in &files {
        pb.set_message(file.display().to_string());

        match fs::read_to_string(file).map_err(anyhow::Error::from).and_then(|text| {
            analyzer.analyze(&text).map_err(anyhow::Error::from)
        }) {
            Ok(result) => {
                let record = csv_record(&result);
                let mut row = vec![file.display().to_string()];
                row.extend(record);
                wtr.write_record(&row)?;
            }
            Err(e) if args.keep_going => {
                warn!("skipping {}: {}", file.display(), e);
                failures += 1;
            }
            Err(e) => {
                pb.abandon();
                return Err(e.context(format!("failed on {}", file.display())));
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let data = String::from_utf8(wtr.into_inner()?)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
        println!(
            "{} {} files analyzed, output written to {}",
            style("✓").green(),
            files.len() - failures,
            output_path.display()
        );
    } else {
        println!("{}", data);
    }

    if failures > 0 {
        eprintln!("{} {} files skipped", style("!").yellow(), failures);
    }

    Ok(())
}
