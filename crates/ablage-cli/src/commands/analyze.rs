//! Analyze command - extract metadata from a single text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ablage_core::{AblageConfig, AnalysisResult, DocumentAnalyzer, TextAnalyzer};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input text file (extracted document text; `-` reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;

    info!("analyzing {}", args.input.display());

    let analyzer = TextAnalyzer::with_config(&config);
    let result = analyzer.analyze(&text)?;

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AblageConfig> {
    match config_path {
        Some(path) => Ok(AblageConfig::from_file(Path::new(path))?),
        None => Ok(AblageConfig::default()),
    }
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

pub fn format_result(result: &AnalysisResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&result.metadata)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => format_text(result),
    }
}

pub fn csv_record(result: &AnalysisResult) -> [String; 5] {
    let metadata = &result.metadata;
    [
        serde_json::to_value(metadata.doc_type)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default(),
        metadata.sender.clone().unwrap_or_default(),
        metadata.document_date.to_string(),
        metadata
            .amount
            .map(|a| a.to_string())
            .unwrap_or_default(),
        metadata.summary.clone(),
    ]
}

fn format_csv(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["typ", "absender", "datum", "betrag", "kurzfassung"])?;
    wtr.write_record(csv_record(result))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &AnalysisResult) -> anyhow::Result<String> {
    let metadata = &result.metadata;
    let mut output = String::new();

    output.push_str(&format!("Typ:         {:?}\n", metadata.doc_type));
    output.push_str(&format!("Datum:       {}\n", metadata.document_date));
    if let Some(sender) = &metadata.sender {
        output.push_str(&format!("Absender:    {}\n", sender));
    }
    if let Some(amount) = &metadata.amount {
        output.push_str(&format!("Betrag:      {}\n", amount));
    }
    output.push_str(&format!("Kurzfassung: {}\n", metadata.summary));

    Ok(output)
}
