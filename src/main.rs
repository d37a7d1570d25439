//! Line-oriented surface for the report pipeline.
//!
//! A thin adapter: everything between "path in" and "text out" is
//! `ReportPipeline::process`. With a FILE argument it analyzes that
//! one report; without, it drops into a read-eval loop that keeps
//! accepting report paths until the user exits. Either way the saved
//! artifact is the shared header-plus-body format from `report`.

use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use labsight::config::{self, AnalyzerConfig};
use labsight::report;
use labsight::{GroqClient, ReportPipeline};

#[derive(Parser)]
#[command(name = "labsight", version)]
#[command(about = "Analyze a medical report (PDF or image) and explain it in plain language")]
struct Args {
    /// Report file to analyze (pdf, jpg, jpeg, png, tiff, bmp)
    file: Option<PathBuf>,

    /// Save the analysis to analysis_<filename>.txt in the current directory
    #[arg(short, long)]
    save: bool,
}

fn main() -> Result<()> {
    // Populate the environment from .env before reading configuration.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let args = Args::parse();

    // Credential problems are fatal before any file is accepted.
    let cfg = AnalyzerConfig::from_env()
        .context("set GROQ_API_KEY in your environment or .env file")?;
    let pipeline = ReportPipeline::new(Box::new(GroqClient::new(&cfg)));

    match args.file {
        Some(path) => analyze_one(&pipeline, &path, SaveMode::Flag(args.save)),
        None => run_loop(&pipeline),
    }
}

/// How the save decision is made after an analysis.
enum SaveMode {
    /// Decided up front by `--save`.
    Flag(bool),
    /// Ask on the terminal after showing the result.
    Ask,
}

fn run_loop(pipeline: &ReportPipeline) -> Result<()> {
    println!("{} — interactive mode. Enter a report path, or 'exit'.", config::APP_NAME);

    let stdin = io::stdin();
    loop {
        print!("\nreport> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        // Per-file errors never end the session.
        if let Err(err) = analyze_one(pipeline, Path::new(input), SaveMode::Ask) {
            eprintln!("Error: {err:#}");
        }
    }
    Ok(())
}

fn analyze_one(pipeline: &ReportPipeline, path: &Path, save: SaveMode) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let mut file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;

    println!("Analyzing {} ...", path.display());
    let outcome = pipeline.process(&mut file, extension)?;

    println!("\n--- Extracted text ---");
    println!("{}", outcome.extracted_text);

    match &outcome.analysis {
        Ok(narrative) => {
            println!("\n--- Analysis ---");
            println!("{narrative}");

            let wanted = match save {
                SaveMode::Flag(flag) => flag,
                SaveMode::Ask => confirm_save()?,
            };
            if wanted {
                let filename = report::artifact_filename(path);
                fs::write(&filename, report::render_artifact(narrative))
                    .with_context(|| format!("cannot write {filename}"))?;
                println!("Analysis saved to: {filename}");
            }
        }
        Err(err) => {
            // Extraction succeeded; show what we have and say why the
            // analysis itself is missing.
            eprintln!("\nAnalysis unavailable: {err}");
        }
    }
    Ok(())
}

fn confirm_save() -> Result<bool> {
    print!("\nSave analysis to file? (y/n): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
