// src/main.rs
mod analysis;
mod extractors;
mod letter;
mod storage;
mod utils;

use analysis::{FindingsReport, NO_ISSUES_MESSAGE};
use chrono::NaiveDate;
use clap::Parser;
use extractors::ReportSource;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the credit report dispute generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Credit report to scan (.pdf or .txt)
    #[arg(short, long)]
    report: String,

    /// Full name for the dispute letter
    #[arg(short, long)]
    name: Option<String>,

    /// Mailing address for the dispute letter
    #[arg(short, long)]
    address: Option<String>,

    /// Generate and save the dispute letter
    #[arg(short, long)]
    letter: bool,

    /// Letter date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Output directory for the letter and findings report
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Also save the findings as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();

    match run(&args) {
        Err(AppError::Letter(e)) => {
            // Validation failures reach the user as the plain message only
            eprintln!("{}", e);
            std::process::exit(1);
        }
        result => result,
    }
}

/// Extracts, scans and writes the requested outputs for one report.
fn run(args: &Args) -> Result<(), AppError> {
    tracing::info!("Starting processing for report: {}", args.report);

    // 3. Resolve the letter date up front so a bad value fails before any work
    let letter_date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| AppError::Config(format!("Invalid --date '{}': {}", raw, e)))?,
        None => chrono::Local::now().date_naive(),
    };

    // 4. Extract the report text
    let source = ReportSource::open(&args.report)?;
    let text = source.full_text();
    tracing::info!("Extracted {} bytes from {} pages", text.len(), source.page_count());

    // 5. Run the trigger scan
    let findings = analysis::analyze(&text);
    let report = FindingsReport::new(source.name(), source.page_count(), &text, &findings);
    tracing::info!("Detected {} issues", findings.len());

    println!("Detected Issues");
    if findings.is_empty() {
        println!("{}", NO_ISSUES_MESSAGE);
    }
    for message in report.messages() {
        println!("- {}", message);
    }

    // 6. Render the letter before touching the output directory
    let letter = if args.letter {
        Some(letter::generate_letter(
            args.name.as_deref().unwrap_or_default(),
            args.address.as_deref().unwrap_or_default(),
            &report.messages(),
            letter_date,
        )?)
    } else {
        None
    };

    if !args.json && letter.is_none() {
        tracing::info!("Processing finished.");
        return Ok(());
    }

    // 7. Save outputs
    let storage = StorageManager::new(&args.output_dir)?;

    if args.json {
        let path = storage.save_findings_report(&report)?;
        println!("\nFindings report saved to {}", path.display());
    }

    if let Some(letter) = letter {
        println!("\nGenerated Dispute Letter\n\n{}\n", letter.body);
        let path = storage.save_letter(&letter)?;
        println!("Letter saved to {}", path.display());
    }

    tracing::info!("Processing finished.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LetterError;

    fn write_report(dir: &std::path::Path) -> String {
        let path = dir.join("report.txt");
        std::fs::write(&path, "Status: Charge Off\nBalance: $1,200\nBalance: $900\n").unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_refused_letter_leaves_output_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let report = write_report(tmp.path());
        let output = tmp.path().join("output");

        let args = Args::parse_from([
            "credit_dispute",
            "--report", report.as_str(),
            "--name", "Jane Doe",
            "--letter",
            "--json",
            "--output-dir", output.to_str().unwrap(),
        ]);

        let result = run(&args);
        assert!(matches!(result, Err(AppError::Letter(LetterError::MissingContact))));
        assert!(!output.exists(), "Output directory should not be created for a refused letter");
    }

    #[test]
    fn test_letter_and_report_saved_together() {
        let tmp = tempfile::tempdir().unwrap();
        let report = write_report(tmp.path());
        let output = tmp.path().join("output");

        let args = Args::parse_from([
            "credit_dispute",
            "--report", report.as_str(),
            "--name", "Jane Doe",
            "--address", "1 Main St",
            "--date", "2024-03-05",
            "--letter",
            "--json",
            "--output-dir", output.to_str().unwrap(),
        ]);

        run(&args).expect("Run should succeed");

        let letter = std::fs::read_to_string(output.join("dispute_letter.txt")).unwrap();
        assert!(letter.starts_with("March 05, 2024\n\nJane Doe\n1 Main St\n"));
        assert!(letter.contains("- Multiple balance entries detected."));
        assert!(output.join("dispute_findings.json").is_file());
    }

    #[test]
    fn test_scan_only_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let report = write_report(tmp.path());
        let output = tmp.path().join("output");

        let args = Args::parse_from([
            "credit_dispute",
            "--report", report.as_str(),
            "--output-dir", output.to_str().unwrap(),
        ]);

        run(&args).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_bad_date_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let report = write_report(tmp.path());

        let args = Args::parse_from(["credit_dispute", "--report", report.as_str(), "--date", "05/03/2024"]);
        assert!(matches!(run(&args), Err(AppError::Config(_))));
    }
}
