// Organizational Analytics Report Generator
//
// Reads an evaluation export (JSON) and runs the full statistics engine:
// summaries, ANOVA by department, predictive factors, regression, outlier
// detection, risk scoring, talent segmentation, eNPS, nine-box
// distribution, and department benchmarking.

mod report;

use report::{build_report, EmployeeRecord};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

/// CLI arguments for the analyzer
#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Analyze employee evaluation data and generate an organizational report", long_about = None)]
struct Args {
    /// Path to the evaluation export (JSON array of employee records)
    #[arg(short, long)]
    input: PathBuf,

    /// Report output path (defaults to org_report.json next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("\n📊 Organizational Analytics Report Generator");
    println!("============================================");

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓▒░ "),
    );

    pb.set_message("Loading evaluation data...");
    let raw = fs::read_to_string(&args.input)?;
    pb.inc(1);

    pb.set_message("Parsing JSON...");
    let records: Vec<EmployeeRecord> = serde_json::from_str(&raw)?;
    pb.inc(1);

    pb.set_message(format!("Running analysis ({} records)...", records.len()));
    let org_report = build_report(&records);
    pb.inc(1);

    pb.set_message("Writing report...");
    let json = serde_json::to_string_pretty(&org_report)?;
    let output_path = args
        .output
        .unwrap_or_else(|| args.input.with_file_name("org_report.json"));
    fs::write(&output_path, &json)?;
    pb.inc(1);

    pb.finish_with_message("✓ Analysis complete");

    // Summary
    println!("\n📈 Summary:");
    println!("  Employees analyzed: {}", org_report.total_employees);
    println!("  Departments: {}", org_report.department_benchmark.len());
    println!(
        "  Performance mean: {:.1} (σ {:.1})",
        org_report.performance_summary.mean, org_report.performance_summary.std_dev
    );
    println!(
        "  Outliers flagged: {} ({:.1}%)",
        org_report.outliers.outliers.len(),
        org_report.outliers.outlier_percentage
    );
    println!(
        "  High-risk employees: {}",
        org_report.high_risk_employees.len()
    );
    println!("  eNPS: {:+.0}", org_report.enps.score);

    println!("\n✨ Report Generated!");
    println!("📄 {}\n", output_path.display());

    Ok(())
}
