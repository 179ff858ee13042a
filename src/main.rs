mod cli;
mod ingest;
mod report;
mod web;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command, ReportConfig};
use report::{BenchmarkReport, GroupedAttempts};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match args.command {
        Command::Generate(generate_args) => {
            generate_report(generate_args)?;
        }
        Command::Init(init_args) => {
            generate_sample_config(init_args)?;
        }
        Command::Serve(serve_args) => {
            serve_report(serve_args).await?;
        }
    }

    Ok(())
}

fn generate_report(args: cli::GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading report config from {:?}", path);
            ReportConfig::load(path)?
        }
        None => ReportConfig::default(),
    };

    let input = args.input.unwrap_or_else(|| config.input.clone());
    info!("Reading results from {:?}", input);

    let attempts =
        ingest::load_attempts(&input).context(format!("Failed to load results from {:?}", input))?;
    info!("Loaded {} attempts", attempts.len());

    let grouped = GroupedAttempts::from_attempts(attempts);
    info!(
        "Grouped into {} models across {} tasks",
        grouped.models().len(),
        grouped.task_names().len()
    );

    let classifier = config.classifier.build();
    let report = BenchmarkReport::build(&grouped, &classifier);

    report
        .save_json(&args.output)
        .context(format!("Failed to write report to {:?}", args.output))?;

    print_report(&report);
    println!("\nReport saved to: {:?}", args.output);

    Ok(())
}

fn print_report(report: &BenchmarkReport) {
    println!("\n{}", "=".repeat(60));
    println!("BENCHMARK REPORT");
    println!("{}", "=".repeat(60));

    println!("\nLeaderboard (by pass@5):");
    for row in &report.leaderboard {
        println!(
            "  {} ({}) - pass@1 {:.1}%  pass@5 {:.1}%  pass-all {:.1}%  ({} runs / {} tasks)",
            row.id, row.category, row.p1, row.p5, row.pass_all, row.runs, row.tasks
        );
    }

    println!("\nHardest tasks (by pooled pass@1):");
    for row in report.tasks.iter().take(10) {
        println!("  {} - {:.1}% over {} attempts", row.name, row.p1, row.count);
    }
}

fn generate_sample_config(args: cli::InitArgs) -> Result<()> {
    let config = ReportConfig::sample();

    config.save(&args.output)?;
    println!("Generated sample config at: {:?}", args.output);

    Ok(())
}

async fn serve_report(args: cli::ServeArgs) -> Result<()> {
    info!("Starting report API server on port {}", args.port);
    info!("Report file: {:?}", args.report);

    web::start_server(args.port, args.report).await?;

    Ok(())
}
