use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BENCH-REPORT: Benchmark Leaderboard Report Generator
///
/// Aggregates line-delimited JSON benchmark results into a leaderboard
/// report with per-model, per-task and per-run statistics.
#[derive(Parser, Debug)]
#[command(name = "bench-report")]
#[command(version = "0.1.0")]
#[command(about = "Aggregate benchmark results into a leaderboard report")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate a results file into a report document
    Generate(GenerateArgs),

    /// Generate a sample report config file
    Init(InitArgs),

    /// Serve a generated report over HTTP
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the report config file (YAML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the input results file from the config
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output path for the report document
    #[arg(short, long, default_value = "report.json")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the config file
    #[arg(short, long, default_value = "report-config.yaml")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Path to the report document to serve
    #[arg(short, long, default_value = "report.json")]
    pub report: PathBuf,
}
