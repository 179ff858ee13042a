//! Shared state for the report API

use crate::report::BenchmarkReport;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A report document loaded from disk
#[derive(Debug, Clone)]
pub struct LoadedReport {
    pub report: BenchmarkReport,
    /// When the document was (re)loaded
    pub loaded_at: DateTime<Utc>,
}

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cached report document
    report: Arc<RwLock<Option<LoadedReport>>>,
    /// Path the report is (re)loaded from
    pub report_path: PathBuf,
}

impl AppState {
    pub fn new(report_path: PathBuf) -> Self {
        Self {
            report: Arc::new(RwLock::new(None)),
            report_path,
        }
    }

    /// Load (or reload) the report from disk
    pub async fn load_report(&self) -> Result<()> {
        let content = std::fs::read_to_string(&self.report_path)
            .context(format!("Failed to read report file: {:?}", self.report_path))?;
        let report: BenchmarkReport =
            serde_json::from_str(&content).context("Failed to parse report file")?;

        let mut slot = self.report.write().await;
        *slot = Some(LoadedReport {
            report,
            loaded_at: Utc::now(),
        });

        Ok(())
    }

    /// Get the cached report, if one has been loaded
    pub async fn get_report(&self) -> Option<LoadedReport> {
        let slot = self.report.read().await;
        slot.clone()
    }
}
