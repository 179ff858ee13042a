//! Aggregation of grouped attempts into the four report views.

use crate::report::classify::ModelClassifier;
use crate::report::group::{GroupedAttempts, TaskGroup};
use crate::report::stats::{pass_at_k, round1};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One leaderboard row per model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Model identifier
    pub id: String,
    /// Coarse category label
    #[serde(rename = "type")]
    pub category: String,
    /// pass@1 averaged over the model's task groups (percent)
    pub p1: f64,
    /// pass@5 averaged over the model's task groups (percent)
    pub p5: f64,
    /// Percent of tasks where every attempt succeeded
    #[serde(rename = "pAll")]
    pub pass_all: f64,
    /// Total attempts across all tasks
    pub runs: u32,
    /// Distinct tasks attempted
    pub tasks: u32,
}

/// One difficulty row per task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub name: String,
    /// pass@1 over the pooled attempts of every model (percent)
    pub p1: f64,
    /// Pooled attempt count
    pub count: u32,
}

/// One drill-down row per attempt of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub task: String,
    /// Lowercased raw result string
    pub res: String,
    /// 1-based run number within the (model, task) group
    pub run: u32,
    /// Failure message; null for successful attempts
    pub msg: Option<String>,
}

/// Outcome of a single run within a task breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// 1-based run number
    pub r: u32,
    /// "S" or "F"
    pub val: String,
}

/// One breakdown row per (task, model) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBreakdownRow {
    pub model: String,
    #[serde(rename = "type")]
    pub category: String,
    /// pass@1 for this model on this task (percent)
    pub p1: f64,
    /// Per-run outcomes in run-number order
    pub runs: Vec<RunOutcome>,
}

/// The assembled report: the sole hand-off artifact to the presentation
/// layer. Self-contained, serializable, never mutated after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Models sorted by p5 descending
    pub leaderboard: Vec<ModelSummary>,
    /// Tasks sorted by p1 ascending (hardest first)
    pub tasks: Vec<TaskSummary>,
    /// Per-model detail rows sorted by (task name, run number)
    pub details: BTreeMap<String, Vec<DetailRow>>,
    /// Per-task breakdown rows sorted by p1 descending
    pub task_details: BTreeMap<String, Vec<TaskBreakdownRow>>,
}

impl BenchmarkReport {
    /// Build the four derived views from grouped attempts.
    ///
    /// Percentages are rounded to one decimal before sorting, so sort
    /// order reads the rounded values. Model-level p1/p5 are unweighted
    /// means of per-task pass@k; the task-level p1 pools every attempt
    /// for the task across all models instead.
    pub fn build(grouped: &GroupedAttempts, classifier: &ModelClassifier) -> Self {
        let mut report = Self::default();

        for model in grouped.models() {
            let mut p1_scores = Vec::new();
            let mut p5_scores = Vec::new();
            let mut pass_all_count = 0usize;
            let mut total_runs = 0usize;
            let mut rows = Vec::new();

            for group in model.tasks() {
                let n = group.total();
                let c = group.successes();
                total_runs += n;

                p1_scores.push(pass_at_k(n, c, 1));
                p5_scores.push(pass_at_k(n, c, 5));
                if group.all_passed() {
                    pass_all_count += 1;
                }

                for (idx, attempt) in group.attempts.iter().enumerate() {
                    rows.push(DetailRow {
                        task: group.task.clone(),
                        res: attempt.result.clone(),
                        run: (idx + 1) as u32,
                        msg: attempt.failure.clone(),
                    });
                }
            }

            let task_count = model.tasks().len();
            let pct_pass_all = if task_count > 0 {
                pass_all_count as f64 / task_count as f64 * 100.0
            } else {
                0.0
            };

            report.leaderboard.push(ModelSummary {
                id: model.model.clone(),
                category: classifier.categorize(&model.model).to_string(),
                p1: round1(mean(&p1_scores) * 100.0),
                p5: round1(mean(&p5_scores) * 100.0),
                pass_all: round1(pct_pass_all),
                runs: total_runs as u32,
                tasks: task_count as u32,
            });

            // (task asc, run asc) is display order for the drill-down view
            rows.sort_by(|a, b| a.task.cmp(&b.task).then(a.run.cmp(&b.run)));
            report.details.insert(model.model.clone(), rows);
        }

        for task_name in grouped.task_names() {
            let mut pooled_n = 0usize;
            let mut pooled_c = 0usize;
            let mut breakdown = Vec::new();

            for model in grouped.models() {
                if let Some(group) = model.task(task_name) {
                    pooled_n += group.total();
                    pooled_c += group.successes();
                    breakdown.push(breakdown_row(&model.model, group, classifier));
                }
            }

            report.tasks.push(TaskSummary {
                name: task_name.to_string(),
                p1: round1(pass_at_k(pooled_n, pooled_c, 1) * 100.0),
                count: pooled_n as u32,
            });

            // Stable sort: tied rows keep model encounter order
            breakdown.sort_by(|a, b| b.p1.total_cmp(&a.p1));
            report.task_details.insert(task_name.to_string(), breakdown);
        }

        report.leaderboard.sort_by(|a, b| b.p5.total_cmp(&a.p5));
        report.tasks.sort_by(|a, b| a.p1.total_cmp(&b.p1));

        report
    }

    /// Save the report as pretty-printed JSON. Nothing is written unless
    /// the whole document serialized.
    pub fn save_json(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn breakdown_row(model: &str, group: &TaskGroup, classifier: &ModelClassifier) -> TaskBreakdownRow {
    let runs = group
        .attempts
        .iter()
        .enumerate()
        .map(|(idx, attempt)| RunOutcome {
            r: (idx + 1) as u32,
            val: attempt.outcome().code().to_string(),
        })
        .collect();

    TaskBreakdownRow {
        model: model.to_string(),
        category: classifier.categorize(model).to_string(),
        p1: round1(pass_at_k(group.total(), group.successes(), 1) * 100.0),
        runs,
    }
}
