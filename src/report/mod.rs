//! The aggregation core: grouping, pass@k estimation, model
//! categorization and assembly of the four derived report views.

mod aggregate;
mod classify;
mod group;
mod stats;

pub use aggregate::{
    BenchmarkReport, DetailRow, ModelSummary, RunOutcome, TaskBreakdownRow, TaskSummary,
};
pub use classify::{ClassifierRule, ModelClassifier};
pub use group::{GroupedAttempts, ModelGroup, TaskGroup};
pub use stats::{pass_at_k, round1};
