//! Two-level grouping of attempts: model -> task -> ordered attempts.
//!
//! Iteration order is contractual: models, a model's tasks, and the union
//! of task names all come back in first-appearance order, and attempts
//! within a group keep input order. Run identity (the 1-based run number
//! of an attempt within its group) is established by that order and never
//! taken from the input.

use crate::ingest::Attempt;
use std::collections::{HashMap, HashSet};

/// Ordered attempts for one (model, task) pair.
#[derive(Debug, Clone)]
pub struct TaskGroup {
    pub task: String,
    pub attempts: Vec<Attempt>,
}

impl TaskGroup {
    /// Attempt count for this group
    pub fn total(&self) -> usize {
        self.attempts.len()
    }

    /// Successful attempt count for this group
    pub fn successes(&self) -> usize {
        self.attempts.iter().filter(|a| a.passed()).count()
    }

    /// Whether every attempt in a non-empty group succeeded
    pub fn all_passed(&self) -> bool {
        self.total() > 0 && self.successes() == self.total()
    }
}

/// All task groups for one model, in first-appearance order.
#[derive(Debug, Clone)]
pub struct ModelGroup {
    pub model: String,
    tasks: Vec<TaskGroup>,
    index: HashMap<String, usize>,
}

impl ModelGroup {
    fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            tasks: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, attempt: Attempt) {
        let slot = match self.index.get(&attempt.task) {
            Some(&i) => i,
            None => {
                let i = self.tasks.len();
                self.index.insert(attempt.task.clone(), i);
                self.tasks.push(TaskGroup {
                    task: attempt.task.clone(),
                    attempts: Vec::new(),
                });
                i
            }
        };
        self.tasks[slot].attempts.push(attempt);
    }

    /// Task groups in first-appearance order
    pub fn tasks(&self) -> &[TaskGroup] {
        &self.tasks
    }

    /// Look up this model's group for a task, if it attempted the task
    pub fn task(&self, name: &str) -> Option<&TaskGroup> {
        self.index.get(name).map(|&i| &self.tasks[i])
    }

    /// Total attempts across all of this model's task groups
    pub fn total_attempts(&self) -> usize {
        self.tasks.iter().map(|t| t.attempts.len()).sum()
    }
}

/// Insertion-ordered two-level grouping of all input attempts.
#[derive(Debug, Clone, Default)]
pub struct GroupedAttempts {
    models: Vec<ModelGroup>,
    index: HashMap<String, usize>,
}

impl GroupedAttempts {
    /// Partition attempts by (model, task). Stable: input order is kept
    /// within each group, no attempt is dropped or deduplicated, and a
    /// model or task absent from the input never appears as a key.
    pub fn from_attempts(attempts: Vec<Attempt>) -> Self {
        let mut grouped = Self::default();
        for attempt in attempts {
            grouped.push(attempt);
        }
        grouped
    }

    fn push(&mut self, attempt: Attempt) {
        let slot = match self.index.get(&attempt.model) {
            Some(&i) => i,
            None => {
                let i = self.models.len();
                self.index.insert(attempt.model.clone(), i);
                self.models.push(ModelGroup::new(&attempt.model));
                i
            }
        };
        self.models[slot].push(attempt);
    }

    /// Model groups in first-appearance order
    pub fn models(&self) -> &[ModelGroup] {
        &self.models
    }

    /// Union of task names across all models, model-major, each name at
    /// its first appearance.
    pub fn task_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for model in &self.models {
            for group in model.tasks() {
                if seen.insert(group.task.as_str()) {
                    names.push(group.task.as_str());
                }
            }
        }
        names
    }

    /// Total number of grouped attempts
    pub fn total_attempts(&self) -> usize {
        self.models.iter().map(|m| m.total_attempts()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(model: &str, task: &str, result: &str) -> Attempt {
        Attempt {
            model: model.to_string(),
            task: task.to_string(),
            result: result.to_string(),
            failure: None,
        }
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let attempts = vec![
            attempt("m1", "t1", "success"),
            attempt("m2", "t1", "fail"),
            attempt("m1", "t2", "fail"),
            attempt("m1", "t1", "fail"),
            attempt("m2", "t2", "success"),
        ];
        let input_len = attempts.len();
        let grouped = GroupedAttempts::from_attempts(attempts);

        assert_eq!(grouped.total_attempts(), input_len);
        assert_eq!(grouped.models().len(), 2);

        let m1 = &grouped.models()[0];
        assert_eq!(m1.model, "m1");
        assert_eq!(m1.task("t1").unwrap().total(), 2);
        assert_eq!(m1.task("t2").unwrap().total(), 1);
    }

    #[test]
    fn test_first_appearance_order_preserved() {
        let grouped = GroupedAttempts::from_attempts(vec![
            attempt("zeta", "late-task", "fail"),
            attempt("alpha", "early-task", "success"),
            attempt("zeta", "early-task", "success"),
        ]);

        let models: Vec<&str> = grouped.models().iter().map(|m| m.model.as_str()).collect();
        assert_eq!(models, vec!["zeta", "alpha"]);

        let zeta_tasks: Vec<&str> = grouped.models()[0]
            .tasks()
            .iter()
            .map(|t| t.task.as_str())
            .collect();
        assert_eq!(zeta_tasks, vec!["late-task", "early-task"]);

        assert_eq!(grouped.task_names(), vec!["late-task", "early-task"]);
    }

    #[test]
    fn test_input_order_within_group() {
        let grouped = GroupedAttempts::from_attempts(vec![
            attempt("m1", "t1", "fail"),
            attempt("m1", "t1", "success"),
            attempt("m1", "t1", "error"),
        ]);

        let results: Vec<&str> = grouped.models()[0].task("t1").unwrap()
            .attempts
            .iter()
            .map(|a| a.result.as_str())
            .collect();
        assert_eq!(results, vec!["fail", "success", "error"]);
    }

    #[test]
    fn test_success_counting() {
        let grouped = GroupedAttempts::from_attempts(vec![
            attempt("m1", "t1", "success"),
            attempt("m1", "t1", "success"),
            attempt("m1", "t2", "success"),
            attempt("m1", "t2", "fail"),
        ]);

        let m1 = &grouped.models()[0];
        assert!(m1.task("t1").unwrap().all_passed());
        assert!(!m1.task("t2").unwrap().all_passed());
        assert_eq!(m1.task("t2").unwrap().successes(), 1);
    }

    #[test]
    fn test_absent_keys_never_appear() {
        let grouped = GroupedAttempts::from_attempts(vec![attempt("m1", "t1", "success")]);

        assert!(grouped.models()[0].task("t2").is_none());
        assert_eq!(grouped.task_names(), vec!["t1"]);
    }

    #[test]
    fn test_empty_input() {
        let grouped = GroupedAttempts::from_attempts(vec![]);

        assert!(grouped.is_empty());
        assert_eq!(grouped.total_attempts(), 0);
        assert!(grouped.task_names().is_empty());
    }
}
