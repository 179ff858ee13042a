//! Model categorization by ordered keyword rules.

use serde::{Deserialize, Serialize};

/// A single substring rule: models whose lowercased identifier contains
/// `keyword` belong to `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub keyword: String,
    pub category: String,
}

/// Ordered first-match-wins keyword classifier with a default fallback.
///
/// Pure and stateless; safe to share across threads without
/// synchronization.
#[derive(Debug, Clone)]
pub struct ModelClassifier {
    rules: Vec<ClassifierRule>,
    default_category: String,
}

impl ModelClassifier {
    /// Keywords are lowercased once here so lookups stay case-insensitive
    /// regardless of how rules were written.
    pub fn new(rules: Vec<ClassifierRule>, default_category: impl Into<String>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| ClassifierRule {
                keyword: rule.keyword.to_lowercase(),
                category: rule.category,
            })
            .collect();

        Self {
            rules,
            default_category: default_category.into(),
        }
    }

    /// Categorize a model identifier. Rules are checked in order against
    /// the lowercased identifier; the first substring match wins, and a
    /// model no rule matches gets the default category.
    pub fn categorize(&self, model_id: &str) -> &str {
        let lowered = model_id.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(&rule.keyword))
            .map(|rule| rule.category.as_str())
            .unwrap_or(&self.default_category)
    }
}
