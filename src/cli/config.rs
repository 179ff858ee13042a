use crate::report::{ClassifierRule, ModelClassifier};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a report generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Results file to aggregate (line-delimited JSON)
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Model categorization settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            classifier: ClassifierConfig::default(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("combined_results.jsonl")
}

/// Ordered keyword rules plus the fallback category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Checked in order against the lowercased model id; first match wins
    #[serde(default = "default_rules")]
    pub rules: Vec<ClassifierRule>,

    /// Category for models no rule matches
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            default_category: default_category(),
        }
    }
}

fn default_rules() -> Vec<ClassifierRule> {
    vec![ClassifierRule {
        keyword: "gemini".to_string(),
        category: "Hosted".to_string(),
    }]
}

fn default_category() -> String {
    "Self-Hosted".to_string()
}

impl ClassifierConfig {
    /// Build the classifier this configuration describes
    pub fn build(&self) -> ModelClassifier {
        ModelClassifier::new(self.rules.clone(), self.default_category.clone())
    }
}

impl ReportConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: ReportConfig =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Generate a sample configuration
    pub fn sample() -> Self {
        Self {
            input: default_input(),
            classifier: ClassifierConfig {
                rules: vec![
                    ClassifierRule {
                        keyword: "gemini".to_string(),
                        category: "Hosted".to_string(),
                    },
                    ClassifierRule {
                        keyword: "gpt".to_string(),
                        category: "Hosted".to_string(),
                    },
                ],
                default_category: default_category(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();

        assert_eq!(config.input, PathBuf::from("combined_results.jsonl"));
        assert_eq!(config.classifier.default_category, "Self-Hosted");
        assert_eq!(config.classifier.rules.len(), 1);
    }

    #[test]
    fn test_default_classifier_behavior() {
        let classifier = ReportConfig::default().classifier.build();

        assert_eq!(classifier.categorize("gemini-2.5-flash"), "Hosted");
        assert_eq!(classifier.categorize("qwen2.5-coder"), "Self-Hosted");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ReportConfig::sample();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ReportConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.input, config.input);
        assert_eq!(parsed.classifier.rules, config.classifier.rules);
    }

    #[test]
    fn test_empty_yaml_fills_defaults() {
        let parsed: ReportConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(parsed.input, PathBuf::from("combined_results.jsonl"));
        assert_eq!(parsed.classifier.default_category, "Self-Hosted");
    }
}
