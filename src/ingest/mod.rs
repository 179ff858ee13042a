//! Attempt loader for line-delimited JSON result files.
//!
//! Each line is one record describing a single attempt at a benchmark task
//! by one model configuration. Field names follow the result collector:
//! `llmConfig.model`, `name`, `result`, `failures[].message`.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading attempt records
#[derive(Debug, Error)]
pub enum IngestError {
    /// The results file could not be read at all
    #[error("failed to read results file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A record failed to parse; the whole load aborts
    #[error("malformed record on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Pass/fail outcome of a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

impl Outcome {
    /// One-letter code used in per-task run breakdowns
    pub fn code(&self) -> &'static str {
        match self {
            Outcome::Success => "S",
            Outcome::Fail => "F",
        }
    }
}

/// One recorded execution of one task by one model configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Model identifier ("Unknown Model" when the record omits it)
    pub model: String,
    /// Task identifier ("Unknown Task" when the record omits it)
    pub task: String,
    /// Lowercased raw result string ("fail" when the record omits it)
    pub result: String,
    /// Trimmed first failure message; kept only for failed attempts
    pub failure: Option<String>,
}

impl Attempt {
    /// Outcome derived from the raw result string
    pub fn outcome(&self) -> Outcome {
        if self.result == "success" {
            Outcome::Success
        } else {
            Outcome::Fail
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome() == Outcome::Success
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "llmConfig", default)]
    llm_config: Option<RawLlmConfig>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    failures: Vec<RawFailure>,
}

#[derive(Debug, Deserialize)]
struct RawLlmConfig {
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFailure {
    #[serde(default)]
    message: Option<String>,
}

impl From<RawRecord> for Attempt {
    fn from(raw: RawRecord) -> Self {
        let model = raw
            .llm_config
            .and_then(|c| c.model)
            .unwrap_or_else(|| "Unknown Model".to_string());
        let task = raw.name.unwrap_or_else(|| "Unknown Task".to_string());
        let result = raw
            .result
            .map(|r| r.to_lowercase())
            .unwrap_or_else(|| "fail".to_string());

        let failure = match raw.failures.into_iter().next() {
            Some(f) if result != "success" => Some(f.message.unwrap_or_default().trim().to_string()),
            _ => None,
        };

        Self {
            model,
            task,
            result,
            failure,
        }
    }
}

/// Load all attempts from a line-delimited JSON file.
///
/// Blank lines are skipped. A malformed line aborts the whole load;
/// bad records are never silently dropped.
pub fn load_attempts(path: &Path) -> Result<Vec<Attempt>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_attempts(&content)
}

/// Parse attempts from an in-memory results string, one record per line.
pub fn parse_attempts(content: &str) -> Result<Vec<Attempt>, IngestError> {
    let mut attempts = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let raw: RawRecord = serde_json::from_str(line)
            .map_err(|source| IngestError::Parse { line: idx + 1, source })?;
        attempts.push(Attempt::from(raw));
    }

    Ok(attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let line = r#"{"name":"fix-pod","llmConfig":{"model":"gemini-2.5-pro"},"result":"SUCCESS","failures":[]}"#;
        let attempts = parse_attempts(line).unwrap();

        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].model, "gemini-2.5-pro");
        assert_eq!(attempts[0].task, "fix-pod");
        assert_eq!(attempts[0].result, "success");
        assert_eq!(attempts[0].outcome(), Outcome::Success);
        assert_eq!(attempts[0].failure, None);
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let attempts = parse_attempts("{}").unwrap();

        assert_eq!(attempts[0].model, "Unknown Model");
        assert_eq!(attempts[0].task, "Unknown Task");
        assert_eq!(attempts[0].result, "fail");
        assert_eq!(attempts[0].outcome(), Outcome::Fail);
    }

    #[test]
    fn test_failure_message_trimmed_first_only() {
        let line = r#"{"name":"t","result":"fail","failures":[{"message":"  timed out  "},{"message":"second"}]}"#;
        let attempts = parse_attempts(line).unwrap();

        assert_eq!(attempts[0].failure.as_deref(), Some("timed out"));
    }

    #[test]
    fn test_successful_attempt_drops_failure_message() {
        let line = r#"{"name":"t","result":"Success","failures":[{"message":"stale"}]}"#;
        let attempts = parse_attempts(line).unwrap();

        assert!(attempts[0].passed());
        assert_eq!(attempts[0].failure, None);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = "\n{\"name\":\"a\"}\n\n{\"name\":\"b\"}\n";
        let attempts = parse_attempts(content).unwrap();

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].task, "a");
        assert_eq!(attempts[1].task, "b");
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let content = "{\"name\":\"a\"}\nnot json\n{\"name\":\"b\"}";
        let err = parse_attempts(content).unwrap_err();

        match err {
            IngestError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Success.code(), "S");
        assert_eq!(Outcome::Fail.code(), "F");
    }

    #[test]
    fn test_missing_read_reports_path() {
        let err = load_attempts(Path::new("/nonexistent/results.jsonl")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/results.jsonl"));
    }
}
