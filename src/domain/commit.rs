use crate::error::{NextVersionError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A commit message split into its subject line and body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub subject: String,
    pub body: String,
}

impl Commit {
    /// Create a commit record from subject and body text
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Commit {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert raw JSON values into canonical commit records.
///
/// Each element must be an object; `subject` and `body` default to the empty
/// string when absent and must be strings when present. Unknown keys are
/// ignored. Anything else fails with [`NextVersionError::Commit`].
pub fn normalize_commits(raw: &[Value]) -> Result<Vec<Commit>> {
    raw.iter()
        .map(|value| {
            if !value.is_object() {
                return Err(NextVersionError::commit(value_kind(value)));
            }
            serde_json::from_value(value.clone())
                .map_err(|err| NextVersionError::commit(err.to_string()))
        })
        .collect()
}
