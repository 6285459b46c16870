use serde::{Deserialize, Serialize};
use toml::value::{Table, Value};

pub const PROJECT_COMPLEXITY: &str = "project_complexity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How complex the project is judged to be, as far as scoring is concerned.
pub enum ProjectComplexity {
    Complex,
    Simple,
    /// Any other value, or no value at all.
    Neutral,
}

impl ProjectComplexity {
    /// Classify a `project_complexity` value. Only the exact strings "complex" and "simple" are
    /// recognized; everything else, including non-string values, is neutral.
    pub fn classify(value: Option<&Value>) -> ProjectComplexity {
        match value.and_then(Value::as_str) {
            Some("complex") => ProjectComplexity::Complex,
            Some("simple") => ProjectComplexity::Simple,
            _ => ProjectComplexity::Neutral,
        }
    }

    /// Multiplier applied to every task's score.
    pub fn factor(self) -> f64 {
        match self {
            ProjectComplexity::Complex => 1.3,
            ProjectComplexity::Simple => 0.8,
            ProjectComplexity::Neutral => 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Run-wide tuning data shared by every task being scored. Only `project_complexity` is read;
/// other entries are kept but ignored.
pub struct Context {
    fields: Table,
}

impl Context {
    pub fn new() -> Context {
        Context { fields: Table::new() }
    }

    pub fn from_table(fields: Table) -> Context {
        Context { fields }
    }

    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Context {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn project_complexity(&self) -> ProjectComplexity {
        ProjectComplexity::classify(self.fields.get(PROJECT_COMPLEXITY))
    }
}
