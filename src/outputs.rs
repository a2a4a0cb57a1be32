//! Named output mapping written back to the test runner.
//!
//! Each step writes its results under caller-configurable key names; the CLI
//! prints the mapping as JSON (`--json`) or as colored key/value lines.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Ordered string-to-JSON mapping of a step's named outputs.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Outputs(BTreeMap<String, Value>);

impl Outputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Print the mapping: pretty JSON in json mode, dimmed-key lines otherwise.
    pub fn print(&self, json: bool) -> crate::error::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&self.0)?);
        } else {
            for (key, value) in &self.0 {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                println!("{} {}", format!("{}:", key).dimmed(), shown);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let mut outputs = Outputs::new();
        outputs.set("cellValue", "EFG INC");
        outputs.set("rowIndex", 2);
        assert_eq!(outputs.get("cellValue"), Some(&Value::from("EFG INC")));
        assert_eq!(outputs.get("rowIndex"), Some(&Value::from(2)));
        assert!(outputs.get("missing").is_none());
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let mut outputs = Outputs::new();
        outputs.set("rowIndex", 1);
        let json = serde_json::to_string(&outputs).unwrap();
        assert_eq!(json, r#"{"rowIndex":1}"#);
    }
}
