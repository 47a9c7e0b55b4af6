//! User-defined rule extensions
//!
//! Extra rules loaded from a TOML file and appended after the builtin
//! tables, so builtin declaration order wins ties. A rule whose pattern
//! fails to compile is skipped with a diagnostic rather than failing the
//! hook; a typo in the rules file must not take the gate down with it.

use serde::Deserialize;
use std::path::Path;

use crate::gate::Gate;

/// One user-defined rule
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRule {
    /// Identifier used in the audit log; defaults to "custom"
    #[serde(default = "default_rule_id")]
    pub id: String,

    /// Regex pattern to match
    pub pattern: String,

    /// Message shown when the rule fires
    pub message: String,
}

fn default_rule_id() -> String {
    "custom".to_string()
}

/// The rules file structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesFile {
    /// Rules that refuse the command
    #[serde(default)]
    pub block: Vec<CustomRule>,

    /// Rules that print an advisory
    #[serde(default)]
    pub warn: Vec<CustomRule>,
}

impl RulesFile {
    /// Load a rules file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let rules: RulesFile = toml::from_str(&content)?;
        Ok(rules)
    }

    /// Append these rules to a gate, skipping any whose pattern does not
    /// compile. Returns the number of rules added.
    pub fn extend_gate(&self, gate: &mut Gate) -> usize {
        let mut added = 0;

        for rule in &self.block {
            match gate.add_block_rule(&rule.id, &rule.pattern, &rule.message) {
                Ok(()) => added += 1,
                Err(e) => eprintln!("Warning: skipping custom block rule: {}", e),
            }
        }

        for rule in &self.warn {
            match gate.add_warn_rule(&rule.id, &rule.pattern, &rule.message) {
                Ok(()) => added += 1,
                Err(e) => eprintln!("Warning: skipping custom warn rule: {}", e),
            }
        }

        added
    }
}
