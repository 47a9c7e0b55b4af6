//! Safety rules for colab-guardrails
//!
//! Rules are pattern + message pairs partitioned by severity: block rules
//! terminate the command, warn rules print an advisory and let it run.

pub mod builtin;
pub mod custom;

/// A single safety rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern matched against the raw command text
    pub pattern: &'static str,

    /// Human-readable message shown when the rule fires
    pub message: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(id: &'static str, pattern: &'static str, message: &'static str) -> Self {
        Self {
            id,
            pattern,
            message,
        }
    }
}
