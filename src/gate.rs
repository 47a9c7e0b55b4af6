//! Command classification gate
//!
//! Maps a raw command string to a [`Verdict`] using two ordered rule lists.
//! Block rules are evaluated first in declaration order and the first match
//! short-circuits; only when none matched are the warn rules evaluated, all
//! of them, so a command can collect several warnings.
//!
//! Matching is case-insensitive regex over the raw command text. There is no
//! shell parsing, tokenization, or path normalization, so quoting and
//! variable expansion can slip past the patterns. That is a known limitation
//! of this layer, not something the gate tries to compensate for.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::output::{Verdict, Warning};
use crate::rules::builtin;
use crate::rules::Rule;

/// Error raised while building a gate (a pattern failed to compile)
#[derive(Debug)]
pub enum GateError {
    /// A rule pattern is not a valid regex
    BadPattern { id: String, source: regex::Error },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::BadPattern { id, source } => {
                write!(f, "rule '{}' has an invalid pattern: {}", id, source)
            }
        }
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GateError::BadPattern { source, .. } => Some(source),
        }
    }
}

/// A rule with its pattern compiled
#[derive(Debug)]
struct CompiledRule {
    id: String,
    regex: Regex,
    message: String,
}

impl CompiledRule {
    fn compile(id: &str, pattern: &str, message: &str) -> Result<Self, GateError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| GateError::BadPattern {
                id: id.to_string(),
                source,
            })?;

        Ok(Self {
            id: id.to_string(),
            regex,
            message: message.to_string(),
        })
    }
}

/// Shared gate compiled from the builtin tables.
///
/// The builtin patterns are covered by a compile-sweep test, so the fallback
/// to an empty (allow-everything) gate only guards against a bad pattern
/// slipping in; a broken gate must fail open, never panic the hook.
static BUILTIN_GATE: Lazy<Gate> = Lazy::new(|| Gate::builtin().unwrap_or_else(|_| Gate::empty()));

/// The classification gate: ordered block rules, then ordered warn rules
pub struct Gate {
    block: Vec<CompiledRule>,
    warn: Vec<CompiledRule>,
}

impl Gate {
    /// Create a gate with no rules (allows everything)
    pub fn empty() -> Self {
        Self {
            block: Vec::new(),
            warn: Vec::new(),
        }
    }

    /// Compile a gate from explicit rule tables
    pub fn new(block_rules: &[Rule], warn_rules: &[Rule]) -> Result<Self, GateError> {
        let mut gate = Gate::empty();
        for rule in block_rules {
            gate.add_block_rule(rule.id, rule.pattern, rule.message)?;
        }
        for rule in warn_rules {
            gate.add_warn_rule(rule.id, rule.pattern, rule.message)?;
        }
        Ok(gate)
    }

    /// Compile a gate from the builtin rule tables
    pub fn builtin() -> Result<Self, GateError> {
        Self::new(builtin::BLOCK_RULES, builtin::WARN_RULES)
    }

    /// The shared pre-compiled builtin gate
    pub fn shared() -> &'static Gate {
        &BUILTIN_GATE
    }

    /// Append a block rule after the existing ones
    pub fn add_block_rule(&mut self, id: &str, pattern: &str, message: &str) -> Result<(), GateError> {
        self.block.push(CompiledRule::compile(id, pattern, message)?);
        Ok(())
    }

    /// Append a warn rule after the existing ones
    pub fn add_warn_rule(&mut self, id: &str, pattern: &str, message: &str) -> Result<(), GateError> {
        self.warn.push(CompiledRule::compile(id, pattern, message)?);
        Ok(())
    }

    /// Number of rules in the gate (block + warn)
    pub fn len(&self) -> usize {
        self.block.len() + self.warn.len()
    }

    /// Whether the gate has no rules
    pub fn is_empty(&self) -> bool {
        self.block.is_empty() && self.warn.is_empty()
    }

    /// Classify a command.
    ///
    /// Pure function of the compiled rules and the command text: no I/O, no
    /// clock, no environment. Safe to call from multiple threads.
    pub fn classify(&self, command: &str) -> Verdict {
        if command.is_empty() {
            return Verdict::Allow;
        }

        // First matching block rule wins; later block rules are not checked.
        for rule in &self.block {
            if rule.regex.is_match(command) {
                return Verdict::Block {
                    rule_id: rule.id.clone(),
                    message: rule.message.clone(),
                };
            }
        }

        // No block rule matched: every warn rule gets a chance, in order.
        let warnings: Vec<Warning> = self
            .warn
            .iter()
            .filter(|rule| rule.regex.is_match(command))
            .map(|rule| Warning {
                rule_id: rule.id.clone(),
                message: rule.message.clone(),
            })
            .collect();

        if warnings.is_empty() {
            Verdict::Allow
        } else {
            Verdict::Warn { warnings }
        }
    }
}
