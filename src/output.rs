//! Verdict type and hook protocol rendering
//!
//! The host decides whether to run the command purely from the exit status:
//! 0 allows, [`EXIT_BLOCK`] denies. A block additionally writes a structured
//! `{"status":"blocked","message":...}` payload to stdout for the host to
//! display. Warnings never change the exit status; they go to stderr in
//! yellow so they show up in the session log without being mistaken for
//! protocol output.

use serde::Serialize;

/// Exit status meaning "run the command"
pub const EXIT_ALLOW: i32 = 0;

/// Exit status reserved for "deny"; the host treats it as a hard block
pub const EXIT_BLOCK: i32 = 2;

/// A single advisory produced by a warn rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Rule that produced the warning
    pub rule_id: String,

    /// Advisory text shown to the user
    pub message: String,
}

/// Outcome of classifying one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No rule matched; run the command silently
    Allow,

    /// One or more warn rules matched; run the command, print advisories
    Warn { warnings: Vec<Warning> },

    /// A block rule matched; refuse the command
    Block { rule_id: String, message: String },
}

/// Structured payload written to stdout on a block
#[derive(Debug, Serialize)]
pub struct BlockedOutput<'a> {
    /// Always "blocked"
    pub status: &'static str,

    /// The matching block rule's message
    pub message: &'a str,
}

impl Verdict {
    /// Check if this verdict permits execution without advisories
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// Check if this verdict refuses execution
    pub fn is_block(&self) -> bool {
        matches!(self, Verdict::Block { .. })
    }

    /// The warnings carried by this verdict, if any
    pub fn warnings(&self) -> &[Warning] {
        match self {
            Verdict::Warn { warnings } => warnings,
            _ => &[],
        }
    }

    /// The rule that decided this verdict, if any
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Verdict::Allow => None,
            Verdict::Warn { warnings } => warnings.first().map(|w| w.rule_id.as_str()),
            Verdict::Block { rule_id, .. } => Some(rule_id),
        }
    }

    /// Map the verdict to the process exit status the host acts on
    pub fn exit_status(&self) -> i32 {
        match self {
            Verdict::Block { .. } => EXIT_BLOCK,
            _ => EXIT_ALLOW,
        }
    }

    /// The stdout payload for this verdict: JSON for a block, nothing else
    pub fn protocol_json(&self) -> Option<String> {
        match self {
            Verdict::Block { message, .. } => {
                let payload = BlockedOutput {
                    status: "blocked",
                    message,
                };
                Some(serde_json::to_string(&payload).unwrap_or_else(|_| {
                    r#"{"status":"blocked","message":"command blocked"}"#.to_string()
                }))
            }
            _ => None,
        }
    }
}

/// Wrap a warning message in ANSI yellow for terminal visibility
pub fn format_warning(message: &str) -> String {
    format!("\x1b[33m{}\x1b[0m", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warn_verdict() -> Verdict {
        Verdict::Warn {
            warnings: vec![Warning {
                rule_id: "rm-workspace".to_string(),
                message: "Warning: Deleting from /content workspace".to_string(),
            }],
        }
    }

    fn block_verdict() -> Verdict {
        Verdict::Block {
            rule_id: "rm-root".to_string(),
            message: "Refusing to delete root directory /".to_string(),
        }
    }

    #[test]
    fn test_exit_status_mapping() {
        assert_eq!(Verdict::Allow.exit_status(), EXIT_ALLOW);
        assert_eq!(warn_verdict().exit_status(), EXIT_ALLOW);
        assert_eq!(block_verdict().exit_status(), EXIT_BLOCK);
    }

    #[test]
    fn test_allow_has_no_protocol_output() {
        assert!(Verdict::Allow.protocol_json().is_none());
    }

    #[test]
    fn test_warn_has_no_protocol_output() {
        // Warnings go to stderr only; stdout stays clean.
        assert!(warn_verdict().protocol_json().is_none());
    }

    #[test]
    fn test_block_protocol_json() {
        let json = block_verdict().protocol_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "blocked");
        assert_eq!(value["message"], "Refusing to delete root directory /");
    }

    #[test]
    fn test_format_warning_wraps_ansi() {
        let line = format_warning("Warning: something");
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.ends_with("\x1b[0m"));
        assert!(line.contains("Warning: something"));
    }

    #[test]
    fn test_rule_id_accessor() {
        assert_eq!(Verdict::Allow.rule_id(), None);
        assert_eq!(warn_verdict().rule_id(), Some("rm-workspace"));
        assert_eq!(block_verdict().rule_id(), Some("rm-root"));
    }
}
