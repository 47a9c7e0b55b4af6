//! JSONL audit logging for colab-guardrails
//!
//! Records every decision to a JSONL file for later analysis. This is the
//! diagnostic channel; it is separate from the hook protocol's stdout and
//! stderr, and a failure to write it never changes a verdict.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::HookInput;
use crate::output::Verdict;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    Warn,
    Disabled,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Log level (ALLOWED, BLOCKED, WARN, DISABLED)
    pub level: LogLevel,

    /// Tool that was invoked
    pub tool: String,

    /// Rule that decided the verdict (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// Summary of the request
    pub input_summary: String,

    /// Messages attached to the verdict
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,

    /// Session ID (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create an audit entry from a request and its verdict
    pub fn new(input: &HookInput, verdict: &Verdict, disabled: bool) -> Self {
        let (level, rule_id, messages) = if disabled {
            (LogLevel::Disabled, None, Vec::new())
        } else {
            match verdict {
                Verdict::Allow => (LogLevel::Allowed, None, Vec::new()),
                Verdict::Warn { warnings } => (
                    LogLevel::Warn,
                    warnings.first().map(|w| w.rule_id.clone()),
                    warnings.iter().map(|w| w.message.clone()).collect(),
                ),
                Verdict::Block { rule_id, message } => (
                    LogLevel::Blocked,
                    Some(rule_id.clone()),
                    vec![message.clone()],
                ),
            }
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: input.tool_name.clone(),
            rule_id,
            input_summary: input.summary(),
            messages,
            session_id: input.session_id.clone(),
        }
    }
}

/// Audit logger
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` disables logging
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a verdict
    pub fn log_verdict(
        &mut self,
        input: &HookInput,
        verdict: &Verdict,
        disabled: bool,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(input, verdict, disabled);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self { writer: None }
    }
}
