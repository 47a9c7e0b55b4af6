//! Hook request parsing
//!
//! Claude Code delivers one JSON payload on stdin per PreToolUse invocation:
//! `{"tool_name": "...", "tool_input": {"command": "...", ...}}`. Only the
//! tool name and the command matter here; every other field is tool-specific
//! and ignored.

use serde::Deserialize;

/// Name of the shell-executing tool; the only one the gate evaluates
pub const SHELL_TOOL: &str = "Bash";

/// One PreToolUse request from Claude Code
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g. "Bash", "Read", "Edit")
    pub tool_name: String,

    /// Tool-specific parameters; only `command` is read
    #[serde(default)]
    pub tool_input: ToolInput,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// Hook event name (e.g. "PreToolUse")
    #[serde(default)]
    pub hook_event_name: Option<String>,
}

/// The command-bearing subset of `tool_input`
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    /// The shell command to run; empty when the tool takes no command
    #[serde(default)]
    pub command: String,
}

impl HookInput {
    /// Parse a request from its JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether this request targets the shell-executing tool
    pub fn is_shell_tool(&self) -> bool {
        self.tool_name == SHELL_TOOL
    }

    /// Get a summary of the request for logging
    pub fn summary(&self) -> String {
        let command = &self.tool_input.command;
        if command.is_empty() {
            format!("{}: <no command>", self.tool_name)
        } else if command.len() > 100 {
            // Cut on a char boundary; byte 100 may land inside a multi-byte
            // character.
            let mut cut = 100;
            while !command.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}: {}...", self.tool_name, &command[..cut])
        } else {
            format!("{}: {}", self.tool_name, command)
        }
    }
}
