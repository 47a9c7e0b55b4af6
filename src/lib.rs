//! colab-guardrails - Command-safety hook for Claude Code in Google Colab
//!
//! A PreToolUse hook that classifies every proposed shell command as allow,
//! warn, or block before Claude Code executes it. Commands that would delete
//! the root filesystem, wipe the Google Drive mount, or kill the Colab
//! session are refused; risky-but-legitimate operations get an advisory.
//!
//! # Features
//!
//! - **Ordered rule tables**: block rules first (first match wins), then all
//!   warn rules (a command can collect several advisories)
//! - **Fail-open**: malformed input or an internal error always resolves to
//!   allow; the hook must never be more dangerous than having no hook
//! - **Custom rules**: extra block/warn patterns via a TOML rules file
//! - **Audit logging**: JSONL log of all decisions
//!
//! # Example
//!
//! ```
//! use colab_guardrails::{Gate, HookInput};
//!
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#;
//! let request = HookInput::from_json(input).unwrap();
//!
//! let verdict = Gate::shared().classify(&request.tool_input.command);
//! assert!(verdict.is_block());
//! ```

pub mod audit;
pub mod config;
pub mod gate;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use gate::{Gate, GateError};
pub use input::{HookInput, SHELL_TOOL};
pub use output::{format_warning, Verdict, Warning, EXIT_ALLOW, EXIT_BLOCK};
