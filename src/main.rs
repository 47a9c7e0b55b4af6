//! colab-guardrails - Command-safety hook for Claude Code in Google Colab
//!
//! Reads one PreToolUse request from stdin, classifies the command, and
//! reports the verdict to the host:
//!
//! - block: `{"status":"blocked","message":...}` on stdout, exit 2
//! - warn: advisory lines on stderr, exit 0
//! - allow: no output, exit 0
//!
//! Everything that goes wrong inside the hook itself resolves to allow.
//!
//! # Usage
//!
//! ```bash
//! echo '{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}' | colab-guardrails
//! ```

use std::env;
use std::error::Error;
use std::io::{self, Read};
use std::process;

use colab_guardrails::{
    audit::AuditLogger,
    config::Config,
    format_warning,
    output::Warning,
    Gate, HookInput, Verdict, EXIT_ALLOW,
};

/// Print version information
fn print_version() {
    println!("colab-guardrails {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"colab-guardrails - Command-safety hook for Claude Code in Google Colab

USAGE:
    colab-guardrails [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -d, --dry-run           Dry-run mode (report blocks as warnings but allow)
    -c, --config PATH       Path to config file

ENVIRONMENT:
    COLAB_GUARDRAILS_DISABLED=1   Disable all checks (still logs)
    COLAB_GUARDRAILS_WARN_ONLY=1  Warn but don't block

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "type": "command",
          "command": "~/.claude/colab-guardrails/colab-guardrails",
          "timeout": 5000,
          "tools": ["Bash"]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

/// True when an override variable is set to "1", matching the documented
/// usage; `FLAG=0` and `FLAG=` leave the checks on
fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Build the gate: shared builtins, plus the configured rules file when one
/// exists. A rules file that fails to load leaves the builtins in place.
fn build_gate(config: &Config) -> Result<Gate, Box<dyn Error>> {
    let mut gate = Gate::builtin()?;

    if let Some(path) = config.rules_path() {
        if path.exists() {
            match colab_guardrails::rules::custom::RulesFile::load(&path) {
                Ok(rules) => {
                    rules.extend_gate(&mut gate);
                }
                Err(e) => {
                    eprintln!("Warning: Failed to load rules from {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(gate)
}

/// Handle one request end to end and return the exit status.
///
/// This is the only place classification errors surface; `main` maps any
/// `Err` to allow.
fn run(args: &Args, config: &Config) -> Result<i32, Box<dyn Error>> {
    let mut input_json = String::new();
    io::stdin().read_to_string(&mut input_json)?;

    // No input = nothing to check, allow.
    if input_json.trim().is_empty() {
        return Ok(EXIT_ALLOW);
    }

    // Malformed input is not an error for classification purposes.
    let input = match HookInput::from_json(&input_json) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Warning: unparseable hook input (allowing): {}", e);
            return Ok(EXIT_ALLOW);
        }
    };

    let mut logger = AuditLogger::new(config.audit_path().as_deref());

    // Disabled or not the shell tool: allow without invoking the gate.
    let disabled = env_flag("COLAB_GUARDRAILS_DISABLED");
    if disabled || !input.is_shell_tool() {
        if let Err(e) = logger.log_verdict(&input, &Verdict::Allow, disabled) {
            eprintln!("Warning: Failed to write audit log: {}", e);
        }
        return Ok(EXIT_ALLOW);
    }

    let extended = if config.rules_path().is_some() {
        Some(build_gate(config)?)
    } else {
        None
    };
    let gate: &Gate = match extended.as_ref() {
        Some(gate) => gate,
        None => Gate::shared(),
    };

    let mut verdict = gate.classify(&input.tool_input.command);

    // Operator overrides downgrade blocks to warnings; the gate itself
    // stays untouched.
    let warn_only = args.dry_run || env_flag("COLAB_GUARDRAILS_WARN_ONLY");
    if warn_only {
        if let Verdict::Block { rule_id, message } = verdict {
            verdict = Verdict::Warn {
                warnings: vec![Warning { rule_id, message }],
            };
        }
    }

    if let Err(e) = logger.log_verdict(&input, &verdict, false) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    if let Some(json) = verdict.protocol_json() {
        println!("{}", json);
    }
    for warning in verdict.warnings() {
        eprintln!("{}", format_warning(&warning.message));
    }

    Ok(verdict.exit_status())
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    // Fail open: the hook's own failure must never block the session.
    let code = match run(&args, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Warning: guardrails error (allowing): {}", e);
            EXIT_ALLOW
        }
    };

    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_flag_requires_value_one() {
        // Dedicated variable name so parallel tests cannot race on it.
        let name = "COLAB_GUARDRAILS_ENV_FLAG_TEST";
        env::set_var(name, "1");
        assert!(env_flag(name));
        env::set_var(name, "0");
        assert!(!env_flag(name));
        env::set_var(name, "");
        assert!(!env_flag(name));
        env::remove_var(name);
        assert!(!env_flag(name));
    }
}
