//! Built-in rule tables for Colab sessions
//!
//! Two ordered lists: `BLOCK_RULES` refuse the command outright,
//! `WARN_RULES` print an advisory but allow it. Declaration order matters:
//! the gate takes the first matching block rule, so more specific patterns
//! must come before broader ones. Patterns are matched case-insensitively
//! against the raw command text with no shell parsing, which means they can
//! be evaded by quoting or variable expansion. That trade keeps the hook
//! fast and predictable; it is an advisory layer, not a sandbox.

use crate::rules::Rule;

/// Commands that are refused outright
pub const BLOCK_RULES: &[Rule] = &[
    // Filesystem destruction. The flag group accepts any mix of -r/-f/-v/-d
    // in any order, or no flags at all.
    Rule::new(
        "rm-root",
        r"rm\s+(-[rfvd]+\s+)*/([\s;|&]|$)",
        "Refusing to delete root directory /",
    ),
    Rule::new(
        "rm-home",
        r"rm\s+(-[rfvd]+\s+)*~([\s;|&/]|$)",
        "Refusing to delete home directory ~",
    ),
    Rule::new(
        "rm-root-glob",
        r"rm\s+(-[rfvd]+\s+)*/\*",
        "Refusing to delete /*",
    ),
    // Google Drive mount. Must precede nothing in particular here, but the
    // matching /content WARN rule never fires for this path because block
    // rules are evaluated first.
    Rule::new(
        "rm-drive",
        r"rm\s+(-[rfvd]+\s+)*/content/drive",
        "Refusing to delete Google Drive mount",
    ),
    // Session killers. The fork bomb is matched by shape (function defined
    // as itself piped to itself in the background), not by command name.
    Rule::new(
        "fork-bomb",
        r":\(\)\s*\{\s*:\s*\|\s*:\s*&\s*\}\s*;",
        "Fork bomb detected",
    ),
    Rule::new(
        "kill-init",
        r"kill\s+(-\d+\s+)*(1|init)\b",
        "Refusing to kill init process",
    ),
    // Raw disk devices only; dd to an ordinary file is fine.
    Rule::new(
        "dd-disk-device",
        r"dd\s+.*of=/dev/(sd[a-z]|nvme|hd[a-z])",
        "Refusing to write directly to disk device",
    ),
    Rule::new(
        "chmod-777-root",
        r"chmod\s+(-[Rrf]+\s+)*777\s+/($|\s)",
        "Refusing chmod 777 on root",
    ),
];

/// Commands that print an advisory but are allowed
pub const WARN_RULES: &[Rule] = &[
    Rule::new(
        "rm-workspace",
        r"rm\s+(-[rfvd]+\s+)*/content\b",
        "Warning: Deleting from /content workspace",
    ),
    Rule::new(
        "pip-user-install",
        r"pip\s+install\s+--user",
        "Warning: Installing packages with --user flag",
    ),
];
