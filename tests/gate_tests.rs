//! Integration tests for command classification

use colab_guardrails::{Gate, Verdict};

fn classify(command: &str) -> Verdict {
    Gate::shared().classify(command)
}

// ============================================================================
// Block rules - commands refused outright
// ============================================================================

#[test]
fn test_rm_rf_root_blocked() {
    let verdict = classify("rm -rf /");
    assert!(verdict.is_block());
    match verdict {
        Verdict::Block { message, .. } => assert!(message.contains("root directory")),
        _ => unreachable!(),
    }
}

#[test]
fn test_rm_root_flag_variants_blocked() {
    // The pattern must match regardless of flag order and presence.
    assert!(classify("rm /").is_block());
    assert!(classify("rm -r -f /").is_block());
    assert!(classify("rm -fv -rd /").is_block());
    assert!(classify("rm -rf / ").is_block());
}

#[test]
fn test_rm_root_in_compound_command_blocked() {
    assert!(classify("echo cleaning; rm -rf /").is_block());
    assert!(classify("rm -rf / && echo done").is_block());
    assert!(classify("true || rm -rf /|cat").is_block());
}

#[test]
fn test_rm_home_blocked() {
    assert!(classify("rm -rf ~").is_block());
    assert!(classify("rm -rf ~/data").is_block());
}

#[test]
fn test_rm_root_glob_blocked() {
    assert!(classify("rm -rf /*").is_block());
}

#[test]
fn test_rm_drive_blocked() {
    let verdict = classify("rm -rf /content/drive");
    assert!(verdict.is_block());
    match verdict {
        Verdict::Block { message, .. } => assert!(message.contains("Google Drive")),
        _ => unreachable!(),
    }
    assert!(classify("rm -rf /content/drive/MyDrive/photos").is_block());
}

#[test]
fn test_fork_bomb_blocked() {
    let verdict = classify(":(){ :|:& };:");
    assert!(verdict.is_block());
    match verdict {
        Verdict::Block { message, .. } => assert!(message.contains("Fork bomb")),
        _ => unreachable!(),
    }
    // Whitespace variants of the same shape
    assert!(classify(":() { : | : & } ;:").is_block());
}

#[test]
fn test_kill_init_blocked() {
    assert!(classify("kill -9 1").is_block());
    assert!(classify("kill init").is_block());
    assert!(!classify("kill -9 4321").is_block());
}

#[test]
fn test_dd_to_disk_device_blocked() {
    assert!(classify("dd if=/dev/zero of=/dev/sda").is_block());
    assert!(classify("dd if=img.iso of=/dev/nvme0n1 bs=4M").is_block());
    assert!(classify("dd if=/dev/urandom of=/dev/hdb").is_block());
    // Ordinary file destinations are fine
    assert!(classify("dd if=/dev/zero of=/tmp/swapfile bs=1M count=1024").is_allow());
}

#[test]
fn test_chmod_777_root_blocked() {
    assert!(classify("chmod 777 /").is_block());
    assert!(classify("chmod -R 777 /").is_block());
    assert!(classify("chmod 777 /content/scripts").is_allow());
}

#[test]
fn test_case_insensitive() {
    assert!(classify("RM -RF /").is_block());
    assert!(classify("Kill -9 1").is_block());
}

// ============================================================================
// Warn rules - advisories that still allow
// ============================================================================

#[test]
fn test_rm_workspace_warns() {
    let verdict = classify("rm -rf /content/cache");
    assert!(!verdict.is_block());
    let warnings = verdict.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].rule_id, "rm-workspace");
    assert!(warnings[0].message.contains("/content workspace"));
    // Warnings never change the exit status
    assert_eq!(verdict.exit_status(), colab_guardrails::EXIT_ALLOW);
}

#[test]
fn test_pip_user_install_warns() {
    let verdict = classify("pip install --user somepkg");
    assert!(!verdict.is_block());
    assert_eq!(verdict.warnings().len(), 1);
    assert_eq!(verdict.exit_status(), colab_guardrails::EXIT_ALLOW);
}

#[test]
fn test_multiple_warnings_collected_in_order() {
    let verdict = classify("rm -rf /content/cache && pip install --user somepkg");
    let warnings = verdict.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].rule_id, "rm-workspace");
    assert_eq!(warnings[1].rule_id, "pip-user-install");
}

// ============================================================================
// Precedence - block shadows warn
// ============================================================================

#[test]
fn warn_rule_shadowed_by_drive_block() {
    // /content/drive matches both the drive block rule and the workspace
    // warn pattern; block rules run first, so the warn rule never fires.
    let verdict = classify("rm -rf /content/drive");
    assert!(verdict.is_block());
    assert_eq!(verdict.rule_id(), Some("rm-drive"));
    assert!(verdict.warnings().is_empty());
}

#[test]
fn test_block_message_is_first_declared_match() {
    // Matches both rm-root-glob and rm-root; declaration order decides,
    // not position in the command text.
    assert_eq!(classify("rm -rf /* ; rm -rf /").rule_id(), Some("rm-root"));
}

// ============================================================================
// Allow - no match anywhere
// ============================================================================

#[test]
fn test_safe_commands_allowed() {
    assert!(classify("ls -la /content").is_allow());
    assert!(classify("pip install numpy").is_allow());
    assert!(classify("git status").is_allow());
    assert!(classify("rm -rf ./build").is_allow());
    assert!(classify("python train.py --epochs 10").is_allow());
}

#[test]
fn test_empty_command_allowed() {
    assert!(classify("").is_allow());
}

#[test]
fn test_classification_is_idempotent() {
    for command in ["rm -rf /", "rm -rf /content/cache", "ls -la"] {
        let first = classify(command);
        let second = classify(command);
        assert_eq!(first, second, "verdict changed between runs for {command:?}");
    }
}
