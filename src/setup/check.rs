//! `--check`: report on credentials, debug mode and the git executable.

use crate::config::{API_KEY_ENV_VAR, Config, DEBUG_ENV_VAR};

/// Result of checking the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub api_key_set: bool,
    pub debug: bool,
    pub git_on_path: bool,
}

pub fn check_configuration(config: &Config) -> CheckReport {
    CheckReport {
        api_key_set: config.has_credentials(),
        debug: config.debug,
        git_on_path: which::which("git").is_ok(),
    }
}

/// Print the report in the same order the checks run.
pub fn print_report(report: &CheckReport) {
    println!("Checking configuration...");
    println!();

    if report.api_key_set {
        println!("  [PASS] {API_KEY_ENV_VAR} is set");
    } else {
        println!("  [FAIL] {API_KEY_ENV_VAR} is not set");
        println!();
        println!("To fix this:");
        println!("1. Get your API key from: https://platform.openai.com/api-keys");
        println!("2. Run: splitcommit --setup");
        println!("   or add it to your shell profile (~/.bashrc, ~/.zshrc, ~/.profile):");
        println!("   export {API_KEY_ENV_VAR}=\"your-api-key-here\"");
        println!("3. Reload your shell: source ~/.zshrc (or restart terminal)");
        return;
    }

    if report.git_on_path {
        println!("  [PASS] git executable found");
    } else {
        println!("  [WARN] git executable not found on PATH");
    }

    if report.debug {
        println!("  [INFO] DEBUG mode is enabled");
    } else {
        println!("  [INFO] DEBUG mode is disabled (set {DEBUG_ENV_VAR}=true to enable)");
    }

    println!();
    println!("Configuration looks good!");
}
