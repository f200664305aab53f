//! Credential setup (`--setup`) and environment check (`--check`).

pub mod check;
pub mod profile;

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::commit::is_affirmative;
use crate::error::SetupError;
use crate::prompter::Prompter;

use self::profile::{
    append_export, export_line, mentions_api_key, profile_path, read_profile,
    remove_api_key_lines, write_profile,
};

pub use check::{CheckReport, check_configuration, print_report};

/// Keys shorter than this are rejected as typos.
pub const MIN_API_KEY_LENGTH: usize = 10;

const DEFAULT_SHELL: &str = "/bin/bash";

/// Where the export line goes, resolved from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupTarget {
    pub shell: String,
    pub home: Option<PathBuf>,
}

impl SetupTarget {
    pub fn from_env() -> Self {
        Self {
            shell: env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string()),
            home: env::var_os("HOME").map(PathBuf::from),
        }
    }
}

/// Ask for an API key and persist it as an export line in the shell profile.
///
/// Returns the profile path that was written.
pub fn run_setup<P: Prompter + ?Sized>(
    prompter: &mut P,
    target: &SetupTarget,
) -> Result<PathBuf, SetupError> {
    println!("Setting up OpenAI API Key...");
    println!("(Get one from: https://platform.openai.com/api-keys)");
    println!();

    let raw = prompter
        .read_line("Please paste your OpenAI API key")
        .map_err(SetupError::ReadFailed)?;
    let api_key = raw.trim().replace('\0', "");

    if api_key.len() < MIN_API_KEY_LENGTH {
        return Err(SetupError::InvalidKey);
    }

    let home = target.home.as_ref().ok_or(SetupError::NoHomeDirectory)?;
    let path = profile_path(&target.shell, home);
    debug!("Using shell profile {}", path.display());

    let mut content = read_profile(&path).map_err(|source| SetupError::ReadProfileFailed {
        path: path.display().to_string(),
        source,
    })?;

    if mentions_api_key(&content) {
        println!("OPENAI_API_KEY already exists in your profile");
        let answer = prompter
            .read_line("Do you want to update it? (y/N)")
            .map_err(SetupError::ReadFailed)?;
        if !is_affirmative(&answer) {
            return Err(SetupError::Cancelled);
        }
        content = remove_api_key_lines(&content);
    }

    let updated = append_export(&content, &api_key);

    if let Err(source) = write_profile(&path, &updated) {
        println!();
        println!("Manual setup:");
        println!("Add this line to your {}:", path.display());
        println!("{}", export_line(&api_key));
        return Err(SetupError::WriteFailed {
            path: path.display().to_string(),
            source,
        });
    }

    println!("API key added to {}", path.display());
    println!();
    println!("To activate the changes:");
    println!("  source {}", path.display());
    println!("Or restart your terminal");
    println!();
    println!("Then run: splitcommit --check");

    Ok(path)
}
