//! Shell profile editing for the API key export line.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::API_KEY_ENV_VAR;

/// Profile file for a login shell: zsh and bash get their rc files,
/// anything else `~/.profile`.
pub fn profile_path(shell: &str, home: &Path) -> PathBuf {
    if shell.contains("zsh") {
        home.join(".zshrc")
    } else if shell.contains("bash") {
        home.join(".bashrc")
    } else {
        home.join(".profile")
    }
}

pub fn export_line(api_key: &str) -> String {
    format!("export {API_KEY_ENV_VAR}=\"{api_key}\"")
}

pub fn mentions_api_key(content: &str) -> bool {
    content.contains(API_KEY_ENV_VAR)
}

/// Drop every line that mentions the key variable.
pub fn remove_api_key_lines(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !line.contains(API_KEY_ENV_VAR))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append the export line, starting it on a fresh line.
pub fn append_export(content: &str, api_key: &str) -> String {
    let mut updated = content.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&export_line(api_key));
    updated.push('\n');
    updated
}

/// Read a profile, treating a missing file as empty.
pub fn read_profile(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// Replace `path` with `content` via a temp file in the same directory.
///
/// Symlinks are followed so dotfile managers keep their link, and the
/// original file's permissions are kept.
pub fn write_profile(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
