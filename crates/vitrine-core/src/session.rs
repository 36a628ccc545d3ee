//! Persisted session store.
//!
//! The session is a single optional username kept as a plain string in
//! ${VITRINE_HOME}/session. Presence of the file is the only signal
//! consulted at startup; there is no token, password, or expiry. Trust is
//! entirely client-asserted, mirroring what the remote API expects.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::paths;

/// Reads the stored username, if any.
///
/// An absent or empty file counts as "no session".
pub fn load() -> Result<Option<String>> {
    load_from(&paths::session_path())
}

/// Reads the stored username from a specific path.
pub fn load_from(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    let username = contents.trim();
    Ok((!username.is_empty()).then(|| username.to_string()))
}

/// Persists the username. Overwrites any existing session.
pub fn save(username: &str) -> Result<()> {
    save_to(&paths::session_path(), username)
}

/// Persists the username to a specific path.
/// Uses atomic write (temp file + rename) to prevent corruption.
pub fn save_to(path: &Path, username: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, username.trim())
        .with_context(|| format!("Failed to write session to {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Removes the session. Invoked only by logout.
///
/// A missing file is not an error.
pub fn clear() -> Result<()> {
    clear_at(&paths::session_path())
}

/// Removes the session file at a specific path.
pub fn clear_at(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove session {}", path.display())),
    }
}
