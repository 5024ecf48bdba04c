//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve plain-text input for commands that accept either inline strings or files.
pub fn read_text_arg(text: Option<String>, from: Option<PathBuf>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    if let Some(path) = from {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        let bytes = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        return String::from_utf8(bytes)
            .with_context(|| format!("{} is not UTF-8 text", path.display()));
    }
    read_stdin()
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Persist bytes either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content)?;
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Today's date the way it is printed on cards, e.g. `May 1, 2026`.
pub fn default_event_date() -> String {
    chrono::Local::now().format("%B %-d, %Y").to_string()
}
