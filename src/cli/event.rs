//! Optional JSON event file holding per-event defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventFile {
    pub event_date: Option<String>,
    pub logo: Option<PathBuf>,
    pub event_url_1: Option<String>,
    pub event_url_2: Option<String>,
    pub menu_url: Option<String>,
    pub show_card_id: Option<bool>,
    pub count: Option<u32>,
    pub seed: Option<u64>,
}

impl EventFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read event file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse event file {}", path.display()))
    }
}
