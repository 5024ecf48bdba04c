//! Shared clap argument groups.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use music_bingo::core::{DEFAULT_CARD_COUNT, DEFAULT_MAX_ATTEMPTS_PER_CARD};
use music_bingo::{GenerateOptions, parse_seed};

use crate::cli::utils::read_text_arg;

/// Where the song list comes from.
#[derive(Args, Debug)]
pub struct SongInputArgs {
    /// Song list file (`-` or omitted for stdin).
    pub input: Option<PathBuf>,
    /// Inline song list text instead of a file.
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
}

impl SongInputArgs {
    /// Read the song list, rejecting input that is only whitespace.
    pub fn read(&self) -> Result<String> {
        let text = read_text_arg(self.text.clone(), self.input.clone())?;
        if text.trim().is_empty() {
            bail!("provide a song list (inline with --text, a file, or stdin)");
        }
        Ok(text)
    }
}

/// Card generation knobs.
#[derive(Args, Debug)]
pub struct GenerationArgs {
    /// Number of cards to generate (1-1000, default 200).
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub count: Option<u32>,
    /// Seed for reproducible batches (negative values allowed).
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,
    /// Resampling budget per card before giving up.
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS_PER_CARD)]
    pub max_attempts: usize,
}

impl GenerationArgs {
    /// Combine flags with values from an event file; flags win.
    pub fn resolve(&self, file_count: Option<u32>, file_seed: Option<u64>) -> Result<GenerateOptions> {
        let count = self
            .count
            .or(file_count)
            .map(|c| c as usize)
            .unwrap_or(DEFAULT_CARD_COUNT);
        let seed = match self.seed.as_deref() {
            Some(raw) => parse_seed(raw)?,
            None => file_seed,
        };
        Ok(GenerateOptions {
            count,
            seed,
            max_attempts_per_card: self.max_attempts,
        })
    }
}
