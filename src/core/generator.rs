use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::core::card::{Card, GRID_CELLS, fingerprint};
use crate::core::rng::{BingoRng, RandomSource};

pub const DEFAULT_CARD_COUNT: usize = 200;
pub const DEFAULT_MAX_ATTEMPTS_PER_CARD: usize = 1000;

/// Failures of a generation run. `VocabularyTooSmall` and `InvalidInput`
/// are caller mistakes caught before any card is drawn.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("need at least 25 unique {vocabulary}, got {actual}")]
    VocabularyTooSmall {
        vocabulary: &'static str,
        actual: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(
        "unable to generate a unique card for slot {slot} after {attempts} attempts; \
         grow the song list or lower the card count"
    )]
    GenerationExhausted { slot: usize, attempts: usize },
}

impl GenerateError {
    /// True for precondition failures; false for exhaustion.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, GenerateError::GenerationExhausted { .. })
    }
}

/// Knobs for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub count: usize,
    /// Fixed seed for reproducible batches; `None` draws one from the clock.
    pub seed: Option<u64>,
    pub max_attempts_per_card: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_CARD_COUNT,
            seed: None,
            max_attempts_per_card: DEFAULT_MAX_ATTEMPTS_PER_CARD,
        }
    }
}

impl GenerateOptions {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Parse a user-supplied seed. Blank means "no seed".
///
/// Negative seeds are accepted and reinterpreted bit-for-bit, so `-1` is
/// `u64::MAX`.
pub fn parse_seed(raw: &str) -> Result<Option<u64>, GenerateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(seed) = raw.parse::<u64>() {
        return Ok(Some(seed));
    }
    raw.parse::<i64>()
        .map(|seed| Some(seed as u64))
        .map_err(|_| GenerateError::InvalidInput(format!("seed must be a whole number, got '{raw}'")))
}

/// Generate `options.count` pairwise-distinct cards from the vocabularies.
///
/// The same seed and inputs always yield the same card sequence.
pub fn generate_cards(
    artists: &[String],
    titles: &[String],
    options: &GenerateOptions,
) -> Result<Vec<Card>, GenerateError> {
    validate(artists, titles, options)?;
    let seed = options.seed.unwrap_or_else(BingoRng::entropy_seed);
    info!(seed, count = options.count, "generating bingo cards");
    let mut rng = BingoRng::new(seed);
    generate_cards_with(&mut rng, artists, titles, options)
}

/// Same as [`generate_cards`] but draws from a caller-supplied source.
/// `options.seed` is ignored.
pub fn generate_cards_with<R: RandomSource>(
    rng: &mut R,
    artists: &[String],
    titles: &[String],
    options: &GenerateOptions,
) -> Result<Vec<Card>, GenerateError> {
    validate(artists, titles, options)?;

    let mut seen: HashSet<String> = HashSet::with_capacity(options.count);
    let mut cards = Vec::with_capacity(options.count);

    for slot in 0..options.count {
        let mut accepted = None;
        for attempt in 0..options.max_attempts_per_card {
            let card_artists = rng.sample(artists, GRID_CELLS);
            let card_titles = rng.sample(titles, GRID_CELLS);
            let print = fingerprint(&card_artists, &card_titles);
            if seen.contains(&print) {
                debug!(slot, attempt, "duplicate card content, resampling");
                continue;
            }
            let card = Card::new(card_artists, card_titles, &print);
            seen.insert(print);
            accepted = Some(card);
            break;
        }

        match accepted {
            Some(card) => {
                debug!(slot, card_id = card.card_id(), "accepted card");
                cards.push(card);
            }
            None => {
                return Err(GenerateError::GenerationExhausted {
                    slot,
                    attempts: options.max_attempts_per_card,
                });
            }
        }
    }

    Ok(cards)
}

fn validate(
    artists: &[String],
    titles: &[String],
    options: &GenerateOptions,
) -> Result<(), GenerateError> {
    if artists.len() < GRID_CELLS {
        return Err(GenerateError::VocabularyTooSmall {
            vocabulary: "artists",
            actual: artists.len(),
        });
    }
    if titles.len() < GRID_CELLS {
        return Err(GenerateError::VocabularyTooSmall {
            vocabulary: "titles",
            actual: titles.len(),
        });
    }
    if options.count == 0 {
        return Err(GenerateError::InvalidInput("count must be > 0".to_string()));
    }
    if options.max_attempts_per_card == 0 {
        return Err(GenerateError::InvalidInput(
            "max attempts per card must be > 0".to_string(),
        ));
    }
    Ok(())
}
