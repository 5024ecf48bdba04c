//! Core domain primitives: song list parsing, the card type, and unique card generation.

pub mod card;
pub mod generator;
pub mod parser;
pub mod rng;

pub use card::{CARD_ID_LEN, Card, GRID_CELLS, fingerprint};
pub use generator::{
    DEFAULT_CARD_COUNT, DEFAULT_MAX_ATTEMPTS_PER_CARD, GenerateError, GenerateOptions,
    generate_cards, generate_cards_with, parse_seed,
};
pub use parser::{ParseResult, parse_song_list};
pub use rng::{BingoRng, RandomSource};
