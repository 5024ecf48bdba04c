//! Unique music bingo cards from a plain-text song list, rendered to print-ready PDF.
//!
//! The pipeline is `parse_song_list` -> `generate_cards` -> `render_cards_pdf`.

pub mod core;
pub mod render;

pub use crate::core::{
    BingoRng, Card, GenerateError, GenerateOptions, ParseResult, RandomSource, generate_cards,
    generate_cards_with, parse_seed, parse_song_list,
};
pub use crate::render::{
    CodeImageEncoder, QrPngEncoder, RenderConfig, RenderError, output_file_name,
    render_cards_pdf, render_cards_pdf_with,
};
