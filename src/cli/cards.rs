//! `bingo cards`: generate cards without rendering them.

use anyhow::{Context, Result};
use clap::Args;
use music_bingo::{generate_cards, parse_song_list};

use crate::cli::common::{GenerationArgs, SongInputArgs};

#[derive(Args, Debug)]
pub struct CardsArgs {
    #[command(flatten)]
    pub input: SongInputArgs,
    #[command(flatten)]
    pub generation: GenerationArgs,
    /// Print the cards as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: CardsArgs) -> Result<()> {
    let text = args.input.read()?;
    let parsed = parse_song_list(&text);
    let options = args.generation.resolve(None, None)?;
    let cards = generate_cards(&parsed.unique_artists, &parsed.unique_titles, &options)
        .context("card generation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    for (idx, card) in cards.iter().enumerate() {
        println!("Card {:03} {}", idx + 1, card.card_id());
    }
    Ok(())
}
