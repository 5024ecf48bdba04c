//! `bingo parse`: show how a song list is interpreted.

use anyhow::Result;
use clap::Args;
use music_bingo::parse_song_list;

use crate::cli::common::SongInputArgs;

#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: SongInputArgs,
    /// Print the full parse result as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: ParseArgs) -> Result<()> {
    let text = args.input.read()?;
    let parsed = parse_song_list(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("Songs:   {}", parsed.songs.len());
    println!("Artists: {}", parsed.unique_artists.len());
    println!("Titles:  {}", parsed.unique_titles.len());
    if parsed.ignored_lines.is_empty() {
        println!("No lines ignored.");
    } else {
        println!("Ignored {} line(s):", parsed.ignored_lines.len());
        for line in &parsed.ignored_lines {
            println!("  {}", line);
        }
    }
    Ok(())
}
