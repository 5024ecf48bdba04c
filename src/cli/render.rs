//! `bingo render`: full pipeline from song list to PDF.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use music_bingo::render::DEFAULT_MENU_URL;
use music_bingo::{RenderConfig, generate_cards, output_file_name, parse_song_list, render_cards_pdf};
use tracing::info;

use crate::cli::common::{GenerationArgs, SongInputArgs};
use crate::cli::event::EventFile;
use crate::cli::utils::{default_event_date, write_output};

/// Logo picked up automatically when none is configured.
const DEFAULT_LOGO: &str = "assets/logo.png";

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: SongInputArgs,
    #[command(flatten)]
    pub generation: GenerationArgs,
    /// JSON event file with defaults for the flags below.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Date label printed on every card (default: today).
    #[arg(long = "event-date")]
    pub event_date: Option<String>,
    /// Logo image for the page header.
    #[arg(long)]
    pub logo: Option<PathBuf>,
    /// First optional event link.
    #[arg(long = "event-url-1")]
    pub event_url_1: Option<String>,
    /// Second optional event link.
    #[arg(long = "event-url-2")]
    pub event_url_2: Option<String>,
    /// Menu link, always printed.
    #[arg(long = "menu-url")]
    pub menu_url: Option<String>,
    /// Leave the card id caption off the pages.
    #[arg(long = "no-card-id")]
    pub no_card_id: bool,
    /// Output PDF path (`-` for stdout; default derived from the event date).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

pub fn handle(args: RenderArgs) -> Result<()> {
    let event = match args.config.as_deref() {
        Some(path) => EventFile::load(path)?,
        None => EventFile::default(),
    };

    let text = args.input.read()?;
    let parsed = parse_song_list(&text);
    info!(
        songs = parsed.songs.len(),
        artists = parsed.unique_artists.len(),
        titles = parsed.unique_titles.len(),
        ignored = parsed.ignored_lines.len(),
        "parsed song list"
    );

    let options = args.generation.resolve(event.count, event.seed)?;
    let cards = generate_cards(&parsed.unique_artists, &parsed.unique_titles, &options)
        .context("card generation failed")?;

    let config = RenderConfig {
        event_date: args
            .event_date
            .or(event.event_date)
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(default_event_date),
        logo_path: args.logo.or(event.logo).or_else(discover_logo),
        event_url_1: non_blank(args.event_url_1.or(event.event_url_1)),
        event_url_2: non_blank(args.event_url_2.or(event.event_url_2)),
        menu_url: non_blank(args.menu_url.or(event.menu_url))
            .unwrap_or_else(|| DEFAULT_MENU_URL.to_string()),
        show_card_id: !args.no_card_id && event.show_card_id.unwrap_or(true),
    };

    let pdf = render_cards_pdf(&cards, &config).context("failed to render cards")?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(output_file_name(&config.event_date)));
    write_output(&output, &pdf)?;

    if output.as_os_str() != "-" {
        println!("Rendered {} card(s) to {}", cards.len(), output.display());
    }
    Ok(())
}

fn discover_logo() -> Option<PathBuf> {
    let path = Path::new(DEFAULT_LOGO);
    path.exists().then(|| path.to_path_buf())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
