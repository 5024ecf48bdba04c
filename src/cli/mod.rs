//! Command-line interface wiring for the `bingo` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod cards;
pub mod common;
pub mod event;
pub mod parse;
pub mod render;
pub mod utils;

/// Parsed CLI entrypoint for the `bingo` binary.
#[derive(Parser, Debug)]
#[command(name = "bingo", version, about = "Music bingo card generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a song list and report what was recognised.
    Parse(parse::ParseArgs),
    /// Generate unique cards and list their ids.
    Cards(cards::CardsArgs),
    /// Generate unique cards and render them to a PDF.
    Render(render::RenderArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse(args) => parse::handle(args),
        Command::Cards(args) => cards::handle(args),
        Command::Render(args) => render::handle(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_takes_a_positional_file() {
        let cli = Cli::try_parse_from(["bingo", "parse", "songs.txt", "--json"]).unwrap();
        let Command::Parse(args) = cli.command else {
            panic!("expected parse");
        };
        assert_eq!(args.input.input, Some(PathBuf::from("songs.txt")));
        assert!(args.json);

        assert!(Cli::try_parse_from(["bingo", "parse", "songs.txt", "--text", "A - B"]).is_err());
    }

    #[test]
    fn negative_seed_flag_is_accepted() {
        let cli = Cli::try_parse_from(["bingo", "cards", "--seed", "-4", "-n", "3"]).unwrap();
        let Command::Cards(args) = cli.command else {
            panic!("expected cards");
        };
        let options = args.generation.resolve(None, None).unwrap();
        assert_eq!(options.seed, Some(u64::MAX - 3));
        assert_eq!(options.count, 3);
    }
}
