use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use vocab_cli::commands::lexicon_ops;
use vocab_cli::trace_init::init_tracing;
use vocab_core::lexicon::Direction;

#[derive(Parser)]
#[command(name = "vocabtool", about = "Bidirectional word-translation utility")]
struct Cli {
    /// Path to the lexicon store (JSON)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Source language → target language
    Forward,
    /// Target language → source language
    Reverse,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Reverse => Direction::Reverse,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Translate a sentence word-by-word
    Translate {
        /// Text to translate
        text: String,
        /// Translation direction
        #[arg(short, long, value_enum, default_value = "forward")]
        direction: DirectionArg,
    },

    /// Register a word with one or more translations
    Add {
        /// Word to register
        key: String,
        /// Translations for the word
        values: Vec<String>,
        /// Direction the word belongs to
        #[arg(short, long, value_enum, default_value = "forward")]
        direction: DirectionArg,
    },

    /// List all entries for one direction
    List {
        /// Direction to list
        #[arg(short, long, value_enum, default_value = "forward")]
        direction: DirectionArg,
    },

    /// Interactive translate/add menu loop
    Interactive,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let store = cli
        .store
        .unwrap_or_else(|| PathBuf::from(lexicon_ops::default_store_path()));

    match cli.command {
        Command::Translate { text, direction } => {
            lexicon_ops::translate(&store, direction.into(), &text);
        }
        Command::Add {
            key,
            values,
            direction,
        } => {
            lexicon_ops::add(&store, direction.into(), &key, &values);
        }
        Command::List { direction } => {
            lexicon_ops::list(&store, direction.into());
        }
        Command::Interactive => {
            lexicon_ops::interactive(&store);
        }
    }
}
