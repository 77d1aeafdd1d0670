use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::Args, Clone, Debug)]
pub struct CorpusSource {
  /// Corpus cache written by `build-corpus`.
  #[arg(long, default_value = "corpus.bin")]
  pub corpus: PathBuf,

  #[arg(long, default_value_t = 4)]
  pub width: u32,

  #[arg(long, default_value_t = 4)]
  pub height: u32,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
  /// Count words in the reference texts and cache the generation corpus.
  BuildCorpus {
    /// Directory of plain-text reference documents.
    #[arg(long, default_value = "dictionary/books")]
    books: PathBuf,

    #[arg(long, default_value = "dictionary/dictionary_for_generation.txt")]
    dictionary: PathBuf,

    #[arg(long, default_value = "corpus.bin")]
    out: PathBuf,
  },

  /// Generate a single board and print it.
  Test {
    #[command(flatten)]
    source: CorpusSource,

    #[arg(long)]
    seed: Option<u64>,
  },

  /// Make sure today and the following days have a puzzle.
  Daily {
    #[command(flatten)]
    source: CorpusSource,

    #[arg(long, default_value = "site/puzzles.json")]
    puzzles: PathBuf,

    #[arg(long, default_value = "puzzles_bak")]
    backups: PathBuf,

    #[arg(long, default_value_t = 3)]
    days: u32,
  },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[command(subcommand)]
  pub command: Command,
}
