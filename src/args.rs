use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Schedule written by `puzzle_gen daily`.
  #[arg(long, default_value = "site/puzzles.json")]
  pub puzzles: PathBuf,

  /// Day to play, as `YYYY-M-D`. Defaults to today.
  #[arg(long)]
  pub date: Option<String>,

  #[arg(long, default_value = "site/dictionary_full.txt")]
  pub dictionary: PathBuf,

  /// Seed for the tile shuffle.
  #[arg(long)]
  pub seed: Option<u64>,
}
