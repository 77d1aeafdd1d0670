#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::path::Path;

use args::{Args, Command, CorpusSource};
use chrono::Local;
use clap::Parser;
use log::info;
use puzzle_gen::{
  generator::{Generator, GeneratorConfig},
  schedule::PuzzleSchedule,
};
use rand::{rngs::StdRng, SeedableRng};
use util::{error::OrientileResult, time::time_fn};
use word_dict::WordCorpus;

fn build_corpus(books: &Path, dictionary: &Path, out: &Path) -> OrientileResult {
  let corpus = WordCorpus::load(books, dictionary)?;
  corpus.save(out)?;
  info!("Wrote {} words to {}", corpus.len(), out.display());
  Ok(())
}

fn generator_config(source: &CorpusSource) -> GeneratorConfig {
  GeneratorConfig {
    width: source.width,
    height: source.height,
    ..GeneratorConfig::default()
  }
}

fn print_test_board(source: &CorpusSource, seed: Option<u64>) -> OrientileResult {
  let corpus = WordCorpus::read(&source.corpus)?;
  let generator = Generator::new(&corpus, generator_config(source));
  let mut rng = match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };

  let (time, generated) = time_fn(|| generator.generate(&mut rng));
  let generated = generated?;
  info!("Took {}s", time.as_secs_f32());

  println!("{}", generated.board.render_ansi(true));
  println!("{}", generated.board.serialize());
  Ok(())
}

fn schedule_daily(source: &CorpusSource, puzzles: &Path, backups: &Path, days: u32) -> OrientileResult {
  let corpus = WordCorpus::read(&source.corpus)?;
  let generator = Generator::new(&corpus, generator_config(source));
  let mut rng = StdRng::from_os_rng();
  let today = Local::now().date_naive();

  PuzzleSchedule::backup(puzzles, backups, today, &mut rng)?;
  let mut schedule = PuzzleSchedule::load(puzzles)?;
  let added = schedule.fill_days(today, days, || {
    generator.generate(&mut rng).map(|generated| generated.board)
  })?;
  schedule.save(puzzles)?;

  info!(
    "Added {} puzzles ({}x{}), {} scheduled in total",
    added.len(),
    generator.config().width,
    generator.config().height,
    schedule.len()
  );
  Ok(())
}

fn main() -> OrientileResult {
  env_logger::init();
  let args = Args::parse();

  match &args.command {
    Command::BuildCorpus { books, dictionary, out } => build_corpus(books, dictionary, out),
    Command::Test { source, seed } => print_test_board(source, *seed),
    Command::Daily { source, puzzles, backups, days } => {
      schedule_daily(source, puzzles, backups, *days)
    }
  }
}
