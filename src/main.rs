#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod play;
mod session;

use std::io::{self, BufRead};

use args::Args;
use chrono::Local;
use clap::Parser;
use log::info;
use play::{render_session, render_tray, PlayerCommand};
use puzzle_gen::schedule::PuzzleSchedule;
use rand::{rngs::StdRng, SeedableRng};
use session::{GameState, Session};
use util::error::OrientileResult;
use word_dict::Dictionary;

fn print_session(session: &Session) {
  print!("{}", render_session(session));
  println!("Tiles: {}", render_tray(session));
}

fn play(session: &mut Session, dictionary: &Dictionary) -> OrientileResult<GameState> {
  print!("{}", session.solution().render_ansi(false));
  print_session(session);

  for line in io::stdin().lock().lines() {
    let command = match line?.parse::<PlayerCommand>() {
      Ok(command) => command,
      Err(err) => {
        println!("{err}");
        continue;
      }
    };

    match command {
      PlayerCommand::Place { tile, pos } => {
        if let Err(err) = session.place_tile(tile, pos) {
          println!("{err}");
          continue;
        }
      }
      PlayerCommand::Lift { tile } => {
        if session.lift_tile(tile).is_none() {
          println!("Tile {tile} is not on the board");
          continue;
        }
      }
      PlayerCommand::Show => {}
      PlayerCommand::Quit => break,
    }

    let state = session.validate(dictionary);
    print_session(session);
    if state != GameState::NotWon {
      return Ok(state);
    }
  }

  Ok(session.game_state())
}

fn main() -> OrientileResult {
  env_logger::init();
  let args = Args::parse();

  let key = args
    .date
    .clone()
    .unwrap_or_else(|| PuzzleSchedule::date_key(Local::now().date_naive()));
  let solution = PuzzleSchedule::load(&args.puzzles)?.board(&key)?;
  let dictionary = Dictionary::load(&args.dictionary)?;
  info!("Playing {key} with {} dictionary words", dictionary.len());

  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };
  let mut session = Session::new(solution, &mut rng);

  match play(&mut session, &dictionary)? {
    GameState::WonConfirmed => println!("Solved!"),
    GameState::WonAlternate => println!("Solved, with some words of your own!"),
    GameState::NotWon => println!("Come back and finish {key} later."),
  }
  Ok(())
}
