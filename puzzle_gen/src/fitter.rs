use std::collections::HashSet;

use common::board::{Letter, SolutionBoard, BLANK_LETTER};
use rand::{seq::IndexedRandom, Rng};
use util::{
  error::{OrientileError, OrientileResult},
  pos::Pos,
};
use word_dict::WordCorpus;

/// Letters already fixed along `path` by earlier chains, with the leading run
/// of blank cells dropped. Blanks after the first fixed letter are kept as
/// `BLANK_LETTER`, which no corpus word can end with.
pub fn required_suffix(board: &SolutionBoard, path: &[Pos]) -> String {
  let letters: String = path
    .iter()
    .map(|&pos| board.slot(pos).map_or(BLANK_LETTER, |slot| slot.letter_char()))
    .collect();
  letters.trim_start_matches(BLANK_LETTER).to_owned()
}

/// Picks a random word of exactly `length` letters ending in `suffix` that
/// has not been used on this board yet.
pub fn fit_word<'a, R: Rng + ?Sized>(
  corpus: &'a WordCorpus,
  length: u32,
  suffix: &str,
  used: &HashSet<String>,
  rng: &mut R,
) -> Option<&'a str> {
  let candidates: Vec<&str> = corpus
    .words_with_length(length)
    .iter()
    .map(String::as_str)
    .filter(|word| word.ends_with(suffix) && !used.contains(*word))
    .collect();
  candidates.choose(rng).copied()
}

/// Writes `word` onto the cells of `path` in order. Directions are left alone.
pub fn paint_word(board: &mut SolutionBoard, path: &[Pos], word: &str) -> OrientileResult {
  if word.chars().count() != path.len() {
    return Err(
      OrientileError::Internal(format!(
        "Word \"{word}\" does not fit a path of length {}",
        path.len()
      ))
      .into(),
    );
  }

  for (&pos, c) in path.iter().zip(word.chars()) {
    let letter = Letter::new(c)
      .ok_or_else(|| OrientileError::Internal(format!("Cannot place '{c}' from \"{word}\"")))?;
    let slot = board
      .slot_mut(pos)
      .ok_or_else(|| OrientileError::Internal(format!("Position {pos} is out of bounds")))?;
    slot.letter = Some(letter);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::collections::HashSet;

  use common::board::{Direction, SolutionBoard};
  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::pos::Pos;
  use word_dict::WordCorpus;

  use super::{fit_word, paint_word, required_suffix};

  fn row_path(len: i32) -> Vec<Pos> {
    (0..len).map(|x| Pos::new(x, 0)).collect()
  }

  #[gtest]
  fn test_required_suffix() {
    let board = SolutionBoard::parse("4x1 -x-xs>t>").unwrap();
    expect_eq!(required_suffix(&board, &row_path(4)), "st");

    let board = SolutionBoard::parse("4x1 -xa>-xt>").unwrap();
    expect_eq!(required_suffix(&board, &row_path(4)), "a-t");

    expect_eq!(required_suffix(&SolutionBoard::new(4, 1), &row_path(4)), "");
  }

  #[gtest]
  fn test_fit_word() {
    let corpus = WordCorpus::from_word_list(["fast", "last", "mist", "fist", "most", "fasten"]);
    let used: HashSet<String> = ["fast".to_owned()].into_iter().collect();

    for seed in 0..16 {
      let mut rng = StdRng::seed_from_u64(seed);
      let word = fit_word(&corpus, 4, "st", &used, &mut rng).unwrap();
      expect_true!(["last", "mist", "fist", "most"].contains(&word));
    }

    let mut rng = StdRng::seed_from_u64(0);
    expect_eq!(fit_word(&corpus, 4, "ast", &used, &mut rng), Some("last"));
    expect_eq!(fit_word(&corpus, 4, "a-t", &used, &mut rng), None);
    expect_eq!(fit_word(&corpus, 5, "", &used, &mut rng), None);
    expect_eq!(fit_word(&corpus, 6, "", &used, &mut rng), Some("fasten"));
  }

  #[gtest]
  fn test_paint_word() {
    let mut board = SolutionBoard::parse("2x2 -x-x -x-x").unwrap();
    for (pos, dir) in [
      (Pos::new(0, 0), Direction::Right),
      (Pos::new(1, 0), Direction::Down),
      (Pos::new(1, 1), Direction::Left),
      (Pos::new(0, 1), Direction::Left),
    ] {
      board.slot_mut(pos).unwrap().direction = Some(dir);
    }
    let path = board.trace(Pos::new(0, 0)).unwrap();

    paint_word(&mut board, &path, "stop").unwrap();
    expect_eq!(board.serialize(), "2x2 s>tv p<o<");
    expect_that!(paint_word(&mut board, &path, "sto"), err(anything()));
    expect_that!(paint_word(&mut board, &path, "St0p"), err(anything()));
  }
}
