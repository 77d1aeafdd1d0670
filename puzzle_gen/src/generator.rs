use std::{collections::HashSet, ops::Range};

use common::board::SolutionBoard;
use itertools::Itertools;
use log::{debug, info, trace};
use rand::{seq::IndexedRandom, Rng};
use util::{
  error::{OrientileError, OrientileResult},
  pos::Pos,
};
use word_dict::WordCorpus;

use crate::{
  fitter::{fit_word, paint_word, required_suffix},
  path::{clear_invalid, clear_len, place_random_path, PathOutcome},
};

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
  pub width: u32,
  pub height: u32,
  /// Paths tried per board before it is judged.
  pub chain_attempts: u32,
  /// Lengths a placed word may have.
  pub word_lengths: Range<u32>,
  /// Boards with more blank cells than this are thrown away.
  pub max_blank_cells: usize,
  pub max_board_attempts: u32,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      width: 4,
      height: 4,
      chain_attempts: 100,
      word_lengths: 4..7,
      max_blank_cells: 2,
      max_board_attempts: 10_000,
    }
  }
}

#[derive(Clone, Debug)]
pub struct GeneratedBoard {
  pub board: SolutionBoard,
  /// Words in the order they were placed.
  pub words: Vec<String>,
}

pub struct Generator<'a> {
  corpus: &'a WordCorpus,
  config: GeneratorConfig,
}

impl<'a> Generator<'a> {
  pub fn new(corpus: &'a WordCorpus, config: GeneratorConfig) -> Self {
    Self { corpus, config }
  }

  pub fn config(&self) -> &GeneratorConfig {
    &self.config
  }

  /// Builds boards until one has few enough blank cells.
  pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> OrientileResult<GeneratedBoard> {
    if self.config.width == 0 || self.config.height == 0 {
      return Err(OrientileError::Unsatisfiable("Board dimensions must be positive".to_owned()).into());
    }
    if self.config.width.checked_mul(self.config.height).map_or(true, |area| area > i32::MAX as u32) {
      return Err(
        OrientileError::Unsatisfiable(format!(
          "A {}x{} board has too many cells",
          self.config.width, self.config.height
        ))
        .into(),
      );
    }
    if !self.corpus.has_words_in(self.config.word_lengths.clone()) {
      return Err(
        OrientileError::Unsatisfiable(format!(
          "Corpus has no words with length in {:?}",
          self.config.word_lengths
        ))
        .into(),
      );
    }

    for attempt in 1..=self.config.max_board_attempts {
      let generated = self.generate_board(rng)?;
      let blank_count = generated.board.blank_letter_count();
      if blank_count <= self.config.max_blank_cells {
        info!(
          "Generated board on attempt {attempt} with words: {}",
          generated.words.iter().join(", ")
        );
        return Ok(generated);
      }
      debug!("Rejected board attempt {attempt} with {blank_count} blank cells");
    }

    Err(
      OrientileError::Unsatisfiable(format!(
        "No board with at most {} blank cells after {} attempts",
        self.config.max_blank_cells, self.config.max_board_attempts
      ))
      .into(),
    )
  }

  /// One pass of path placement over a fresh board. The result may have any
  /// number of blank cells.
  pub fn generate_board<R: Rng + ?Sized>(&self, rng: &mut R) -> OrientileResult<GeneratedBoard> {
    let mut board = SolutionBoard::new(self.config.width, self.config.height);
    let mut used = HashSet::new();
    let mut words = Vec::new();

    for _ in 0..self.config.chain_attempts {
      let Some(&start) = board.blank_edge_positions().choose(rng) else {
        break;
      };

      let outcome = place_random_path(&mut board, start, rng);
      let path = match outcome {
        PathOutcome::Placed(_) => board.trace(start).unwrap_or_default(),
        PathOutcome::DeadEnd => Vec::new(),
      };

      match self.fit_path(&mut board, &path, &used, rng)? {
        Some(word) => {
          trace!("Placed \"{word}\" from {start}");
          used.insert(word.clone());
          words.push(word);
        }
        None => match outcome {
          PathOutcome::Placed(len) => clear_len(&mut board, start, len),
          PathOutcome::DeadEnd => clear_invalid(&mut board, start),
        },
      }
    }

    Ok(GeneratedBoard { board, words })
  }

  fn fit_path<R: Rng + ?Sized>(
    &self,
    board: &mut SolutionBoard,
    path: &[Pos],
    used: &HashSet<String>,
    rng: &mut R,
  ) -> OrientileResult<Option<String>> {
    let length = path.len() as u32;
    if !self.config.word_lengths.contains(&length) {
      return Ok(None);
    }

    let suffix = required_suffix(board, path);
    let Some(word) = fit_word(self.corpus, length, &suffix, used, rng) else {
      trace!("No unused {length}-letter word ends with \"{suffix}\"");
      return Ok(None);
    };

    paint_word(board, path, word)?;
    Ok(Some(word.to_owned()))
  }
}
