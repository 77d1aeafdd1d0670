use std::collections::HashSet;

use common::board::{Direction, Slot, SolutionBoard};
use rand::{seq::IndexedRandom, Rng};
use util::pos::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathOutcome {
  /// Number of previously blank cells that were given a direction. The walk
  /// either left the board or ran into an occupied cell.
  Placed(u32),
  /// Every neighbour of the last cell had already been visited.
  DeadEnd,
}

fn walk<R: Rng + ?Sized>(
  board: &mut SolutionBoard,
  current: Pos,
  visited: &mut HashSet<Pos>,
  rng: &mut R,
) -> PathOutcome {
  visited.insert(current);
  if !board.is_blank(current) {
    return PathOutcome::Placed(0);
  }

  // Off-board targets are never visited, so they are always candidates.
  let candidates: Vec<Direction> = Direction::ALL
    .into_iter()
    .filter(|dir| !visited.contains(&(current + dir.diff())))
    .collect();
  let Some(&direction) = candidates.choose(rng) else {
    return PathOutcome::DeadEnd;
  };

  if let Some(slot) = board.slot_mut(current) {
    slot.direction = Some(direction);
  }

  let next = current + direction.diff();
  if !board.in_bounds(next) {
    return PathOutcome::Placed(1);
  }

  match walk(board, next, visited, rng) {
    PathOutcome::DeadEnd => PathOutcome::DeadEnd,
    PathOutcome::Placed(inner) => PathOutcome::Placed(inner + 1),
  }
}

/// Grows a random arrow path from `start`. Directions are written onto the
/// board even when the walk dead-ends; undo with `clear_invalid` or
/// `clear_len`.
pub fn place_random_path<R: Rng + ?Sized>(
  board: &mut SolutionBoard,
  start: Pos,
  rng: &mut R,
) -> PathOutcome {
  walk(board, start, &mut HashSet::new(), rng)
}

/// Blanks cells from `start` along their arrows until reaching a cell with
/// no direction.
pub fn clear_invalid(board: &mut SolutionBoard, start: Pos) {
  let mut current = start;
  while let Some(direction) = board.direction(current) {
    if let Some(slot) = board.slot_mut(current) {
      *slot = Slot::BLANK;
    }
    current += direction.diff();
  }
}

/// Blanks exactly `len` cells from `start` along their arrows.
pub fn clear_len(board: &mut SolutionBoard, start: Pos, len: u32) {
  let mut current = start;
  for _ in 0..len {
    let Some(direction) = board.direction(current) else {
      break;
    };
    if let Some(slot) = board.slot_mut(current) {
      *slot = Slot::BLANK;
    }
    current += direction.diff();
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::collections::HashSet;

  use common::board::{Direction, SolutionBoard};
  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::pos::Pos;

  use super::{clear_invalid, clear_len, place_random_path, walk, PathOutcome};

  #[gtest]
  fn test_dead_end_when_surrounded() {
    let mut board = SolutionBoard::new(3, 3);
    let center = Pos::new(1, 1);
    let mut visited: HashSet<_> = Direction::ALL
      .into_iter()
      .map(|dir| center + dir.diff())
      .collect();

    let mut rng = StdRng::seed_from_u64(1);
    expect_eq!(walk(&mut board, center, &mut visited, &mut rng), PathOutcome::DeadEnd);
    expect_eq!(board, SolutionBoard::new(3, 3));
  }

  #[gtest]
  fn test_occupied_start() {
    let mut board = SolutionBoard::parse("2x1 a>b>").unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    expect_eq!(
      place_random_path(&mut board, Pos::new(0, 0), &mut rng),
      PathOutcome::Placed(0)
    );
    expect_eq!(board.serialize(), "2x1 a>b>");
  }

  #[gtest]
  fn test_corner_next_to_full_board() {
    for seed in 0..32 {
      let mut board = SolutionBoard::parse("2x2 -xa> bvc>").unwrap();
      let mut rng = StdRng::seed_from_u64(seed);
      expect_eq!(
        place_random_path(&mut board, Pos::new(0, 0), &mut rng),
        PathOutcome::Placed(1)
      );
      expect_true!(board.direction(Pos::new(0, 0)).is_some());
      expect_eq!(board.slot(Pos::new(0, 0)).unwrap().letter, None);
    }
  }

  #[gtest]
  fn test_random_walks_roll_back() {
    for seed in 0..200 {
      let mut board = SolutionBoard::new(4, 4);
      let start = Pos::new(0, 2);
      let mut rng = StdRng::seed_from_u64(seed);

      match place_random_path(&mut board, start, &mut rng) {
        PathOutcome::Placed(len) => {
          let path = board.trace(start).unwrap();
          expect_eq!(path.len() as u32, len);
          expect_true!(len >= 1);
          clear_len(&mut board, start, len);
        }
        PathOutcome::DeadEnd => {
          expect_eq!(board.trace(start), None);
          clear_invalid(&mut board, start);
        }
      }
      expect_eq!(board, SolutionBoard::new(4, 4));
    }
  }

  #[gtest]
  fn test_walk_merges_into_existing_chain() {
    // Column 0 is full, so a walk from (1, 0) can only end by exiting or by
    // stepping into column 0.
    for seed in 0..64 {
      let mut board = SolutionBoard::parse("2x3 av-x av-x av-x").unwrap();
      let mut rng = StdRng::seed_from_u64(seed);
      let outcome = place_random_path(&mut board, Pos::new(1, 0), &mut rng);
      let PathOutcome::Placed(len) = outcome else {
        continue;
      };
      let path = board.trace(Pos::new(1, 0)).unwrap();
      expect_true!(path.len() as u32 >= len);
      clear_len(&mut board, Pos::new(1, 0), len);
      expect_eq!(board.serialize(), "2x3 av-x av-x av-x");
    }
  }
}
