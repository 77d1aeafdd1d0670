use util::{grid::Grid, pos::Pos};

use crate::board::SolutionBoard;

/// Arrow links between the cells of a published board.
#[derive(Clone, Debug)]
pub struct ChainGraph {
  point_at: Grid<Option<Pos>>,
  pointed_at_by: Grid<Vec<Pos>>,
  heads: Vec<Pos>,
}

impl ChainGraph {
  pub fn from_board(board: &SolutionBoard) -> Self {
    let mut point_at = Grid::new(board.width(), board.height());
    for pos in board.positions() {
      let target = board
        .direction(pos)
        .map(|dir| pos + dir.diff())
        .filter(|&target| board.slot(target).is_some_and(|slot| !slot.is_blank()));
      if let Some(entry) = point_at.get_mut(pos) {
        *entry = target;
      }
    }

    let mut pointed_at_by: Grid<Vec<Pos>> = Grid::new(board.width(), board.height());
    for pos in board.positions() {
      if let Some(&Some(target)) = point_at.get(pos) {
        if let Some(sources) = pointed_at_by.get_mut(target) {
          sources.push(pos);
        }
      }
    }

    let heads = board
      .positions()
      .filter(|&pos| {
        !board.is_blank(pos) && pointed_at_by.get(pos).is_some_and(|sources| sources.is_empty())
      })
      .collect();

    Self { point_at, pointed_at_by, heads }
  }

  pub fn point_at(&self, pos: Pos) -> Option<Pos> {
    self.point_at.get(pos).copied().flatten()
  }

  pub fn pointed_at_by(&self, pos: Pos) -> &[Pos] {
    self.pointed_at_by.get(pos).map(Vec::as_slice).unwrap_or_default()
  }

  /// Occupied cells no other cell points into, in row-major order.
  pub fn heads(&self) -> &[Pos] {
    &self.heads
  }

  /// The cells of the chain starting at `head`, in arrow order.
  pub fn chain(&self, head: Pos) -> impl Iterator<Item = Pos> + '_ {
    std::iter::successors(Some(head), move |&pos| self.point_at(pos)).take(self.point_at.area())
  }
}
