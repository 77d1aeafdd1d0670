use common::{
  board::{Direction, Letter, SolutionBoard, BLANK_LETTER},
  chain::ChainGraph,
};
use rand::{seq::SliceRandom, Rng};
use util::{
  error::{OrientileError, OrientileResult},
  grid::Grid,
  pos::Pos,
};
use word_dict::Dictionary;

/// How well the chain through a slot is satisfied. Ordered so that the best
/// status from any chain wins.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TileStatus {
  #[default]
  Invalid,
  ValidWord,
  Confirmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
  NotWon,
  /// Every tile sits where the generator put its letter.
  WonConfirmed,
  /// Every chain spells a dictionary word, but not all of them are the
  /// generator's words.
  WonAlternate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
  pub letter: Letter,
  pub direction: Direction,
}

pub type TileId = usize;

/// One player's attempt at a puzzle.
pub struct Session {
  solution: SolutionBoard,
  graph: ChainGraph,
  tiles: Vec<Tile>,
  tile_pos: Vec<Option<Pos>>,
  occupancy: Grid<Option<TileId>>,
  status: Grid<TileStatus>,
  state: GameState,
}

impl Session {
  /// Hands out one tile per occupied solution cell, in random order.
  pub fn new<R: Rng + ?Sized>(solution: SolutionBoard, rng: &mut R) -> Self {
    let mut tiles: Vec<_> = solution
      .positions()
      .filter_map(|pos| {
        let slot = solution.slot(pos)?;
        Some(Tile { letter: slot.letter?, direction: slot.direction? })
      })
      .collect();
    tiles.shuffle(rng);
    Self::with_tiles(solution, tiles)
  }

  pub fn with_tiles(solution: SolutionBoard, tiles: Vec<Tile>) -> Self {
    let graph = ChainGraph::from_board(&solution);
    let occupancy = Grid::new(solution.width(), solution.height());
    let status = Grid::new(solution.width(), solution.height());
    Self {
      graph,
      tile_pos: vec![None; tiles.len()],
      tiles,
      occupancy,
      status,
      state: GameState::NotWon,
      solution,
    }
  }

  pub fn solution(&self) -> &SolutionBoard {
    &self.solution
  }

  pub fn tiles(&self) -> &[Tile] {
    &self.tiles
  }

  pub fn tile(&self, id: TileId) -> Option<&Tile> {
    self.tiles.get(id)
  }

  pub fn tile_pos(&self, id: TileId) -> Option<Pos> {
    self.tile_pos.get(id).copied().flatten()
  }

  pub fn tile_at(&self, pos: Pos) -> Option<TileId> {
    self.occupancy.get(pos).copied().flatten()
  }

  pub fn slot_status(&self, pos: Pos) -> TileStatus {
    self.status.get(pos).copied().unwrap_or_default()
  }

  pub fn game_state(&self) -> GameState {
    self.state
  }

  /// Puts tile `id` into the slot at `pos`, taking it off any slot it was on.
  /// Tiles only fit slots whose arrow matches their own.
  pub fn place_tile(&mut self, id: TileId, pos: Pos) -> OrientileResult {
    let tile = *self
      .tiles
      .get(id)
      .ok_or_else(|| OrientileError::Placement(format!("There is no tile {id}")))?;
    let required = self
      .solution
      .slot(pos)
      .ok_or_else(|| OrientileError::Placement(format!("{pos} is off the board")))?
      .direction
      .ok_or_else(|| OrientileError::Placement(format!("{pos} is not part of the puzzle")))?;

    if tile.direction != required {
      return Err(
        OrientileError::Placement(format!(
          "Tile {id} points {} but {pos} needs {required}",
          tile.direction
        ))
        .into(),
      );
    }
    if let Some(other) = self.tile_at(pos).filter(|&other| other != id) {
      return Err(OrientileError::Placement(format!("{pos} already holds tile {other}")).into());
    }

    self.lift_tile(id);
    if let Some(entry) = self.occupancy.get_mut(pos) {
      *entry = Some(id);
    }
    if let Some(entry) = self.tile_pos.get_mut(id) {
      *entry = Some(pos);
    }
    Ok(())
  }

  /// Takes tile `id` off the board, returning the slot it was on.
  pub fn lift_tile(&mut self, id: TileId) -> Option<Pos> {
    let pos = self.tile_pos.get_mut(id)?.take()?;
    if let Some(entry) = self.occupancy.get_mut(pos) {
      *entry = None;
    }
    Some(pos)
  }

  fn judge_chain(&self, head: Pos, dictionary: &Dictionary) -> Option<TileStatus> {
    let mut word = String::new();
    let mut confirmed = true;

    for pos in self.graph.chain(head) {
      let placed = self.tile_at(pos).and_then(|id| self.tiles.get(id));
      word.push(placed.map_or(BLANK_LETTER, |tile| tile.letter.as_char()));

      let matches_solution = placed.zip(self.solution.slot(pos)).is_some_and(|(tile, slot)| {
        slot.letter == Some(tile.letter) && slot.direction == Some(tile.direction)
      });
      confirmed &= matches_solution;
    }

    if confirmed {
      Some(TileStatus::Confirmed)
    } else if dictionary.has(&word) {
      Some(TileStatus::ValidWord)
    } else {
      None
    }
  }

  /// Re-judges every chain from scratch and updates the game state.
  pub fn validate(&mut self, dictionary: &Dictionary) -> GameState {
    self.status = Grid::new(self.solution.width(), self.solution.height());

    let judged: Vec<_> = self
      .graph
      .heads()
      .iter()
      .filter_map(|&head| Some((head, self.judge_chain(head, dictionary)?)))
      .collect();
    for (head, value) in judged {
      for pos in self.graph.chain(head) {
        if let Some(status) = self.status.get_mut(pos) {
          *status = (*status).max(value);
        }
      }
    }

    self.state = self.overall_state();
    self.state
  }

  fn overall_state(&self) -> GameState {
    let mut state = GameState::WonConfirmed;
    for pos in self.solution.positions() {
      if self.solution.direction(pos).is_none() {
        continue;
      }
      match self.slot_status(pos) {
        TileStatus::Invalid => return GameState::NotWon,
        TileStatus::ValidWord => state = GameState::WonAlternate,
        TileStatus::Confirmed => {}
      }
    }
    state
  }
}
