use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use util::{
  error::{OrientileError, OrientileResult},
  grid::Grid,
  pos::{Diff, Pos},
};

pub const BLANK_LETTER: char = '-';
pub const BLANK_DIRECTION: char = 'x';

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

  pub const fn diff(self) -> Diff {
    match self {
      Self::Up => Diff { x: 0, y: -1 },
      Self::Down => Diff { x: 0, y: 1 },
      Self::Left => Diff { x: -1, y: 0 },
      Self::Right => Diff { x: 1, y: 0 },
    }
  }

  pub const fn to_char(self) -> char {
    match self {
      Self::Up => '^',
      Self::Down => 'v',
      Self::Left => '<',
      Self::Right => '>',
    }
  }

  pub fn from_char(c: char) -> Option<Self> {
    Self::ALL.into_iter().find(|dir| dir.to_char() == c)
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_char())
  }
}

/// A lowercase ASCII letter.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
  pub fn new(c: char) -> Option<Self> {
    c.is_ascii_lowercase().then_some(Self(c))
  }

  pub const fn as_char(self) -> char {
    self.0
  }
}

impl Display for Letter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Slot {
  pub letter: Option<Letter>,
  pub direction: Option<Direction>,
}

impl Slot {
  pub const BLANK: Slot = Slot { letter: None, direction: None };

  pub fn new(letter: Letter, direction: Direction) -> Self {
    Self { letter: Some(letter), direction: Some(direction) }
  }

  pub fn is_blank(&self) -> bool {
    self.letter.is_none() && self.direction.is_none()
  }

  pub fn letter_char(&self) -> char {
    self.letter.map_or(BLANK_LETTER, Letter::as_char)
  }

  pub fn direction_char(&self) -> char {
    self.direction.map_or(BLANK_DIRECTION, Direction::to_char)
  }
}

impl Display for Slot {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}{}", self.letter_char(), self.direction_char())
  }
}

/// The generator's answer: every occupied cell carries the letter a tile must
/// show and the arrow it must point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionBoard {
  grid: Grid<Slot>,
}

impl SolutionBoard {
  pub fn new(width: u32, height: u32) -> Self {
    Self { grid: Grid::new(width, height) }
  }

  pub fn width(&self) -> u32 {
    self.grid.width()
  }

  pub fn height(&self) -> u32 {
    self.grid.height()
  }

  pub fn area(&self) -> usize {
    self.grid.area()
  }

  pub fn in_bounds(&self, pos: Pos) -> bool {
    self.grid.in_bounds(pos)
  }

  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    self.grid.positions()
  }

  pub fn slot(&self, pos: Pos) -> Option<&Slot> {
    self.grid.get(pos)
  }

  pub fn slot_mut(&mut self, pos: Pos) -> Option<&mut Slot> {
    self.grid.get_mut(pos)
  }

  pub fn set(&mut self, pos: Pos, slot: Slot) -> OrientileResult {
    *self
      .grid
      .get_mut(pos)
      .ok_or_else(|| OrientileError::Internal(format!("Pos is out of bounds: {pos}")))? = slot;
    Ok(())
  }

  pub fn is_blank(&self, pos: Pos) -> bool {
    self.slot(pos).is_some_and(Slot::is_blank)
  }

  pub fn direction(&self, pos: Pos) -> Option<Direction> {
    self.slot(pos).and_then(|slot| slot.direction)
  }

  /// Blank cells on the outer boundary, in edge enumeration order. Corner
  /// cells may be listed twice.
  pub fn blank_edge_positions(&self) -> Vec<Pos> {
    self
      .grid
      .edge_positions()
      .filter(|&pos| self.is_blank(pos))
      .collect()
  }

  pub fn blank_letter_count(&self) -> usize {
    self.grid.iter().filter(|slot| slot.letter.is_none()).count()
  }

  /// Follows arrows from `start` until they leave the board. Returns `None`
  /// when the walk reaches a cell without a direction, or revisits a cell.
  pub fn trace(&self, start: Pos) -> Option<Vec<Pos>> {
    let mut path = Vec::new();
    let mut current = start;
    while self.in_bounds(current) {
      if path.len() >= self.area() {
        return None;
      }
      path.push(current);
      current += self.direction(current)?.diff();
    }
    Some(path)
  }

  pub fn serialize(&self) -> String {
    let rows = (0..self.height()).map(|y| self.grid.iter_row(y).join(""));
    format!("{}x{} {}", self.width(), self.height(), rows.format(" "))
  }

  fn parse_dimension(chars: &[char], start: usize) -> Result<(u32, usize), OrientileError> {
    let end = chars[start..]
      .iter()
      .position(|c| !c.is_ascii_digit())
      .map_or(chars.len(), |offset| start + offset);
    if end == start {
      return Err(OrientileError::Parse {
        idx: start,
        msg: "expected a board dimension".to_owned(),
      });
    }

    let dimension = chars[start..end]
      .iter()
      .collect::<String>()
      .parse::<u32>()
      .map_err(|err| OrientileError::Parse { idx: start, msg: err.to_string() })?;
    if dimension == 0 {
      return Err(OrientileError::Parse {
        idx: start,
        msg: "board dimensions must be positive".to_owned(),
      });
    }

    Ok((dimension, end))
  }

  fn parse_slot(chars: &[char], idx: usize) -> Result<Slot, OrientileError> {
    let (Some(&letter_c), Some(&direction_c)) = (chars.get(idx), chars.get(idx + 1)) else {
      return Err(OrientileError::Parse {
        idx: chars.len(),
        msg: "board string ended before every cell was read".to_owned(),
      });
    };

    let letter = match letter_c {
      BLANK_LETTER => None,
      c => Some(Letter::new(c).ok_or_else(|| OrientileError::Parse {
        idx,
        msg: format!("unrecognized letter '{c}'"),
      })?),
    };
    let direction = match direction_c {
      BLANK_DIRECTION => None,
      c => Some(Direction::from_char(c).ok_or_else(|| OrientileError::Parse {
        idx: idx + 1,
        msg: format!("unrecognized direction '{c}'"),
      })?),
    };

    if letter.is_some() != direction.is_some() {
      return Err(OrientileError::Parse {
        idx,
        msg: "a cell needs both a letter and a direction, or neither".to_owned(),
      });
    }

    Ok(Slot { letter, direction })
  }

  /// Parses the `{W}x{H} ` board format. Spaces are ignored; error indices
  /// refer to the string with spaces removed.
  pub fn parse(board: &str) -> Result<Self, OrientileError> {
    let chars: Vec<char> = board.chars().filter(|&c| c != ' ').collect();

    let (width, idx) = Self::parse_dimension(&chars, 0)?;
    if chars.get(idx) != Some(&'x') {
      return Err(OrientileError::Parse {
        idx,
        msg: "expected 'x' between board dimensions".to_owned(),
      });
    }
    let (height, mut idx) = Self::parse_dimension(&chars, idx + 1)?;

    // No preallocation: the dimensions are not trusted until the cells are read.
    let mut slots = Vec::new();
    for _ in 0..width as usize * height as usize {
      slots.push(Self::parse_slot(&chars, idx)?);
      idx += 2;
    }
    if idx != chars.len() {
      return Err(OrientileError::Parse {
        idx,
        msg: "unexpected characters after the last cell".to_owned(),
      });
    }

    let grid = Grid::from_vec(slots, width, height)
      .map_err(|err| OrientileError::Internal(err.to_string()))?;
    Ok(Self { grid })
  }

  fn render_cell_line(slot: &Slot, line: u32, show_letters: bool) -> String {
    if slot.is_blank() {
      return if line == 1 { " x ".to_owned() } else { "   ".to_owned() };
    }

    let letter = if show_letters { slot.letter_char() } else { ' ' };
    match (line, slot.direction) {
      (0, Some(Direction::Up)) => "┌┴┐".to_owned(),
      (0, _) => "┌─┐".to_owned(),
      (1, Some(Direction::Left)) => format!("┤{letter}│"),
      (1, Some(Direction::Right)) => format!("│{letter}├"),
      (1, _) => format!("│{letter}│"),
      (_, Some(Direction::Down)) => "└┬┘".to_owned(),
      (_, _) => "└─┘".to_owned(),
    }
  }

  /// Box-drawing picture of the board, three text lines per row of cells.
  /// With `show_letters` unset only the arrow layout is drawn.
  pub fn render_ansi(&self, show_letters: bool) -> String {
    (0..self.height())
      .flat_map(|y| {
        (0..3).map(move |line| {
          self
            .grid
            .iter_row(y)
            .map(|slot| Self::render_cell_line(slot, line, show_letters))
            .join("")
        })
      })
      .map(|line| line + "\n")
      .collect()
  }
}

impl Display for SolutionBoard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.serialize())
  }
}

impl FromStr for SolutionBoard {
  type Err = OrientileError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}
