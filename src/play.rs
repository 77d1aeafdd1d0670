use std::str::FromStr;

use util::{error::OrientileError, pos::Pos};

use crate::session::{Session, TileId, TileStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
  Place { tile: TileId, pos: Pos },
  Lift { tile: TileId },
  Show,
  Quit,
}

fn parse_number<T: FromStr>(token: Option<&str>, what: &str) -> Result<T, OrientileError> {
  let token = token.ok_or_else(|| OrientileError::Parse { idx: 0, msg: format!("Missing {what}") })?;
  token
    .parse()
    .map_err(|_| OrientileError::Parse { idx: 0, msg: format!("Bad {what} \"{token}\"") })
}

impl FromStr for PlayerCommand {
  type Err = OrientileError;

  /// `place <tile> <x> <y>`, `lift <tile>`, `show` or `quit`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut tokens = s.split_whitespace();
    let command = match tokens.next() {
      Some("place" | "p") => {
        let tile = parse_number(tokens.next(), "tile")?;
        let x = parse_number(tokens.next(), "column")?;
        let y = parse_number(tokens.next(), "row")?;
        PlayerCommand::Place { tile, pos: Pos::new(x, y) }
      }
      Some("lift" | "l") => PlayerCommand::Lift { tile: parse_number(tokens.next(), "tile")? },
      Some("show" | "s") => PlayerCommand::Show,
      Some("quit" | "q") => PlayerCommand::Quit,
      Some(other) => {
        return Err(OrientileError::Parse { idx: 0, msg: format!("Unknown command \"{other}\"") })
      }
      None => return Err(OrientileError::Parse { idx: 0, msg: "Empty command".to_owned() }),
    };

    if let Some(extra) = tokens.next() {
      return Err(OrientileError::Parse {
        // `extra` borrows from `s`, so this is its byte offset in the line.
        idx: extra.as_ptr() as usize - s.as_ptr() as usize,
        msg: format!("Unexpected \"{extra}\""),
      });
    }
    Ok(command)
  }
}

fn status_mark(status: TileStatus) -> char {
  match status {
    TileStatus::Invalid => ' ',
    TileStatus::ValidWord => '+',
    TileStatus::Confirmed => '*',
  }
}

/// One line per row. Each slot shows the placed letter (or `_`), the arrow
/// the slot needs and a status mark; blank cells are dots.
pub fn render_session(session: &Session) -> String {
  let solution = session.solution();
  (0..solution.height() as i32)
    .map(|y| {
      let row: String = (0..solution.width() as i32)
        .map(|x| {
          let pos = Pos::new(x, y);
          match solution.direction(pos) {
            None => " .  ".to_owned(),
            Some(direction) => {
              let letter = session
                .tile_at(pos)
                .and_then(|id| session.tile(id))
                .map_or('_', |tile| tile.letter.as_char());
              format!("{letter}{}{} ", direction.to_char(), status_mark(session.slot_status(pos)))
            }
          }
        })
        .collect();
      row.trim_end().to_owned() + "\n"
    })
    .collect()
}

/// Tiles not yet on the board, as `id:letter arrow`.
pub fn render_tray(session: &Session) -> String {
  session
    .tiles()
    .iter()
    .enumerate()
    .filter(|&(id, _)| session.tile_pos(id).is_none())
    .map(|(id, tile)| format!("{id}:{}{}", tile.letter, tile.direction.to_char()))
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use common::board::{Direction, Letter, SolutionBoard};
  use googletest::prelude::*;
  use util::pos::Pos;
  use word_dict::Dictionary;

  use super::{render_session, render_tray, PlayerCommand};
  use crate::session::{Session, Tile};

  #[gtest]
  fn test_parse_commands() {
    expect_eq!(
      "place 3 1 2".parse::<PlayerCommand>(),
      Ok(PlayerCommand::Place { tile: 3, pos: Pos::new(1, 2) })
    );
    expect_eq!("l 0".parse::<PlayerCommand>(), Ok(PlayerCommand::Lift { tile: 0 }));
    expect_eq!("  show ".parse::<PlayerCommand>(), Ok(PlayerCommand::Show));
    expect_eq!("quit".parse::<PlayerCommand>(), Ok(PlayerCommand::Quit));
  }

  #[gtest]
  fn test_parse_bad_commands() {
    expect_true!("".parse::<PlayerCommand>().is_err());
    expect_true!("jump 1".parse::<PlayerCommand>().is_err());
    expect_true!("place 1 2".parse::<PlayerCommand>().is_err());
    expect_true!("place a 1 2".parse::<PlayerCommand>().is_err());
    expect_true!("lift -1".parse::<PlayerCommand>().is_err());
    expect_eq!(
      "lift 1 2".parse::<PlayerCommand>(),
      Err(util::error::OrientileError::Parse { idx: 7, msg: "Unexpected \"2\"".to_owned() })
    );
    expect_eq!(
      "lift 2 2".parse::<PlayerCommand>(),
      Err(util::error::OrientileError::Parse { idx: 7, msg: "Unexpected \"2\"".to_owned() })
    );
  }

  #[gtest]
  fn test_render() {
    let solution = SolutionBoard::parse("2x2 a>bv -xc<").unwrap();
    let tiles = vec![
      Tile { letter: Letter::new('a').unwrap(), direction: Direction::Right },
      Tile { letter: Letter::new('b').unwrap(), direction: Direction::Down },
      Tile { letter: Letter::new('c').unwrap(), direction: Direction::Left },
    ];
    let mut session = Session::with_tiles(solution, tiles);
    expect_eq!(render_tray(&session), "0:a> 1:bv 2:c<");

    session.place_tile(0, Pos::new(0, 0)).unwrap();
    session.place_tile(1, Pos::new(1, 0)).unwrap();
    session.validate(&Dictionary::default());
    expect_eq!(render_session(&session), "a>  bv\n .  _<\n");
    expect_eq!(render_tray(&session), "2:c<");

    session.place_tile(2, Pos::new(1, 1)).unwrap();
    session.validate(&Dictionary::default());
    expect_eq!(render_session(&session), "a>* bv*\n .  c<*\n");
  }
}
