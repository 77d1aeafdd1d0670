use std::{
  collections::BTreeMap,
  fs,
  path::{Path, PathBuf},
};

use chrono::{Datelike, Days, NaiveDate};
use common::board::SolutionBoard;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use util::error::{OrientileError, OrientileResult};

/// Serialized boards keyed by the day they are played on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleSchedule {
  puzzles: BTreeMap<String, String>,
}

impl PuzzleSchedule {
  /// `YYYY-M-D`, without zero padding.
  pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
  }

  /// A missing file is an empty schedule.
  pub fn load(path: &Path) -> OrientileResult<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
  }

  pub fn save(&self, path: &Path) -> OrientileResult {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string(self)?)?;
    Ok(())
  }

  /// Copies an existing schedule file into `backups_dir` under a fresh name.
  pub fn backup<R: Rng + ?Sized>(
    path: &Path,
    backups_dir: &Path,
    today: NaiveDate,
    rng: &mut R,
  ) -> OrientileResult<Option<PathBuf>> {
    if !path.exists() {
      return Ok(None);
    }

    fs::create_dir_all(backups_dir)?;
    let backup = backups_dir.join(format!(
      "puzzles-bak-{}-{:016x}.json",
      Self::date_key(today),
      rng.random::<u64>()
    ));
    fs::copy(path, &backup)?;
    info!("Backed up {} to {}", path.display(), backup.display());
    Ok(Some(backup))
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.puzzles.get(key).map(String::as_str)
  }

  pub fn board(&self, key: &str) -> OrientileResult<SolutionBoard> {
    let serialized = self
      .get(key)
      .ok_or_else(|| OrientileError::Internal(format!("No puzzle scheduled for {key}")))?;
    Ok(SolutionBoard::parse(serialized)?)
  }

  pub fn insert(&mut self, key: String, board: &SolutionBoard) {
    self.puzzles.insert(key, board.serialize());
  }

  pub fn len(&self) -> usize {
    self.puzzles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.puzzles.is_empty()
  }

  /// Generates a board for each of `days` days starting at `today` that does
  /// not have one yet. Returns the keys that were added.
  pub fn fill_days<F>(
    &mut self,
    today: NaiveDate,
    days: u32,
    mut generate: F,
  ) -> OrientileResult<Vec<String>>
  where
    F: FnMut() -> OrientileResult<SolutionBoard>,
  {
    let mut added = Vec::new();
    for offset in 0..days {
      let date = today.checked_add_days(Days::new(offset.into())).ok_or_else(|| {
        OrientileError::Internal(format!("Date overflow adding {offset} days to {today}"))
      })?;
      let key = Self::date_key(date);
      if self.puzzles.contains_key(&key) {
        continue;
      }

      let board = generate()?;
      info!("Scheduled {key}: {}", board.serialize());
      self.insert(key.clone(), &board);
      added.push(key);
    }
    Ok(added)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::fs;

  use chrono::NaiveDate;
  use common::board::SolutionBoard;
  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};

  use super::PuzzleSchedule;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[gtest]
  fn test_date_key() {
    expect_eq!(PuzzleSchedule::date_key(date(2025, 3, 7)), "2025-3-7");
    expect_eq!(PuzzleSchedule::date_key(date(2025, 12, 31)), "2025-12-31");
  }

  #[gtest]
  fn test_fill_days_skips_existing() {
    let board = SolutionBoard::parse("1x1 a>").unwrap();
    let mut schedule = PuzzleSchedule::default();
    schedule.insert("2025-12-31".to_owned(), &board);

    let mut generated = 0;
    let added = schedule
      .fill_days(date(2025, 12, 30), 3, || {
        generated += 1;
        Ok(SolutionBoard::parse("1x1 bv").unwrap())
      })
      .unwrap();

    expect_eq!(generated, 2);
    expect_eq!(added, vec!["2025-12-30".to_owned(), "2026-1-1".to_owned()]);
    expect_eq!(schedule.get("2025-12-31"), Some("1x1 a>"));
    expect_eq!(schedule.get("2026-1-1"), Some("1x1 bv"));
    expect_eq!(schedule.board("2026-1-1").unwrap(), SolutionBoard::parse("1x1 bv").unwrap());
    expect_that!(schedule.board("2026-1-2"), err(anything()));
  }

  #[gtest]
  fn test_save_load_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site").join("puzzles.json");
    let backups = dir.path().join("puzzles_bak");
    let mut rng = StdRng::seed_from_u64(3);

    expect_eq!(PuzzleSchedule::load(&path).unwrap(), PuzzleSchedule::default());
    expect_eq!(PuzzleSchedule::backup(&path, &backups, date(2025, 1, 1), &mut rng).unwrap(), None);

    let mut schedule = PuzzleSchedule::default();
    schedule.insert("2025-1-1".to_owned(), &SolutionBoard::parse("2x1 a>b>").unwrap());
    schedule.save(&path).unwrap();
    expect_eq!(fs::read_to_string(&path).unwrap(), r#"{"2025-1-1":"2x1 a>b>"}"#);
    expect_eq!(PuzzleSchedule::load(&path).unwrap(), schedule);

    let backup = PuzzleSchedule::backup(&path, &backups, date(2025, 1, 1), &mut rng)
      .unwrap()
      .unwrap();
    expect_true!(backup.starts_with(&backups));
    expect_true!(backup
      .file_name()
      .unwrap()
      .to_string_lossy()
      .starts_with("puzzles-bak-2025-1-1-"));
    expect_eq!(PuzzleSchedule::load(&backup).unwrap(), schedule);
  }
}
