use std::{collections::HashMap, fs, path::Path};

use itertools::Itertools;
use log::{debug, info};
use util::error::{OrientileError, OrientileResult};

/// Occurrence counts of every word in a collection of reference texts.
#[derive(Clone, Debug, Default)]
pub struct FrequencyHistogram {
  counts: HashMap<String, u32>,
}

impl FrequencyHistogram {
  pub fn new() -> Self {
    Self::default()
  }

  /// Tokens with anything other than ASCII letters are dropped whole, so
  /// "don't" and "end." never count towards "dont" or "end".
  fn canonicalize_token(token: &str) -> Option<String> {
    let word = token.to_ascii_lowercase();
    word.chars().all(|c| c.is_ascii_lowercase()).then_some(word)
  }

  pub fn add_text(&mut self, text: &str) {
    for word in text.split_whitespace().filter_map(Self::canonicalize_token) {
      *self.counts.entry(word).or_default() += 1;
    }
  }

  pub fn add_file(&mut self, path: &Path) -> OrientileResult {
    let bytes = fs::read(path).map_err(|err| {
      OrientileError::Corpus(format!("Failed to read reference text {}: {err}", path.display()))
    })?;
    self.add_text(&String::from_utf8_lossy(&bytes));
    Ok(())
  }

  /// Counts every regular file in `dir`, in file name order.
  pub fn from_dir(dir: &Path) -> OrientileResult<Self> {
    let files: Vec<_> = fs::read_dir(dir)
      .map_err(|err| {
        OrientileError::Corpus(format!("Failed to open reference texts {}: {err}", dir.display()))
      })?
      .map(|entry| entry.map(|entry| entry.path()))
      .collect::<Result<Vec<_>, _>>()?
      .into_iter()
      .filter(|path| path.is_file())
      .sorted()
      .collect();

    if files.is_empty() {
      return Err(
        OrientileError::Corpus(format!("No reference texts found in {}", dir.display())).into(),
      );
    }

    let mut histogram = Self::new();
    for file in &files {
      debug!("Counting words in {}", file.display());
      histogram.add_file(file)?;
    }
    info!(
      "Counted {} distinct words across {} reference texts",
      histogram.len(),
      files.len()
    );
    Ok(histogram)
  }

  pub fn frequency(&self, word: &str) -> u32 {
    self.counts.get(word).copied().unwrap_or(0)
  }

  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::fs;

  use googletest::prelude::*;

  use super::FrequencyHistogram;

  #[gtest]
  fn test_tokenize() {
    let mut histogram = FrequencyHistogram::new();
    histogram.add_text("The cat saw the\tCAT.\nthe end don't cat-like x2 café");

    expect_eq!(histogram.frequency("the"), 3);
    expect_eq!(histogram.frequency("cat"), 1);
    expect_eq!(histogram.frequency("saw"), 1);
    expect_eq!(histogram.frequency("end"), 1);
    expect_eq!(histogram.frequency("dont"), 0);
    expect_eq!(histogram.frequency("don't"), 0);
    expect_eq!(histogram.frequency("catlike"), 0);
    expect_eq!(histogram.frequency("caf"), 0);
    expect_eq!(histogram.len(), 4);
  }

  #[gtest]
  fn test_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "apple banana apple").unwrap();
    fs::write(dir.path().join("b.txt"), "Banana cherry").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let histogram = FrequencyHistogram::from_dir(dir.path()).unwrap();
    expect_eq!(histogram.frequency("apple"), 2);
    expect_eq!(histogram.frequency("banana"), 2);
    expect_eq!(histogram.frequency("cherry"), 1);
  }

  #[gtest]
  fn test_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    expect_that!(FrequencyHistogram::from_dir(&dir.path().join("missing")), err(anything()));
    expect_that!(FrequencyHistogram::from_dir(dir.path()), err(anything()));
  }
}
