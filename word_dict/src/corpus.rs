use std::{
  collections::BTreeMap,
  fs::{self, File},
  io::Write,
  ops::Range,
  path::Path,
};

use bitcode::{Decode, Encode};
use log::info;
use util::error::{OrientileError, OrientileResult};

use crate::histogram::FrequencyHistogram;

/// Words must occur at least this many times in the reference texts to be
/// used by the generator.
pub const MIN_FREQUENCY: u32 = 20;

/// Generation words bucketed by length, each bucket in dictionary order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct WordCorpus {
  buckets: BTreeMap<u32, Vec<String>>,
}

impl WordCorpus {
  fn canonical_word(line: &str) -> Option<&str> {
    let word = line.trim();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())).then_some(word)
  }

  fn insert(&mut self, word: &str) {
    self
      .buckets
      .entry(word.len() as u32)
      .or_default()
      .push(word.to_owned());
  }

  /// Builds a corpus from a list that has already been filtered.
  pub fn from_word_list<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    let mut corpus = Self::default();
    for word in words {
      if let Some(word) = Self::canonical_word(word.as_ref()) {
        corpus.insert(word);
      }
    }
    corpus
  }

  /// Keeps the dictionary words seen at least `min_frequency` times.
  pub fn filter_by_frequency<S: AsRef<str>>(
    dictionary: impl IntoIterator<Item = S>,
    histogram: &FrequencyHistogram,
    min_frequency: u32,
  ) -> Self {
    let mut corpus = Self::default();
    for word in dictionary {
      if let Some(word) = Self::canonical_word(word.as_ref()) {
        let frequency = histogram.frequency(word);
        if frequency > 0 && frequency >= min_frequency {
          corpus.insert(word);
        }
      }
    }
    corpus
  }

  pub fn load(reference_dir: &Path, dictionary_path: &Path) -> OrientileResult<Self> {
    let histogram = FrequencyHistogram::from_dir(reference_dir)?;
    let dictionary = fs::read_to_string(dictionary_path).map_err(|err| {
      OrientileError::Corpus(format!(
        "Failed to read dictionary {}: {err}",
        dictionary_path.display()
      ))
    })?;

    let corpus = Self::filter_by_frequency(dictionary.lines(), &histogram, MIN_FREQUENCY);
    info!("Loaded generation corpus with {} words", corpus.len());
    Ok(corpus)
  }

  pub fn save(&self, path: &Path) -> OrientileResult {
    let mut file = File::create(path)?;
    file.write_all(&bitcode::encode(self))?;
    Ok(())
  }

  pub fn read(path: &Path) -> OrientileResult<Self> {
    let bytes = fs::read(path).map_err(|err| {
      OrientileError::Corpus(format!("Failed to read corpus cache {}: {err}", path.display()))
    })?;
    Ok(bitcode::decode(&bytes)?)
  }

  pub fn words_with_length(&self, length: u32) -> &[String] {
    self
      .buckets
      .get(&length)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  pub fn has_words_in(&self, lengths: Range<u32>) -> bool {
    self.buckets.range(lengths).any(|(_, words)| !words.is_empty())
  }

  pub fn len(&self) -> usize {
    self.buckets.values().map(Vec::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
