use std::{collections::HashSet, fs, path::Path};

use log::info;
use util::error::{OrientileError, OrientileResult};

/// The full word list used to accept alternate solutions during play. It is
/// not filtered by frequency.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
  words: HashSet<String>,
}

impl Dictionary {
  pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    Self {
      words: words
        .into_iter()
        .map(|word| word.as_ref().trim().to_owned())
        .filter(|word| !word.is_empty())
        .collect(),
    }
  }

  pub fn load(path: &Path) -> OrientileResult<Self> {
    let contents = fs::read_to_string(path).map_err(|err| {
      OrientileError::Corpus(format!("Failed to read dictionary {}: {err}", path.display()))
    })?;
    let dictionary = Self::from_words(contents.lines());
    info!("Loaded {} dictionary words", dictionary.len());
    Ok(dictionary)
  }

  pub fn has(&self, word: &str) -> bool {
    self.words.contains(word)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}
