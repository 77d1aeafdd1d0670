use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug, PartialEq, Eq)]
pub enum OrientileError {
  Internal(String),
  /// `idx` is the index of the offending character in the input that was
  /// actually parsed.
  Parse { idx: usize, msg: String },
  Corpus(String),
  Unsatisfiable(String),
  Placement(String),
}

impl Display for OrientileError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      OrientileError::Internal(msg) => write!(f, "Internal error: {msg}"),
      OrientileError::Parse { idx, msg } => write!(f, "Parse error at index {idx}: {msg}"),
      OrientileError::Corpus(msg) => write!(f, "Corpus error: {msg}"),
      OrientileError::Unsatisfiable(msg) => write!(f, "Unsatisfiable generator config: {msg}"),
      OrientileError::Placement(msg) => write!(f, "Invalid placement: {msg}"),
    }
  }
}

impl Error for OrientileError {}

pub type OrientileResult<T = ()> = Result<T, Box<dyn Error>>;
