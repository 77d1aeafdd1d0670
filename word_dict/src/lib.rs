#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod corpus;
pub mod dictionary;
pub mod histogram;

pub use corpus::WordCorpus;
pub use dictionary::Dictionary;
pub use histogram::FrequencyHistogram;
