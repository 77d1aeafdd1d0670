#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod fitter;
pub mod generator;
pub mod path;
pub mod schedule;
