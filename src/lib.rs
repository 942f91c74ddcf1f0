pub mod branch;
pub mod completion;
pub mod config;
pub mod error;
pub mod exec;
pub mod gh;
pub mod git;
pub mod marker;
pub mod output;
pub mod preflight;
pub mod runner;

#[cfg(test)]
mod test_utils;

pub use config::{Config, Settings};
pub use error::{AutoPrError, Result};
pub use runner::{RunOutcome, Runner};
