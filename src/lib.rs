pub mod analyzer;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;

pub use analyzer::{compute_next_version, ReleaseDecision};
pub use error::{NextVersionError, Result};
