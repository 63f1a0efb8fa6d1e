//! Decision engine for determining releases from commit history

pub mod decision;

pub use decision::{
    compute_from_repository, compute_next_version, HistoryOptions, ReleaseDecision,
};
