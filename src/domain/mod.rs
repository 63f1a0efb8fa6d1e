//! Domain logic - pure data types independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::{normalize_commits, Commit};
pub use tag::{version_from_ref, TagSet};
pub use version::{Version, VersionBump};
