//! Git access abstraction
//!
//! [Repository] is the seam between the decision engine and libgit2: the real
//! [repository::Git2Repository] reads an on-disk repository, while
//! [mock::MockRepository] serves preset history in tests. Code that derives a
//! decision from history should depend on the trait, not a concrete type.
//!
//! ```rust
//! # use next_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let commits = repo.commits_in_range(Some("v1.2.3"), "HEAD")?;
//! let tags = repo.tags_matching("v*")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Commit;
use crate::error::Result;

/// Read access to repository history and tags
pub trait Repository {
    /// List commits reachable from `to_ref` but not from `from_ref`, newest first.
    ///
    /// `from_ref` is exclusive; `None` walks the full history behind `to_ref`.
    /// Each commit contributes its subject line and body.
    fn commits_in_range(&self, from_ref: Option<&str>, to_ref: &str) -> Result<Vec<Commit>>;

    /// List tag names matching a glob pattern such as `v*`.
    fn tags_matching(&self, pattern: &str) -> Result<Vec<String>>;
}
