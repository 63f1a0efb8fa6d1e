use crate::domain::Commit;
use crate::error::Result;
use crate::git::Repository;
use git2::{ObjectType, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    // Annotated tags peel to their target commit.
    fn resolve_commit_id(&self, reference: &str) -> Result<Oid> {
        let object = self.repo.revparse_single(reference)?;
        Ok(object.peel(ObjectType::Commit)?.id())
    }
}

impl Repository for Git2Repository {
    fn commits_in_range(&self, from_ref: Option<&str>, to_ref: &str) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(self.resolve_commit_id(to_ref)?)?;
        if let Some(from) = from_ref {
            revwalk.hide(self.resolve_commit_id(from)?)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let subject = commit.summary().unwrap_or("").trim().to_string();
            let body = commit
                .body()
                .unwrap_or("")
                .trim_end_matches('\n')
                .to_string();
            commits.push(Commit::new(subject, body));
        }

        Ok(commits)
    }

    fn tags_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(Some(pattern))?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}
