use crate::domain::Commit;
use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: Vec<Commit>,
    tags: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Queue a commit to be returned by `commits_in_range`
    pub fn add_commit(&mut self, subject: impl Into<String>, body: impl Into<String>) {
        self.commits.push(Commit::new(subject, body));
    }

    /// Register a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl Repository for MockRepository {
    fn commits_in_range(&self, _from_ref: Option<&str>, _to_ref: &str) -> Result<Vec<Commit>> {
        Ok(self.commits.clone())
    }

    // Supports exact names and trailing-star prefixes only.
    fn tags_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let matches = match pattern.strip_suffix('*') {
            Some(prefix) => self
                .tags
                .iter()
                .filter(|tag| tag.starts_with(prefix))
                .cloned()
                .collect(),
            None => self
                .tags
                .iter()
                .filter(|tag| tag.as_str() == pattern)
                .cloned()
                .collect(),
        };
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_commits() {
        let mut repo = MockRepository::new();
        repo.add_commit("feat: add placement", "");
        repo.add_commit("fix: typo", "details");

        let commits = repo.commits_in_range(None, "HEAD").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].subject, "feat: add placement");
        assert_eq!(commits[1].body, "details");
    }

    #[test]
    fn test_mock_repository_tag_glob() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v1.1.0");
        repo.add_tag("app-2.0.0");

        let tags = repo.tags_matching("v*").unwrap();
        assert_eq!(tags, vec!["v1.0.0", "v1.1.0"]);

        let tags = repo.tags_matching("v1.1.0").unwrap();
        assert_eq!(tags, vec!["v1.1.0"]);
    }

    #[test]
    fn test_mock_repository_default_is_empty() {
        let repo = MockRepository::default();
        assert!(repo.commits_in_range(None, "HEAD").unwrap().is_empty());
        assert!(repo.tags_matching("v*").unwrap().is_empty());
    }
}
