use crate::domain::version::{Version, SEMVER_RE};
use std::collections::HashSet;

/// Set of existing release tag names, used to avoid allocating a version twice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: HashSet<String>,
}

impl TagSet {
    /// Create an empty set
    pub fn new() -> Self {
        TagSet::default()
    }

    /// Build a set from raw tag names, trimming entries and dropping empty ones
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .filter_map(|name| {
                let trimmed = name.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();
        TagSet { names }
    }

    /// Add a tag name; whitespace-only names are dropped
    pub fn insert(&mut self, name: impl AsRef<str>) {
        let trimmed = name.as_ref().trim();
        if !trimmed.is_empty() {
            self.names.insert(trimmed.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Walk the patch axis from `candidate` until `{prefix}{version}` is unclaimed.
    ///
    /// Major and minor are never altered.
    pub fn next_available(&self, candidate: Version, prefix: &str) -> Version {
        let mut version = candidate;
        while self.contains(&format!("{}{}", prefix, version)) {
            version.patch += 1;
        }
        version
    }
}

/// Extract the version from a tag reference such as `v1.2.3` or `refs/tags/v1.2.3`.
///
/// Returns `None` unless, after stripping the prefix, a bare `major.minor.patch`
/// string remains.
pub fn version_from_ref(reference: &str, prefix: &str) -> Option<Version> {
    let name = reference.trim();
    let name = name.strip_prefix("refs/tags/").unwrap_or(name);
    let rest = name.strip_prefix(prefix)?;
    if !SEMVER_RE.is_match(rest) {
        return None;
    }
    Version::parse(rest).ok()
}
