use crate::conventional::{detect_bump, is_releasable};
use crate::domain::{version_from_ref, Commit, TagSet, Version, VersionBump};
use crate::error::{NextVersionError, Result};
use crate::git::Repository;
use serde::{Deserialize, Serialize};

/// Outcome of a version decision.
///
/// Field order is the wire order of the JSON rendering. `version` and `bump`
/// are present exactly when `should_release` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDecision {
    pub should_release: bool,
    pub version: Option<String>,
    pub bump: Option<VersionBump>,
    pub commit_count: usize,
}

impl ReleaseDecision {
    fn no_release() -> Self {
        ReleaseDecision {
            should_release: false,
            version: None,
            bump: None,
            commit_count: 0,
        }
    }
}

/// Decide the next version from explicit inputs.
///
/// The base version is parsed first and fails fast on malformed input, even
/// when no commit would trigger a release. When nothing in `commits` is
/// releasable the decision is a no-release; otherwise the base is bumped per
/// [`detect_bump`] and walked past versions already claimed in `existing_tags`
/// under `tag_prefix`.
pub fn compute_next_version(
    base_version: &str,
    commits: &[Commit],
    existing_tags: &TagSet,
    tag_prefix: &str,
) -> Result<ReleaseDecision> {
    let base = Version::parse(base_version)?;

    let releasable: Vec<Commit> = commits
        .iter()
        .filter(|commit| is_releasable(commit))
        .cloned()
        .collect();
    if releasable.is_empty() {
        return Ok(ReleaseDecision::no_release());
    }

    let bump = detect_bump(&releasable);
    let version = existing_tags.next_available(base.bump(bump), tag_prefix);

    Ok(ReleaseDecision {
        should_release: true,
        version: Some(version.to_string()),
        bump: Some(bump),
        commit_count: releasable.len(),
    })
}

/// Inputs for deciding a release from repository history
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Exclusive start of the commit range; `None` walks the full history
    pub from_ref: Option<String>,
    /// Inclusive end of the commit range
    pub to_ref: String,
    /// Explicit base version; derived from `from_ref` when absent
    pub base_version: Option<String>,
    /// Glob used to list existing release tags
    pub tag_pattern: String,
    /// Prefix joined to versions when checking tag collisions
    pub tag_prefix: String,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        HistoryOptions {
            from_ref: None,
            to_ref: "HEAD".to_string(),
            base_version: None,
            tag_pattern: "v*".to_string(),
            tag_prefix: "v".to_string(),
        }
    }
}

/// Decide the next version from a repository's commit range
pub fn compute_from_repository<R: Repository>(
    repo: &R,
    options: &HistoryOptions,
) -> Result<ReleaseDecision> {
    let commits = repo.commits_in_range(options.from_ref.as_deref(), &options.to_ref)?;
    let tags = TagSet::from_names(repo.tags_matching(&options.tag_pattern)?);

    let base = resolve_base(options)?;
    compute_next_version(&base, &commits, &tags, &options.tag_prefix)
}

fn resolve_base(options: &HistoryOptions) -> Result<String> {
    if let Some(base) = &options.base_version {
        return Ok(base.clone());
    }

    let from_ref = options.from_ref.as_deref().ok_or_else(|| {
        NextVersionError::config("--base-version is required when --from-ref is not set")
    })?;

    version_from_ref(from_ref, &options.tag_prefix)
        .map(|version| version.to_string())
        .ok_or_else(|| {
            NextVersionError::config(
                "--from-ref must be a plain semver tag when --base-version is omitted",
            )
        })
}
