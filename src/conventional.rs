//! Conventional-commit classification. All subject patterns are matched
//! case-insensitively against the trimmed subject line; body patterns anchor
//! at line starts within the raw body.

use crate::domain::{Commit, VersionBump};
use regex::Regex;
use std::sync::LazyLock;

// Automated release markers, e.g. "chore(release): v1.2.3" or "chore(release): v1.2.3-rc.1".
static RELEASE_SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^chore\(release\):\s*v[0-9]+\.[0-9]+\.[0-9]+([-.][0-9A-Za-z.-]+)?$")
        .expect("invalid regex")
});

// "type(scope)!:" style breaking marker in the subject line.
static BREAKING_SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9_-]+(\([^)]+\))?!:").expect("invalid regex"));

// "BREAKING CHANGE:" / "BREAKING-CHANGE:" opening any body line.
static BREAKING_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^BREAKING[ -]CHANGE:").expect("invalid regex"));

static FEATURE_SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^feat(\([^)]+\))?:").expect("invalid regex"));

// Types that trigger a release even without a breaking marker. The optional "!"
// overlaps BREAKING_SUBJECT_RE on purpose; the checks stay separate because
// their type character classes differ.
static RELEASABLE_SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(feat|fix|perf)(\([^)]+\))?!?:").expect("invalid regex"));

/// True for automated release-marker subjects such as `chore(release): v1.2.3`
pub fn is_release_commit(subject: &str) -> bool {
    RELEASE_SUBJECT_RE.is_match(subject.trim())
}

/// True if the subject carries a `!:` marker or the body declares a breaking change
pub fn is_breaking_change(commit: &Commit) -> bool {
    BREAKING_SUBJECT_RE.is_match(commit.subject.trim()) || BREAKING_BODY_RE.is_match(&commit.body)
}

/// True for `feat:` / `feat(scope):` subjects
pub fn is_feature(subject: &str) -> bool {
    FEATURE_SUBJECT_RE.is_match(subject.trim())
}

/// True for feat/fix/perf subjects, with or without a breaking marker
pub fn is_releasable_type(subject: &str) -> bool {
    RELEASABLE_SUBJECT_RE.is_match(subject.trim())
}

/// Whether a commit should trigger a release at all.
///
/// Empty subjects and release markers never do; breaking changes always do;
/// otherwise the subject type decides.
pub fn is_releasable(commit: &Commit) -> bool {
    let subject = commit.subject.trim();
    if subject.is_empty() || is_release_commit(subject) {
        return false;
    }
    if is_breaking_change(commit) {
        return true;
    }
    is_releasable_type(subject)
}

/// Resolve the bump level for a list of commits in a single forward pass.
///
/// The first breaking commit returns [`VersionBump::Major`] immediately; a
/// feature upgrades the default [`VersionBump::Patch`] to [`VersionBump::Minor`].
/// Empty subjects and release markers are skipped, so unfiltered input is safe.
pub fn detect_bump(commits: &[Commit]) -> VersionBump {
    let mut bump = VersionBump::Patch;

    for commit in commits {
        let subject = commit.subject.trim();
        if subject.is_empty() || is_release_commit(subject) {
            continue;
        }
        if is_breaking_change(commit) {
            return VersionBump::Major;
        }
        if bump == VersionBump::Patch && is_feature(subject) {
            bump = VersionBump::Minor;
        }
    }

    bump
}
