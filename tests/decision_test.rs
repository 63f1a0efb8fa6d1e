// tests/decision_test.rs
use next_version::analyzer::{compute_from_repository, HistoryOptions};
use next_version::compute_next_version;
use next_version::domain::{Commit, TagSet, VersionBump};
use next_version::git::MockRepository;

fn commit(subject: &str) -> Commit {
    Commit::new(subject, "")
}

#[test]
fn test_feature_commit_bumps_minor() {
    let commits = vec![
        commit("feat: add config file discovery"),
        commit("fix: handle empty input"),
        commit("docs: update readme"),
    ];

    let decision = compute_next_version("1.2.3", &commits, &TagSet::new(), "v").unwrap();
    assert!(decision.should_release);
    assert_eq!(decision.version.as_deref(), Some("1.3.0"));
    assert_eq!(decision.bump, Some(VersionBump::Minor));
    assert_eq!(decision.commit_count, 2);
}

#[test]
fn test_breaking_change_bumps_major() {
    let commits = vec![
        commit("fix: small cleanup"),
        Commit::new(
            "refactor: rework storage layout",
            "Storage files move under .cache.\n\nBREAKING CHANGE: old layouts are not migrated",
        ),
    ];

    let decision = compute_next_version("1.2.3", &commits, &TagSet::new(), "v").unwrap();
    assert_eq!(decision.version.as_deref(), Some("2.0.0"));
    assert_eq!(decision.bump, Some(VersionBump::Major));
    assert_eq!(decision.commit_count, 2);
}

#[test]
fn test_fix_and_perf_bump_patch() {
    let commits = vec![
        commit("fix: resolve login issue"),
        commit("perf: cache tag lookups"),
    ];

    let decision = compute_next_version("0.9.1", &commits, &TagSet::new(), "v").unwrap();
    assert_eq!(decision.version.as_deref(), Some("0.9.2"));
    assert_eq!(decision.bump, Some(VersionBump::Patch));
}

#[test]
fn test_non_releasable_history_yields_no_release() {
    let commits = vec![
        commit("docs: clarify usage"),
        commit("chore: bump ci runner"),
        commit("style: reformat"),
        commit("chore(release): v1.2.3"),
    ];

    let decision = compute_next_version("1.2.3", &commits, &TagSet::new(), "v").unwrap();
    assert!(!decision.should_release);
    assert_eq!(decision.version, None);
    assert_eq!(decision.bump, None);
    assert_eq!(decision.commit_count, 0);
}

#[test]
fn test_collision_walks_patch_axis() {
    let tags = TagSet::from_names(vec!["v1.3.0".to_string(), "v1.3.1".to_string()]);
    let commits = vec![commit("feat: new subcommand")];

    let decision = compute_next_version("1.2.9", &commits, &tags, "v").unwrap();
    assert_eq!(decision.version.as_deref(), Some("1.3.2"));
    assert_eq!(decision.bump, Some(VersionBump::Minor));
}

#[test]
fn test_collision_respects_custom_prefix() {
    // Claimed under "release-", free under "v".
    let tags = TagSet::from_names(vec!["release-1.2.4".to_string()]);
    let commits = vec![commit("fix: off by one")];

    let with_prefix = compute_next_version("1.2.3", &commits, &tags, "release-").unwrap();
    assert_eq!(with_prefix.version.as_deref(), Some("1.2.5"));

    let other_prefix = compute_next_version("1.2.3", &commits, &tags, "v").unwrap();
    assert_eq!(other_prefix.version.as_deref(), Some("1.2.4"));
}

#[test]
fn test_invalid_base_version_is_rejected() {
    let err = compute_next_version("1.2", &[commit("docs: nothing")], &TagSet::new(), "v")
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid semver: 1.2");
}

#[test]
fn test_json_wire_shape() {
    let commits = vec![commit("feat: wire format")];
    let decision = compute_next_version("1.2.3", &commits, &TagSet::new(), "v").unwrap();

    let json = serde_json::to_string(&decision).unwrap();
    assert_eq!(
        json,
        r#"{"should_release":true,"version":"1.3.0","bump":"minor","commit_count":1}"#
    );

    let quiet = compute_next_version("1.2.3", &[], &TagSet::new(), "v").unwrap();
    let json = serde_json::to_string(&quiet).unwrap();
    assert_eq!(
        json,
        r#"{"should_release":false,"version":null,"bump":null,"commit_count":0}"#
    );
}

#[test]
fn test_repository_flow_derives_base_from_tag() {
    let mut repo = MockRepository::default();
    repo.add_commit("feat: support custom prefixes", "");
    repo.add_commit("fix: trim ref names", "");
    repo.add_tag("v1.4.0");

    let options = HistoryOptions {
        from_ref: Some("v1.4.0".to_string()),
        ..HistoryOptions::default()
    };
    let decision = compute_from_repository(&repo, &options).unwrap();
    assert_eq!(decision.version.as_deref(), Some("1.5.0"));
    assert_eq!(decision.bump, Some(VersionBump::Minor));
    assert_eq!(decision.commit_count, 2);
}

#[test]
fn test_repository_flow_requires_base_source() {
    let repo = MockRepository::default();

    let err = compute_from_repository(&repo, &HistoryOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: --base-version is required when --from-ref is not set"
    );
}

#[test]
fn test_repository_flow_rejects_non_semver_from_ref() {
    let mut repo = MockRepository::default();
    repo.add_commit("feat: anything", "");

    let options = HistoryOptions {
        from_ref: Some("nightly-2024".to_string()),
        ..HistoryOptions::default()
    };
    let err = compute_from_repository(&repo, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: --from-ref must be a plain semver tag when --base-version is omitted"
    );
}

#[test]
fn test_repository_flow_explicit_base_wins() {
    let mut repo = MockRepository::default();
    repo.add_commit("fix: edge case in parser", "");
    repo.add_tag("v3.0.0");

    let options = HistoryOptions {
        from_ref: Some("v3.0.0".to_string()),
        base_version: Some("4.1.0".to_string()),
        ..HistoryOptions::default()
    };
    let decision = compute_from_repository(&repo, &options).unwrap();
    assert_eq!(decision.version.as_deref(), Some("4.1.1"));
}

#[test]
fn test_repository_flow_skips_claimed_tags() {
    let mut repo = MockRepository::default();
    repo.add_commit("fix: follow-up", "");
    repo.add_tag("v2.0.0");
    repo.add_tag("v2.0.1");

    let options = HistoryOptions {
        from_ref: Some("v2.0.0".to_string()),
        ..HistoryOptions::default()
    };
    let decision = compute_from_repository(&repo, &options).unwrap();
    assert_eq!(decision.version.as_deref(), Some("2.0.2"));
}
