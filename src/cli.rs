//! CLI definition and command flows.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzer::{self, HistoryOptions, ReleaseDecision};
use crate::config::{self, Config};
use crate::domain::{normalize_commits, Commit, TagSet};
use crate::error::NextVersionError;
use crate::git::Git2Repository;
use crate::output::{self, OutputFormat};

/// Decide the next semantic version from conventional commits.
#[derive(Debug, Parser)]
#[command(name = "next-version")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decide from JSON files of commits and existing tags
    Eval(EvalArgs),

    /// Decide from a git repository's commit range
    Git(GitArgs),
}

/// Arguments for the eval command.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Base version to increment from (major.minor.patch)
    #[arg(long)]
    pub base_version: String,

    /// Path to a JSON array of {subject, body} commit records
    #[arg(long)]
    pub commits_json: PathBuf,

    /// Path to a JSON array of existing tag names
    #[arg(long)]
    pub existing_tags_json: Option<PathBuf>,

    /// Prefix joined to versions when checking tag collisions
    #[arg(long)]
    pub tag_prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Append key=value output to this file instead of stdout
    #[arg(long)]
    pub github_output: Option<PathBuf>,
}

/// Arguments for the git command.
#[derive(Debug, Args)]
pub struct GitArgs {
    /// Repository location (any directory inside the work tree)
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Exclusive start of the commit range, usually the last release tag
    #[arg(long)]
    pub from_ref: Option<String>,

    /// Inclusive end of the commit range
    #[arg(long, default_value = "HEAD")]
    pub to_ref: String,

    /// Base version; derived from --from-ref when omitted
    #[arg(long)]
    pub base_version: Option<String>,

    /// Glob used to list existing release tags
    #[arg(long)]
    pub tag_pattern: Option<String>,

    /// Prefix joined to versions when checking tag collisions
    #[arg(long)]
    pub tag_prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Append key=value output to this file instead of stdout
    #[arg(long)]
    pub github_output: Option<PathBuf>,
}

impl Cli {
    /// Runs the selected subcommand.
    pub fn run(self) -> Result<()> {
        let config = config::load_config(self.config.as_deref())?;
        match self.command {
            Commands::Eval(args) => run_eval(args, &config),
            Commands::Git(args) => run_git(args, &config),
        }
    }
}

/// Runs the eval command against JSON file inputs.
pub fn run_eval(args: EvalArgs, config: &Config) -> Result<()> {
    let commits = load_commits(&args.commits_json)?;
    let tags = match &args.existing_tags_json {
        Some(path) => load_tags(path)?,
        None => TagSet::new(),
    };
    info!(
        commits = commits.len(),
        tags = tags.len(),
        "loaded decision inputs"
    );

    let tag_prefix = args
        .tag_prefix
        .unwrap_or_else(|| config.versioning.tag_prefix.clone());
    let decision =
        analyzer::compute_next_version(&args.base_version, &commits, &tags, &tag_prefix)?;

    emit_decision(
        &decision,
        args.output_format,
        args.github_output.as_deref(),
        config,
    )
}

/// Runs the git command against an on-disk repository.
pub fn run_git(args: GitArgs, config: &Config) -> Result<()> {
    let repo = Git2Repository::open(&args.repo)?;
    debug!(repo = %args.repo.display(), "opened repository");

    let options = HistoryOptions {
        from_ref: args.from_ref,
        to_ref: args.to_ref,
        base_version: args.base_version,
        tag_pattern: args
            .tag_pattern
            .unwrap_or_else(|| config.versioning.tag_pattern.clone()),
        tag_prefix: args
            .tag_prefix
            .unwrap_or_else(|| config.versioning.tag_prefix.clone()),
    };
    let decision = analyzer::compute_from_repository(&repo, &options)?;

    emit_decision(
        &decision,
        args.output_format,
        args.github_output.as_deref(),
        config,
    )
}

fn load_commits(path: &Path) -> Result<Vec<Commit>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let items = value
        .as_array()
        .ok_or_else(|| NextVersionError::config("--commits-json must contain a JSON array"))?;

    Ok(normalize_commits(items)?)
}

fn load_tags(path: &Path) -> Result<TagSet> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let items = value.as_array().ok_or_else(|| {
        NextVersionError::config("--existing-tags-json must contain a JSON array of strings")
    })?;

    let names = items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                NextVersionError::config(
                    "--existing-tags-json must contain a JSON array of strings",
                )
            })
        })
        .collect::<crate::error::Result<Vec<String>>>()?;

    Ok(TagSet::from_names(names))
}

fn emit_decision(
    decision: &ReleaseDecision,
    format: Option<OutputFormat>,
    github_output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    info!(
        should_release = decision.should_release,
        version = decision.version.as_deref().unwrap_or("-"),
        bump = decision.bump.map(|b| b.as_str()).unwrap_or("-"),
        commit_count = decision.commit_count,
        "decision computed"
    );

    let format = format.unwrap_or(config.output.format);
    output::emit(decision, format, github_output)?;
    Ok(())
}
