//! Decision rendering and emission.
//!
//! Pure formatting is separated from emission so the exact output text is
//! testable without touching stdout or a CI output file.

use crate::analyzer::ReleaseDecision;
use crate::error::Result;
use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Rendering formats for a decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON object
    #[default]
    Json,
    /// Flat `key=value` lines for CI output files
    Github,
}

/// Render a decision as a single-line JSON object
pub fn render_json(decision: &ReleaseDecision) -> Result<String> {
    Ok(serde_json::to_string(decision)?)
}

/// Render a decision as flat `key=value` lines.
///
/// `should_release` and `commit_count` are always present; `version` and
/// `bump` appear only when the decision carries them.
pub fn render_github(decision: &ReleaseDecision) -> String {
    let mut lines = vec![
        format!("should_release={}", decision.should_release),
        format!("commit_count={}", decision.commit_count),
    ];
    if let Some(version) = &decision.version {
        lines.push(format!("version={}", version));
    }
    if let Some(bump) = decision.bump {
        lines.push(format!("bump={}", bump));
    }
    lines.join("\n") + "\n"
}

/// Write a decision to its destination.
///
/// JSON always goes to stdout. The github format goes to stdout too, unless
/// `github_output` names a file, in which case the lines are appended there.
pub fn emit(
    decision: &ReleaseDecision,
    format: OutputFormat,
    github_output: Option<&Path>,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(decision)?),
        OutputFormat::Github => {
            let payload = render_github(decision);
            match github_output {
                Some(path) => {
                    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                    file.write_all(payload.as_bytes())?;
                }
                None => print!("{}", payload),
            }
        }
    }
    Ok(())
}

/// Print an error message in red to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}
