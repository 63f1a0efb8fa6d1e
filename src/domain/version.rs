use crate::error::{NextVersionError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Exactly three dot-separated integer fields; no pre-release or build metadata.
pub(crate) static SEMVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("invalid regex"));

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a bare `major.minor.patch` string (surrounding whitespace tolerated).
    ///
    /// Anything else, including pre-release or build-metadata suffixes, fails
    /// with [`NextVersionError::InvalidSemver`].
    pub fn parse(text: &str) -> Result<Self> {
        let captures = SEMVER_RE
            .captures(text.trim())
            .ok_or_else(|| NextVersionError::invalid_semver(text))?;

        let field = |index: usize| -> Result<u64> {
            captures[index]
                .parse::<u64>()
                .map_err(|_| NextVersionError::invalid_semver(text))
        };

        Ok(Version {
            major: field(1)?,
            minor: field(2)?,
            patch: field(3)?,
        })
    }

    /// Return the version incremented by the given bump level
    pub fn bump(&self, bump: VersionBump) -> Self {
        match bump {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump level decision.
///
/// Variant order gives the natural precedence: `Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Lowercase text form used in rendered output
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Patch => "patch",
            VersionBump::Minor => "minor",
            VersionBump::Major => "major",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionBump {
    type Err = NextVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(VersionBump::Patch),
            "minor" => Ok(VersionBump::Minor),
            "major" => Ok(VersionBump::Major),
            other => Err(NextVersionError::invalid_bump(other)),
        }
    }
}
