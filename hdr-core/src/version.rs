use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An API version such as `4.2` (OpenGL) or `1.0` (an extension).
///
/// Ordering is numeric by major then minor, so `1.10` is newer than `1.9`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = String;

    /// Parses `X.Y`; a bare `X` means `X.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("invalid version '{s}', expected 'X.Y'");
        let (major, minor) = s.split_once('.').unwrap_or((s, "0"));
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;
        Ok(Self::new(major, minor))
    }
}

/// Whether an entity introduced in `version` belongs in output targeting `target`.
///
/// Entities without a version, or output without a target, are always valid.
pub fn valid_version(version: Option<Version>, target: Option<Version>) -> bool {
    match (version, target) {
        (Some(version), Some(target)) => version <= target,
        _ => true,
    }
}
