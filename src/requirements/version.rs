//! Interpreter version parsing and comparison.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_PYTHON_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

static RE_BARE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?\s*$").unwrap());

/// A `major.minor.patch` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the version from `--version` output such as `Python 3.11.4`.
    ///
    /// Pre-release suffixes (`3.13.0rc1`) are ignored.
    pub fn from_banner(output: &str) -> Option<Self> {
        let caps = RE_PYTHON_VERSION.captures(output)?;
        let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse().ok());
        Some(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3).unwrap_or(0),
        })
    }

    /// Whether this version satisfies `minimum`.
    pub fn satisfies(&self, minimum: &PythonVersion) -> bool {
        self >= minimum
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    /// Parse a bare `X`, `X.Y` or `X.Y.Z` version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RE_BARE_VERSION
            .captures(s)
            .ok_or_else(|| format!("invalid version: {}", s))?;
        let part = |i: usize| -> Result<u32, String> {
            caps.get(i)
                .map(|m| m.as_str().parse().map_err(|_| format!("invalid version: {}", s)))
                .unwrap_or(Ok(0))
        };
        Ok(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
        })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
