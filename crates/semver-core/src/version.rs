//! The SemVer 2.0.0 version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::error::{Result, SemverError};
use crate::identifier::{BuildMetadata, IdentifierInput, PreRelease};

lazy_static! {
    // Canonical SemVer 2.0.0 grammar with an optional leading "v"
    static ref VERSION_RE: Regex = Regex::new(
        r"^v?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$"
    ).unwrap();

    // Leading MAJOR[.MINOR[.PATCH]] run, after optional whitespace and "v"
    static ref COERCE_RE: Regex = Regex::new(r"^\s*[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap();
}

/// Which field of a version to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    PreRelease,
}

/// The most significant field in which two versions differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionDiff {
    Major,
    Minor,
    Patch,
    PreRelease,
    Build,
}

impl VersionDiff {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionDiff::Major => "major",
            VersionDiff::Minor => "minor",
            VersionDiff::Patch => "patch",
            VersionDiff::PreRelease => "prerelease",
            VersionDiff::Build => "build",
        }
    }
}

impl fmt::Display for VersionDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat, machine-readable decomposition of a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build: String,
    pub full: String,
}

/// An immutable semantic version
///
/// Equality, ordering and hashing follow SemVer precedence and therefore
/// ignore build metadata; use [`Version::identical`] for an exact match.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: PreRelease,
    build: BuildMetadata,
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: PreRelease::empty(),
            build: BuildMetadata::empty(),
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: PreRelease,
        build: BuildMetadata,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    /// Create a version from signed components and raw identifier input
    ///
    /// Pre-release and build may be dotted text or identifier lists; an empty
    /// string or list leaves the field unset.
    pub fn create(
        major: i64,
        minor: i64,
        patch: i64,
        pre_release: impl Into<IdentifierInput>,
        build: impl Into<IdentifierInput>,
    ) -> Result<Self> {
        Ok(Version {
            major: non_negative("major", major)?,
            minor: non_negative("minor", minor)?,
            patch: non_negative("patch", patch)?,
            pre_release: PreRelease::from_input(pre_release)?,
            build: BuildMetadata::from_input(build)?,
        })
    }

    /// Parse a canonical version string, optionally prefixed with `v`
    pub fn parse(version: &str) -> Result<Self> {
        log::trace!("Parsing version \"{}\"", version);

        let invalid = || SemverError::InvalidVersion(version.to_string());
        let caps = VERSION_RE.captures(version).ok_or_else(invalid)?;

        let component = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());
        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;

        let pre_release = match caps.get(4) {
            Some(m) => PreRelease::new(m.as_str())?,
            None => PreRelease::empty(),
        };
        let build = match caps.get(5) {
            Some(m) => BuildMetadata::new(m.as_str())?,
            None => BuildMetadata::empty(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Like [`Version::parse`] but yields `None` for malformed input
    pub fn try_parse(version: &str) -> Option<Self> {
        Self::parse(version).ok()
    }

    /// Check the canonical grammar without building a value
    pub fn is_valid(version: &str) -> bool {
        VERSION_RE.is_match(version)
    }

    /// Leniently read a leading `MAJOR[.MINOR[.PATCH]]` from arbitrary text
    pub fn coerce(text: &str) -> Option<Self> {
        let caps = COERCE_RE.captures(text)?;
        let component = |i: usize| match caps.get(i) {
            Some(m) => m.as_str().parse::<u64>().ok(),
            None => Some(0),
        };
        let version = Version::new(component(1)?, component(2)?, component(3)?);
        log::trace!("Coerced \"{}\" to {}", text, version);
        Some(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    pub fn build(&self) -> &BuildMetadata {
        &self.build
    }

    /// `MAJOR.MINOR.PATCH` without pre-release or build
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Precedence comparison; build metadata is never consulted
    pub fn compare_to(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.pre_release.cmp(&other.pre_release))
    }

    pub fn equals(&self, other: &Version) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    pub fn not_equals(&self, other: &Version) -> bool {
        !self.equals(other)
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare_to(other) == Ordering::Less
    }

    pub fn less_than_or_equal(&self, other: &Version) -> bool {
        self.compare_to(other) != Ordering::Greater
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    pub fn greater_than_or_equal(&self, other: &Version) -> bool {
        self.compare_to(other) != Ordering::Less
    }

    /// Exact identity, including build metadata
    pub fn identical(&self, other: &Version) -> bool {
        self.equals(other) && self.build == other.build
    }

    pub fn is_stable(&self) -> bool {
        self.pre_release.is_empty() && self.major > 0
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn is_development(&self) -> bool {
        self.major == 0
    }

    pub fn has_build(&self) -> bool {
        !self.build.is_empty()
    }

    pub fn increment_major(&self) -> Result<Self> {
        Ok(Version::new(bump(self.major, "major")?, 0, 0))
    }

    pub fn increment_minor(&self) -> Result<Self> {
        Ok(Version::new(self.major, bump(self.minor, "minor")?, 0))
    }

    pub fn increment_patch(&self) -> Result<Self> {
        Ok(Version::new(self.major, self.minor, bump(self.patch, "patch")?))
    }

    pub fn increment_pre_release(&self) -> Self {
        Version {
            pre_release: self.pre_release.increment(),
            ..Version::new(self.major, self.minor, self.patch)
        }
    }

    /// Fails with `ComponentOverflow` when the bumped field is already `u64::MAX`
    pub fn increment(&self, release: ReleaseType) -> Result<Self> {
        match release {
            ReleaseType::Major => self.increment_major(),
            ReleaseType::Minor => self.increment_minor(),
            ReleaseType::Patch => self.increment_patch(),
            ReleaseType::PreRelease => Ok(self.increment_pre_release()),
        }
    }

    pub fn with_pre_release(&self, pre_release: impl Into<IdentifierInput>) -> Result<Self> {
        Ok(Version {
            pre_release: PreRelease::from_input(pre_release)?,
            ..self.clone()
        })
    }

    pub fn without_pre_release(&self) -> Self {
        Version {
            pre_release: PreRelease::empty(),
            ..self.clone()
        }
    }

    pub fn with_build(&self, build: impl Into<IdentifierInput>) -> Result<Self> {
        Ok(Version {
            build: BuildMetadata::from_input(build)?,
            ..self.clone()
        })
    }

    pub fn without_build(&self) -> Self {
        Version {
            build: BuildMetadata::empty(),
            ..self.clone()
        }
    }

    /// First differing field, in major, minor, patch, pre-release, build order
    pub fn diff(&self, other: &Version) -> Option<VersionDiff> {
        if self.major != other.major {
            Some(VersionDiff::Major)
        } else if self.minor != other.minor {
            Some(VersionDiff::Minor)
        } else if self.patch != other.patch {
            Some(VersionDiff::Patch)
        } else if self.pre_release != other.pre_release {
            Some(VersionDiff::PreRelease)
        } else if self.build != other.build {
            Some(VersionDiff::Build)
        } else {
            None
        }
    }

    pub fn satisfies(&self, constraint: &Constraint) -> bool {
        constraint.matches(self)
    }

    pub fn to_record(&self) -> VersionRecord {
        VersionRecord {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: self.pre_release.to_string(),
            build: self.build.to_string(),
            full: self.to_string(),
        }
    }
}

fn non_negative(component: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| SemverError::NegativeComponent { component, value })
}

fn bump(value: u64, component: &'static str) -> Result<u64> {
    value.checked_add(1).ok_or(SemverError::ComponentOverflow(component))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
