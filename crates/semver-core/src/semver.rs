//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::collection::VersionCollection;
use crate::constraint::Constraint;
use crate::error::Result;
use crate::version::{ReleaseType, Version, VersionDiff};
use crate::Comparator;

/// Stateless facade over string inputs
///
/// Every function except `try_parse`, `is_valid` and `coerce` reports
/// malformed input as an error.
pub struct Semver;

impl Semver {
    pub fn parse(version: &str) -> Result<Version> {
        Version::parse(version)
    }

    pub fn try_parse(version: &str) -> Option<Version> {
        Version::try_parse(version)
    }

    pub fn is_valid(version: &str) -> bool {
        Version::is_valid(version)
    }

    pub fn coerce(text: &str) -> Option<Version> {
        Version::coerce(text)
    }

    /// Precedence ordering of two version strings
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering> {
        Ok(Version::parse(version1)?.compare_to(&Version::parse(version2)?))
    }

    pub fn greater_than(version1: &str, version2: &str) -> Result<bool> {
        Self::both(version1, version2, Comparator::greater_than)
    }

    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::both(version1, version2, Comparator::greater_than_or_equal_to)
    }

    pub fn less_than(version1: &str, version2: &str) -> Result<bool> {
        Self::both(version1, version2, Comparator::less_than)
    }

    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::both(version1, version2, Comparator::less_than_or_equal_to)
    }

    pub fn equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::both(version1, version2, Comparator::equal_to)
    }

    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::both(version1, version2, Comparator::not_equal_to)
    }

    fn both(version1: &str, version2: &str, compare: fn(&Version, &Version) -> bool) -> Result<bool> {
        Ok(compare(&Version::parse(version1)?, &Version::parse(version2)?))
    }

    /// Check if a version satisfies a constraint
    pub fn satisfies(version: &str, constraints: &str) -> Result<bool> {
        let version = Version::parse(version)?;
        Ok(Constraint::parse(constraints)?.matches(&version))
    }

    /// Return all versions that satisfy the given constraints, in input order
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Result<Vec<String>> {
        let constraint = Constraint::parse(constraints)?;

        let mut satisfying = Vec::new();
        for version in versions {
            if constraint.matches(&Version::parse(version)?) {
                satisfying.push(version.to_string());
            }
        }
        Ok(satisfying)
    }

    pub fn max_satisfying(versions: &[&str], constraints: &str) -> Result<Option<Version>> {
        let constraint = Constraint::parse(constraints)?;
        Ok(VersionCollection::parse(versions)?.max_satisfying(&constraint))
    }

    pub fn min_satisfying(versions: &[&str], constraints: &str) -> Result<Option<Version>> {
        let constraint = Constraint::parse(constraints)?;
        Ok(VersionCollection::parse(versions)?.min_satisfying(&constraint))
    }

    /// Sort versions in ascending order, failing on the first unparseable entry
    pub fn sort(versions: &[&str]) -> Result<Vec<String>> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>> {
        // Keep the original index so the caller's spelling (e.g. a "v" prefix) survives
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .map(|(i, v)| Version::parse(v).map(|version| (version, i)))
            .collect::<Result<_>>()?;

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare_to(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        Ok(parsed.into_iter().map(|(_, i)| versions[i].to_string()).collect())
    }

    pub fn increment(version: &str, release: ReleaseType) -> Result<Version> {
        Version::parse(version)?.increment(release)
    }

    pub fn diff(version1: &str, version2: &str) -> Result<Option<VersionDiff>> {
        Ok(Version::parse(version1)?.diff(&Version::parse(version2)?))
    }
}
