//! Matches trait

use crate::Version;

/// Anything a version can be tested against
pub trait Matches: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check whether `version` satisfies this constraint
    fn matches(&self, version: &Version) -> bool;

    /// Keep only the versions that satisfy this constraint
    fn filter<'a>(&self, versions: &'a [Version]) -> Vec<&'a Version> {
        versions.iter().filter(|v| self.matches(v)).collect()
    }
}
