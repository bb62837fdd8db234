//! Bound type for range endpoints

use std::fmt;

use crate::Version;

/// One end (lower or upper) of a version range
#[derive(Debug, Clone)]
pub struct Bound {
    version: Version,
    is_inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: Version, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    pub fn inclusive(version: Version) -> Self {
        Self::new(version, true)
    }

    pub fn exclusive(version: Version) -> Self {
        Self::new(version, false)
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// Does `version` sit on or above this bound when used as a lower bound
    pub fn admits_from_above(&self, version: &Version) -> bool {
        if self.is_inclusive {
            version.greater_than_or_equal(&self.version)
        } else {
            version.greater_than(&self.version)
        }
    }

    /// Does `version` sit on or below this bound when used as an upper bound
    pub fn admits_from_below(&self, version: &Version) -> bool {
        if self.is_inclusive {
            version.less_than_or_equal(&self.version)
        } else {
            version.less_than(&self.version)
        }
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.is_inclusive == other.is_inclusive && self.version.identical(&other.version)
    }
}

impl Eq for Bound {}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.version,
            if self.is_inclusive {
                "inclusive"
            } else {
                "exclusive"
            }
        )
    }
}
