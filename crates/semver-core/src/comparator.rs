//! Version comparison utilities

use crate::constraint::Operator;
use crate::Version;

/// Comparator for comparing versions by SemVer precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2 (build metadata ignored)
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2 (build metadata ignored)
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        match operator {
            Operator::Equal => version1.equals(version2),
            Operator::NotEqual => version1.not_equals(version2),
            Operator::LessThan => version1.less_than(version2),
            Operator::LessThanOrEqual => version1.less_than_or_equal(version2),
            Operator::GreaterThan => version1.greater_than(version2),
            Operator::GreaterThanOrEqual => version1.greater_than_or_equal(version2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::greater_than(&v("1.25.0"), &v("1.25.0-rc.1")));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::less_than(&v("1.0.0-alpha.beta"), &v("1.0.0-beta")));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::equal_to(&v("1.25.0+a"), &v("1.25.0+b")));
        assert!(!Comparator::equal_to(&v("1.25.0-a"), &v("1.25.0")));
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::not_equal_to(&v("1.25.0"), &v("1.25.0+build")));
    }
}
