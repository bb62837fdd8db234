//! Ordered collections of versions

use std::collections::HashSet;
use std::ops::Index;

use crate::constraint::Constraint;
use crate::error::Result;
use crate::Version;

/// An ordered, possibly duplicate-containing list of versions
///
/// Every operation returns a new collection and leaves the receiver as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCollection {
    versions: Vec<Version>,
}

impl VersionCollection {
    pub fn new(versions: Vec<Version>) -> Self {
        VersionCollection { versions }
    }

    /// Parse every string, failing on the first malformed version
    pub fn parse<S: AsRef<str>>(versions: &[S]) -> Result<Self> {
        let versions = versions
            .iter()
            .map(|v| Version::parse(v.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(VersionCollection { versions })
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Version> {
        self.versions.get(index)
    }

    pub fn first(&self) -> Option<&Version> {
        self.versions.first()
    }

    pub fn last(&self) -> Option<&Version> {
        self.versions.last()
    }

    pub fn as_slice(&self) -> &[Version] {
        &self.versions
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.versions.iter().map(|v| v.to_string()).collect()
    }

    /// A new collection with `version` appended
    pub fn add(&self, version: Version) -> Self {
        let mut versions = Vec::with_capacity(self.versions.len() + 1);
        versions.extend(self.versions.iter().cloned());
        versions.push(version);
        VersionCollection { versions }
    }

    /// Ascending precedence; equal versions keep their input order
    pub fn sorted(&self) -> Self {
        let mut versions = self.versions.clone();
        versions.sort_by(|a, b| a.compare_to(b));
        VersionCollection { versions }
    }

    /// Descending precedence; equal versions keep their input order
    pub fn rsorted(&self) -> Self {
        let mut versions = self.versions.clone();
        versions.sort_by(|a, b| b.compare_to(a));
        VersionCollection { versions }
    }

    pub fn max(&self) -> Option<&Version> {
        // max_by returns the last of several equal maxima, like the tail of a stable sort
        self.versions.iter().max_by(|a, b| a.compare_to(b))
    }

    pub fn min(&self) -> Option<&Version> {
        self.versions.iter().min_by(|a, b| a.compare_to(b))
    }

    pub fn satisfying(&self, constraint: &Constraint) -> Self {
        self.filter(|v| constraint.matches(v))
    }

    pub fn max_satisfying(&self, constraint: &Constraint) -> Option<Version> {
        self.satisfying(constraint).max().cloned()
    }

    pub fn min_satisfying(&self, constraint: &Constraint) -> Option<Version> {
        self.satisfying(constraint).min().cloned()
    }

    pub fn stable(&self) -> Self {
        self.filter(Version::is_stable)
    }

    pub fn pre_releases(&self) -> Self {
        self.filter(Version::is_pre_release)
    }

    pub fn major(&self, major: u64) -> Self {
        self.filter(|v| v.major() == major)
    }

    pub fn minor(&self, major: u64, minor: u64) -> Self {
        self.filter(|v| v.major() == major && v.minor() == minor)
    }

    /// Drop versions whose core and pre-release were already seen; build is ignored
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::new();
        self.filter(|v| seen.insert(format!("{}-{}", v.core(), v.pre_release())))
    }

    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&Version) -> T,
    {
        self.versions.iter().map(f).collect()
    }

    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Version) -> bool,
    {
        let versions = self.versions.iter().filter(|v| predicate(*v)).cloned().collect();
        VersionCollection { versions }
    }
}

impl From<Vec<Version>> for VersionCollection {
    fn from(versions: Vec<Version>) -> Self {
        VersionCollection::new(versions)
    }
}

impl FromIterator<Version> for VersionCollection {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        VersionCollection {
            versions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for VersionCollection {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionCollection {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}

impl Index<usize> for VersionCollection {
    type Output = Version;

    fn index(&self, index: usize) -> &Version {
        &self.versions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SemverError;

    fn collection(versions: &[&str]) -> VersionCollection {
        VersionCollection::parse(versions).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(collection(&["1.0.0", "v2.0.0"]).to_strings(), vec!["1.0.0", "2.0.0"]);
        assert_eq!(
            VersionCollection::parse(&["1.0.0", "nope"]),
            Err(SemverError::InvalidVersion("nope".to_string()))
        );
    }

    #[test]
    fn test_add_is_copy_on_write() {
        let original = collection(&["1.0.0"]);
        let added = original.add(Version::new(2, 0, 0));
        assert_eq!(original.len(), 1);
        assert_eq!(added.to_strings(), vec!["1.0.0", "2.0.0"]);
    }

    #[test]
    fn test_sorted_is_stable() {
        let versions = collection(&["1.0.0", "0.1.0", "1.0.0+b2", "3.2.1", "2.4.0-alpha", "2.4.0", "1.0.0+b1"]);
        assert_eq!(
            versions.sorted().to_strings(),
            vec!["0.1.0", "1.0.0", "1.0.0+b2", "1.0.0+b1", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );
        assert_eq!(
            versions.rsorted().to_strings(),
            vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "1.0.0+b2", "1.0.0+b1", "0.1.0"]
        );
        // receiver untouched
        assert_eq!(versions.first().unwrap().to_string(), "1.0.0");
    }

    #[test]
    fn test_max_min() {
        let empty = VersionCollection::default();
        assert!(empty.max().is_none());
        assert!(empty.min().is_none());

        let versions = collection(&["1.2.0", "3.0.0-rc.1", "0.9.0", "2.0.0"]);
        assert_eq!(versions.max().unwrap().to_string(), "3.0.0-rc.1");
        assert_eq!(versions.min().unwrap().to_string(), "0.9.0");
    }

    #[test]
    fn test_satisfying() {
        let versions = collection(&["1.0.0", "1.2.0", "1.9.9", "2.0.0", "2.1.0", "0.9.9"]);
        let tilde = Constraint::parse("~1.0").unwrap();
        assert_eq!(versions.satisfying(&tilde).to_strings(), vec!["1.0.0"]);

        let caret = Constraint::parse("^1.0").unwrap();
        assert_eq!(versions.satisfying(&caret).to_strings(), vec!["1.0.0", "1.2.0", "1.9.9"]);
        assert_eq!(versions.max_satisfying(&caret).unwrap().to_string(), "1.9.9");
        assert_eq!(versions.min_satisfying(&caret).unwrap().to_string(), "1.0.0");

        let none = Constraint::parse(">5").unwrap();
        assert!(versions.max_satisfying(&none).is_none());
    }

    #[test]
    fn test_partitions() {
        let versions = collection(&["0.1.0", "1.0.0", "1.1.0-beta", "2.0.0", "1.1.5"]);
        assert_eq!(versions.stable().to_strings(), vec!["1.0.0", "2.0.0", "1.1.5"]);
        assert_eq!(versions.pre_releases().to_strings(), vec!["1.1.0-beta"]);
        assert_eq!(versions.major(1).to_strings(), vec!["1.0.0", "1.1.0-beta", "1.1.5"]);
        assert_eq!(versions.minor(1, 1).to_strings(), vec!["1.1.0-beta", "1.1.5"]);
    }

    #[test]
    fn test_unique_ignores_build() {
        let versions = collection(&["1.0.0+b1", "1.0.0+b2", "2.0.0"]);
        let unique = versions.unique();
        assert_eq!(unique.len(), 2);
        assert_eq!(unique.to_strings(), vec!["1.0.0+b1", "2.0.0"]);

        let versions = collection(&["1.0.0-rc.1", "1.0.0", "1.0.0-rc.1+x"]);
        assert_eq!(versions.unique().to_strings(), vec!["1.0.0-rc.1", "1.0.0"]);
    }

    #[test]
    fn test_map_and_filter() {
        let versions = collection(&["1.0.0", "2.3.4", "0.1.0"]);
        assert_eq!(versions.map(|v| v.major()), vec![1, 2, 0]);
        assert_eq!(versions.map(|v| v.increment_minor().unwrap())[1].to_string(), "2.4.0");
        assert_eq!(versions.filter(|v| v.minor() > 0).len(), 2);
    }

    #[test]
    fn test_iteration() {
        let versions: VersionCollection = vec![Version::new(1, 0, 0), Version::new(2, 0, 0)].into_iter().collect();
        let majors: Vec<u64> = (&versions).into_iter().map(Version::major).collect();
        assert_eq!(majors, vec![1, 2]);
        assert_eq!(versions[1].to_string(), "2.0.0");
        assert_eq!(versions.into_iter().count(), 2);
    }
}
