//! Dot-separated identifier lists used by pre-release and build metadata

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SemverError};

/// Identifiers supplied either as dotted text (`"alpha.1"`) or as an explicit list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierInput {
    Dotted(String),
    List(Vec<String>),
}

impl IdentifierInput {
    fn into_parts(self) -> Vec<String> {
        match self {
            IdentifierInput::Dotted(text) if text.is_empty() => Vec::new(),
            IdentifierInput::Dotted(text) => text.split('.').map(str::to_string).collect(),
            IdentifierInput::List(parts) => parts,
        }
    }
}

impl From<&str> for IdentifierInput {
    fn from(text: &str) -> Self {
        IdentifierInput::Dotted(text.to_string())
    }
}

impl From<String> for IdentifierInput {
    fn from(text: String) -> Self {
        IdentifierInput::Dotted(text)
    }
}

impl From<Vec<String>> for IdentifierInput {
    fn from(parts: Vec<String>) -> Self {
        IdentifierInput::List(parts)
    }
}

impl From<Vec<&str>> for IdentifierInput {
    fn from(parts: Vec<&str>) -> Self {
        IdentifierInput::List(parts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for IdentifierInput {
    fn from(parts: &[&str]) -> Self {
        IdentifierInput::List(parts.iter().map(|p| p.to_string()).collect())
    }
}

fn is_identifier(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

pub(crate) fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn write_dotted(f: &mut fmt::Formatter<'_>, parts: &[String]) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        f.write_str(part)?;
    }
    Ok(())
}

/// Pre-release identifiers, e.g. `alpha.1`
///
/// An empty list means the version has no pre-release and therefore
/// outranks every pre-release of the same core version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<String>,
}

impl PreRelease {
    /// Parse dotted pre-release text; the empty string means "no pre-release"
    pub fn new(text: &str) -> Result<Self> {
        Self::from_input(IdentifierInput::from(text))
    }

    /// Build from either dotted text or an explicit identifier list
    pub fn from_input(input: impl Into<IdentifierInput>) -> Result<Self> {
        let identifiers = input.into().into_parts();
        for part in &identifiers {
            if !is_identifier(part) {
                return Err(SemverError::InvalidPreRelease(part.clone()));
            }
            if is_numeric(part) && part.len() > 1 && part.starts_with('0') {
                return Err(SemverError::InvalidPreRelease(part.clone()));
            }
        }
        Ok(PreRelease { identifiers })
    }

    pub fn empty() -> Self {
        PreRelease::default()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Next pre-release: `[]` becomes `0`, a numeric tail is bumped, otherwise `.1` is appended
    pub fn increment(&self) -> Self {
        let mut identifiers = self.identifiers.clone();
        match identifiers.last_mut() {
            None => identifiers.push("0".to_string()),
            Some(last) if is_numeric(last) => *last = increment_decimal(last),
            Some(_) => identifiers.push("1".to_string()),
        }
        PreRelease { identifiers }
    }
}

/// Add one to a decimal digit string without going through a fixed-width integer
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    let mut carried = String::with_capacity(bytes.len() + 1);
    carried.push('1');
    carried.push_str(&String::from_utf8_lossy(&bytes));
    carried
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        // no leading zeros, so a longer digit string is always the larger number
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for (a, b) in self.identifiers.iter().zip(&other.identifiers) {
                    let ordering = compare_identifier(a, b);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                self.identifiers.len().cmp(&other.identifiers.len())
            }
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

/// Build metadata identifiers, e.g. `build.007`
///
/// Never consulted for precedence; only compared for exact equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    identifiers: Vec<String>,
}

impl BuildMetadata {
    pub fn new(text: &str) -> Result<Self> {
        Self::from_input(IdentifierInput::from(text))
    }

    pub fn from_input(input: impl Into<IdentifierInput>) -> Result<Self> {
        let identifiers = input.into().into_parts();
        if let Some(bad) = identifiers.iter().find(|part| !is_identifier(part)) {
            return Err(SemverError::InvalidBuild(bad.clone()));
        }
        Ok(BuildMetadata { identifiers })
    }

    pub fn empty() -> Self {
        BuildMetadata::default()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre(text: &str) -> PreRelease {
        PreRelease::new(text).unwrap()
    }

    #[test]
    fn test_pre_release_validation() {
        assert!(PreRelease::new("alpha.1").is_ok());
        assert!(PreRelease::new("0").is_ok());
        assert!(PreRelease::new("x-y-z.--").is_ok());
        assert!(PreRelease::new("0a").is_ok());
        assert_eq!(PreRelease::new("01"), Err(SemverError::InvalidPreRelease("01".to_string())));
        assert_eq!(PreRelease::new("alpha..1"), Err(SemverError::InvalidPreRelease(String::new())));
        assert_eq!(PreRelease::new("alpha_1"), Err(SemverError::InvalidPreRelease("alpha_1".to_string())));
        assert!(PreRelease::new("alpha.").is_err());
    }

    #[test]
    fn test_empty_text_means_no_pre_release() {
        assert!(pre("").is_empty());
        assert!(PreRelease::from_input(Vec::<String>::new()).unwrap().is_empty());
        assert!(PreRelease::from_input(vec![""]).is_err());
    }

    #[test]
    fn test_list_input() {
        let from_list = PreRelease::from_input(vec!["beta", "2"]).unwrap();
        assert_eq!(from_list, pre("beta.2"));
        assert_eq!(from_list.to_string(), "beta.2");
        assert!(PreRelease::from_input(vec!["beta.2"]).is_err());
    }

    #[test]
    fn test_build_allows_leading_zeros() {
        let build = BuildMetadata::new("build.007").unwrap();
        assert_eq!(build.identifiers(), &["build".to_string(), "007".to_string()]);
        assert_eq!(BuildMetadata::new("a+b"), Err(SemverError::InvalidBuild("a+b".to_string())));
        assert!(BuildMetadata::new("a..b").is_err());
    }

    #[test]
    fn test_pre_release_precedence_chain() {
        let chain = ["alpha", "alpha.1", "alpha.beta", "beta", "beta.2", "beta.11", "rc.1", ""];
        for pair in chain.windows(2) {
            assert!(pre(pair[0]) < pre(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_numeric_identifiers_compare_by_value() {
        assert!(pre("2") < pre("10"));
        assert!(pre("99999999999999999999999") > pre("99999999999999999999998"));
        assert!(pre("1") < pre("a"));
        assert!(pre("B") < pre("a"));
    }

    #[test]
    fn test_increment() {
        assert_eq!(PreRelease::empty().increment().to_string(), "0");
        assert_eq!(pre("alpha").increment().to_string(), "alpha.1");
        assert_eq!(pre("alpha.1").increment().to_string(), "alpha.2");
        assert_eq!(pre("rc.9").increment().to_string(), "rc.10");
        assert_eq!(pre("99").increment().to_string(), "100");
    }
}
