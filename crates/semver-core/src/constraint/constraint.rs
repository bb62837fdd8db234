//! Parsed range constraint in disjunctive normal form

use std::fmt;
use std::str::FromStr;

use super::{Condition, ConstraintParser, Matches};
use crate::error::{Result, SemverError};
use crate::Version;

/// A range expression normalized to OR-groups of AND-conditions
///
/// The text it was parsed from is kept verbatim and used for display.
#[derive(Debug, Clone)]
pub struct Constraint {
    groups: Vec<Vec<Condition>>,
    pretty_string: String,
}

impl Constraint {
    /// Parse a range expression such as `^1.2 || >=2.0.0 <3.0.0`
    pub fn parse(constraints: &str) -> Result<Self> {
        ConstraintParser::new().parse(constraints)
    }

    pub(crate) fn from_groups(groups: Vec<Vec<Condition>>, pretty_string: String) -> Self {
        Constraint {
            groups,
            pretty_string,
        }
    }

    /// A constraint every version at or above `0.0.0` satisfies
    pub fn match_all() -> Self {
        Self::from_groups(vec![vec![Condition::any()]], "*".to_string())
    }

    /// The OR-groups; each inner list is a conjunction
    pub fn groups(&self) -> &[Vec<Condition>] {
        &self.groups
    }

    /// The original input text
    pub fn pretty_string(&self) -> &str {
        &self.pretty_string
    }

    /// True when at least one group has all of its conditions satisfied
    pub fn matches(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|condition| condition.matches(version)))
    }

    /// Both constraints must hold; AND is distributed over each side's OR-groups
    pub fn and(&self, other: &Constraint) -> Constraint {
        let mut groups = Vec::with_capacity(self.groups.len() * other.groups.len());
        for left in &self.groups {
            for right in &other.groups {
                let mut group = Vec::with_capacity(left.len() + right.len());
                group.extend(left.iter().cloned());
                group.extend(right.iter().cloned());
                groups.push(group);
            }
        }

        Constraint {
            groups,
            pretty_string: format!("{} {}", self.pretty_string, other.pretty_string),
        }
    }

    /// Either constraint may hold
    pub fn or(&self, other: &Constraint) -> Constraint {
        let groups = self.groups.iter().chain(&other.groups).cloned().collect();

        Constraint {
            groups,
            pretty_string: format!("{} || {}", self.pretty_string, other.pretty_string),
        }
    }

    /// Bracketed normalized form, e.g. `[>=1.2.0 <2.0.0] || [=3.0.0]`
    pub fn normalized(&self) -> String {
        self.groups
            .iter()
            .map(|group| {
                let conditions: Vec<String> = group.iter().map(|c| c.to_string()).collect();
                format!("[{}]", conditions.join(" "))
            })
            .collect::<Vec<_>>()
            .join(" || ")
    }
}

impl Matches for Constraint {
    fn matches(&self, version: &Version) -> bool {
        Constraint::matches(self, version)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_string)
    }
}

impl FromStr for Constraint {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Constraint::parse(s)
    }
}
