//! A single test inside an AND-group

use std::fmt;

use super::{Bound, Matches, Operator};
use crate::comparator::Comparator;
use crate::Version;

/// One condition of a conjunction
///
/// Tilde, caret, wildcard and hyphen forms expand to `Range`; plain
/// operators stay as `Compare`. Wildcards and the empty constraint are `Any`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Any,
    Compare { operator: Operator, version: Version },
    Range { lower: Bound, upper: Bound },
}

impl Condition {
    pub fn compare(operator: Operator, version: Version) -> Self {
        Condition::Compare { operator, version }
    }

    /// `[lower, upper)`
    pub fn half_open(lower: Version, upper: Version) -> Self {
        Condition::Range {
            lower: Bound::inclusive(lower),
            upper: Bound::exclusive(upper),
        }
    }

    /// `[lower, upper]`
    pub fn closed(lower: Version, upper: Version) -> Self {
        Condition::Range {
            lower: Bound::inclusive(lower),
            upper: Bound::inclusive(upper),
        }
    }

    /// Matches every version, pre-releases of `0.0.0` included
    pub fn any() -> Self {
        Condition::Any
    }
}

impl Matches for Condition {
    fn matches(&self, version: &Version) -> bool {
        match self {
            Condition::Any => true,
            Condition::Compare { operator, version: bound } => Comparator::compare(version, *operator, bound),
            Condition::Range { lower, upper } => lower.admits_from_above(version) && upper.admits_from_below(version),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Any => f.write_str("*"),
            Condition::Compare { operator, version } => write!(f, "{}{}", operator, version),
            Condition::Range { lower, upper } => {
                let lower_op = if lower.is_inclusive() { ">=" } else { ">" };
                let upper_op = if upper.is_inclusive() { "<=" } else { "<" };
                write!(f, "{}{} {}{}", lower_op, lower.version(), upper_op, upper.version())
            }
        }
    }
}
