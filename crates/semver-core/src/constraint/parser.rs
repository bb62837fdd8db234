//! Range expression parsing

use lazy_static::lazy_static;
use regex::Regex;

use super::{Condition, Constraint, Operator};
use crate::error::{Result, SemverError};
use crate::identifier::{BuildMetadata, PreRelease};
use crate::Version;

lazy_static! {
    // OR constraint splitter
    static ref OR_CONSTRAINT_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();

    // Hyphen Range
    static ref HYPHEN_RE: Regex = Regex::new(r"^(?P<from>\S+)\s+-\s+(?P<to>\S+)$").unwrap();

    // Leading operator symbols, including ones we do not recognize
    static ref OPERATOR_RE: Regex = Regex::new(r"^([<>=!~^]*)\s*(.*)$").unwrap();

    // Possibly partial version with x/X/* wildcards
    static ref PARTIAL_RE: Regex = Regex::new(
        r"^v?(\d+|[xX*])(?:\.(\d+|[xX*]))?(?:\.(\d+|[xX*]))?(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$"
    ).unwrap();
}

/// A version where trailing components may be omitted or wildcarded
#[derive(Debug)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre_release: PreRelease,
    build: BuildMetadata,
}

impl Partial {
    /// Missing components default to 0
    fn floor(&self) -> Version {
        Version::from_parts(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
            self.pre_release.clone(),
            self.build.clone(),
        )
    }

    fn is_full(&self) -> bool {
        self.patch.is_some()
    }
}

fn bump(component: u64, constraint: &str) -> Result<u64> {
    component
        .checked_add(1)
        .ok_or_else(|| SemverError::constraint(constraint, "version component overflow"))
}

/// Parser turning range expressions into [`Constraint`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintParser;

impl ConstraintParser {
    /// Create a new constraint parser
    pub fn new() -> Self {
        ConstraintParser
    }

    /// Parse a constraint string into its normalized OR-of-ANDs form
    pub fn parse(&self, constraints: &str) -> Result<Constraint> {
        log::trace!("Parsing constraint \"{}\"", constraints);
        let pretty_constraint = constraints.to_string();
        let trimmed = constraints.trim();

        if trimmed.is_empty() {
            return Ok(Constraint::from_groups(vec![vec![Condition::any()]], pretty_constraint));
        }

        let or_constraints: Vec<&str> = OR_CONSTRAINT_RE.split(trimmed).collect();

        // Check for leading/trailing operators
        if or_constraints.first().is_some_and(|s| s.is_empty()) {
            return Err(SemverError::constraint(trimmed, "leading operator"));
        }
        if or_constraints.last().is_some_and(|s| s.is_empty()) {
            return Err(SemverError::constraint(trimmed, "trailing operator"));
        }

        let mut or_groups = Vec::with_capacity(or_constraints.len());
        for or_constraint in or_constraints {
            if or_constraint.is_empty() {
                return Err(SemverError::constraint(trimmed, "empty alternative between \"||\""));
            }
            or_groups.push(self.parse_group(or_constraint)?);
        }

        Ok(Constraint::from_groups(or_groups, pretty_constraint))
    }

    fn parse_group(&self, group: &str) -> Result<Vec<Condition>> {
        // Hyphen ranges win over whitespace tokenization
        if let Some(caps) = HYPHEN_RE.captures(group) {
            let condition = self.parse_hyphen_constraint(&caps["from"], &caps["to"], group)?;
            return Ok(vec![condition]);
        }

        let mut conditions = Vec::new();
        for and_constraint in self.split_and_constraints(group) {
            conditions.extend(self.parse_constraint(&and_constraint)?);
        }
        Ok(conditions)
    }

    /// Split on whitespace and commas, keeping a bare operator attached to its version
    fn split_and_constraints(&self, input: &str) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();
        let mut pending_operator = String::new();

        for piece in input.split(|c: char| c == ',' || c.is_whitespace()) {
            if piece.is_empty() {
                continue;
            }
            if piece.chars().all(|c| matches!(c, '<' | '>' | '=' | '!' | '~' | '^')) {
                pending_operator.push_str(piece);
                continue;
            }
            parts.push(format!("{}{}", std::mem::take(&mut pending_operator), piece));
        }

        if !pending_operator.is_empty() {
            parts.push(pending_operator);
        }

        parts
    }

    fn parse_constraint(&self, constraint: &str) -> Result<Vec<Condition>> {
        let caps = OPERATOR_RE
            .captures(constraint)
            .ok_or_else(|| SemverError::constraint(constraint, "Could not parse constraint"))?;
        let operator = caps.get(1).map_or("", |m| m.as_str());
        let version = caps.get(2).map_or("", |m| m.as_str()).trim();

        if version.is_empty() {
            return Err(SemverError::constraint(constraint, "empty version"));
        }

        let conditions = match operator {
            "~" => vec![self.parse_tilde_constraint(version, constraint)?],
            "^" => vec![self.parse_caret_constraint(version, constraint)?],
            _ => {
                let op: Operator = operator.parse()?;
                let partial = self.parse_partial(version, constraint)?;
                if op == Operator::Equal && !partial.is_full() {
                    vec![self.parse_x_range_constraint(&partial, constraint)?]
                } else {
                    vec![Condition::compare(op, partial.floor())]
                }
            }
        };

        log::debug!(
            "Expanded constraint \"{}\" to [{}]",
            constraint,
            conditions.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
        );
        Ok(conditions)
    }

    fn parse_partial(&self, version: &str, constraint: &str) -> Result<Partial> {
        let caps = PARTIAL_RE
            .captures(version)
            .ok_or_else(|| SemverError::constraint(constraint, format!("Invalid version \"{}\"", version)))?;

        let mut components = [None; 3];
        let mut seen_wildcard = false;
        for (i, slot) in components.iter_mut().enumerate() {
            let Some(m) = caps.get(i + 1) else {
                seen_wildcard = true;
                continue;
            };
            let part = m.as_str();
            if matches!(part, "x" | "X" | "*") {
                seen_wildcard = true;
                continue;
            }
            if seen_wildcard {
                return Err(SemverError::constraint(
                    constraint,
                    format!("numeric component \"{}\" after a wildcard", part),
                ));
            }
            if part.len() > 1 && part.starts_with('0') {
                return Err(SemverError::LeadingZeros(part.to_string()));
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| SemverError::constraint(constraint, format!("component \"{}\" is too large", part)))?;
            *slot = Some(value);
        }
        let [major, minor, patch] = components;

        let pre_release = caps.get(4).map_or("", |m| m.as_str());
        let build = caps.get(5).map_or("", |m| m.as_str());
        if patch.is_none() && (!pre_release.is_empty() || !build.is_empty()) {
            return Err(SemverError::constraint(
                constraint,
                format!("pre-release or build on partial version \"{}\"", version),
            ));
        }

        Ok(Partial {
            major,
            minor,
            patch,
            pre_release: PreRelease::new(pre_release)?,
            build: BuildMetadata::new(build)?,
        })
    }

    fn parse_x_range_constraint(&self, partial: &Partial, constraint: &str) -> Result<Condition> {
        let condition = match (partial.major, partial.minor) {
            (None, _) => Condition::any(),
            (Some(major), None) => Condition::half_open(Version::new(major, 0, 0), Version::new(bump(major, constraint)?, 0, 0)),
            (Some(major), Some(minor)) => Condition::half_open(
                Version::new(major, minor, 0),
                Version::new(major, bump(minor, constraint)?, 0),
            ),
        };
        Ok(condition)
    }

    fn parse_tilde_constraint(&self, version: &str, constraint: &str) -> Result<Condition> {
        let partial = self.parse_partial(version, constraint)?;
        let condition = match (partial.major, partial.minor) {
            (None, _) => Condition::any(),
            (Some(major), None) => Condition::half_open(partial.floor(), Version::new(bump(major, constraint)?, 0, 0)),
            (Some(major), Some(minor)) => {
                Condition::half_open(partial.floor(), Version::new(major, bump(minor, constraint)?, 0))
            }
        };
        Ok(condition)
    }

    fn parse_caret_constraint(&self, version: &str, constraint: &str) -> Result<Condition> {
        let partial = self.parse_partial(version, constraint)?;
        let Some(major) = partial.major else {
            return Ok(Condition::any());
        };

        // Bump the leftmost non-zero component, or the first omitted one
        let upper = match (major, partial.minor, partial.patch) {
            (0, Some(0), Some(patch)) => Version::new(0, 0, bump(patch, constraint)?),
            (0, Some(minor), _) => Version::new(0, bump(minor, constraint)?, 0),
            _ => Version::new(bump(major, constraint)?, 0, 0),
        };

        Ok(Condition::half_open(partial.floor(), upper))
    }

    fn parse_hyphen_constraint(&self, from: &str, to: &str, constraint: &str) -> Result<Condition> {
        let low = self.parse_partial(from, constraint)?;
        let high = self.parse_partial(to, constraint)?;
        let lower = low.floor();

        let condition = match (high.major, high.minor, high.patch) {
            (Some(_), Some(_), Some(_)) => Condition::closed(lower, high.floor()),
            (Some(major), Some(minor), None) => Condition::half_open(lower, Version::new(major, bump(minor, constraint)?, 0)),
            (Some(major), None, _) => Condition::half_open(lower, Version::new(bump(major, constraint)?, 0, 0)),
            (None, _, _) => Condition::compare(Operator::GreaterThanOrEqual, lower),
        };
        Ok(condition)
    }
}
