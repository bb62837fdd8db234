//! Error type shared by version and constraint parsing

use thiserror::Error;

/// Errors produced while parsing or constructing versions and constraints
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Version component {component} must not be negative, got {value}")]
    NegativeComponent { component: &'static str, value: i64 },
    #[error("Version component {0} is already at its maximum and cannot be incremented")]
    ComponentOverflow(&'static str),
    #[error("Version component \"{0}\" must not contain leading zeros")]
    LeadingZeros(String),
    #[error("Invalid pre-release identifier \"{0}\"")]
    InvalidPreRelease(String),
    #[error("Invalid build identifier \"{0}\"")]
    InvalidBuild(String),
    #[error("Could not parse version constraint {constraint}: {reason}")]
    InvalidConstraint { constraint: String, reason: String },
    #[error("Unknown constraint operator \"{0}\"")]
    UnknownOperator(String),
}

impl SemverError {
    pub(crate) fn constraint(constraint: &str, reason: impl Into<String>) -> Self {
        SemverError::InvalidConstraint {
            constraint: constraint.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SemverError>;
