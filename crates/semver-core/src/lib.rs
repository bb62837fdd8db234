//! Semantic Versioning 2.0.0 for Rust
//!
//! This crate parses versions into totally-ordered values and matches them
//! against range constraints (exact, comparator, tilde, caret, wildcard,
//! hyphen, and AND/OR combinations).

mod codec;
mod collection;
mod comparator;
pub mod constraint;
mod error;
mod identifier;
mod semver;
mod version;

pub use codec::{decode, encode};
pub use collection::VersionCollection;
pub use comparator::Comparator;
pub use constraint::{Bound, Condition, Constraint, ConstraintParser, Matches, Operator};
pub use error::{Result, SemverError};
pub use identifier::{BuildMetadata, IdentifierInput, PreRelease};
pub use semver::Semver;
pub use version::{ReleaseType, Version, VersionDiff, VersionRecord};
