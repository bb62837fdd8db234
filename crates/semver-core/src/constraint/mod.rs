//! Constraint types for version matching

mod bound;
mod condition;
#[allow(clippy::module_inception)]
mod constraint;
mod matches;
mod operator;
mod parser;

pub use bound::Bound;
pub use condition::Condition;
pub use constraint::Constraint;
pub use matches::Matches;
pub use operator::Operator;
pub use parser::ConstraintParser;
