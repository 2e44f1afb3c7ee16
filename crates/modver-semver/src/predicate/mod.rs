//! Predicate types for version matching

mod clause;
mod operator;
mod version_matcher;
mod version_predicate;

pub use clause::Clause;
pub use operator::{Operator, PREFIXES};
pub use version_matcher::VersionMatcher;
pub use version_predicate::VersionPredicate;
