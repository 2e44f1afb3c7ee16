//! Semantic version ranges for mod and package loaders
//!
//! This crate parses versions such as `1.16.x` or `2.0.0-beta.3` and range
//! expressions such as `>=1.2.0 <2.0.0` into reusable predicates.

pub mod predicate;
mod range_parser;
mod semver;
mod version;

pub use predicate::{Clause, Operator, VersionMatcher, VersionPredicate, PREFIXES};
pub use range_parser::RangeParser;
pub use semver::Semver;
pub use version::{Component, SemanticVersion, VersionParsingError};
