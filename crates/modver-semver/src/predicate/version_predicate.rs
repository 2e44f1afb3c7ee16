//! VersionPredicate - conjunction of range clauses

use std::fmt;

use super::{Clause, VersionMatcher};
use crate::SemanticVersion;

/// A parsed range: every clause must match.
///
/// A predicate without clauses matches any version.
#[derive(Debug, Clone, Default)]
pub struct VersionPredicate {
    clauses: Vec<Clause>,
    prerelease_versions: Vec<SemanticVersion>,
    pretty_string: Option<String>,
}

impl VersionPredicate {
    /// Create a new predicate from parsed clauses
    pub fn new(clauses: Vec<Clause>, prerelease_versions: Vec<SemanticVersion>) -> Self {
        VersionPredicate {
            clauses,
            prerelease_versions,
            pretty_string: None,
        }
    }

    /// Create a predicate that matches any version
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Get the clauses, in the order they appeared in the range
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Prerelease versions named by the clauses.
    ///
    /// Collected while parsing; matching does not consult them.
    pub fn prerelease_versions(&self) -> &[SemanticVersion] {
        &self.prerelease_versions
    }

    /// Get the range text this predicate was parsed from, or the normalized form
    pub fn pretty_string(&self) -> String {
        self.pretty_string
            .clone()
            .unwrap_or_else(|| self.to_string())
    }

    /// Set the pretty string representation
    pub fn set_pretty_string(&mut self, pretty: Option<String>) {
        self.pretty_string = pretty;
    }
}

impl VersionMatcher for VersionPredicate {
    fn matches(&self, version: &SemanticVersion) -> bool {
        self.clauses.iter().all(|clause| clause.matches(version))
    }

    fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl fmt::Display for VersionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "*");
        }

        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join(" "))
    }
}
