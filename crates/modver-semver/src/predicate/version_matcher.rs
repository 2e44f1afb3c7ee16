//! Matcher trait shared by clauses and whole ranges

use crate::SemanticVersion;

/// Trait for everything a version can be tested against
pub trait VersionMatcher: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check if the version satisfies this matcher
    fn matches(&self, version: &SemanticVersion) -> bool;

    /// Check if this matcher accepts every version
    fn is_match_all(&self) -> bool {
        false
    }
}
