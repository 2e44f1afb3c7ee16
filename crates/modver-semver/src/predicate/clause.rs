//! Clause - a single operator and version pair

use std::fmt;

use super::{Operator, VersionMatcher};
use crate::SemanticVersion;

/// One constraint of a range, e.g. `>=1.2.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    operator: Operator,
    target: SemanticVersion,
}

impl Clause {
    /// Create a new clause
    pub fn new(operator: Operator, target: SemanticVersion) -> Self {
        Clause { operator, target }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version the candidate is compared against
    pub fn target(&self) -> &SemanticVersion {
        &self.target
    }
}

impl VersionMatcher for Clause {
    fn matches(&self, version: &SemanticVersion) -> bool {
        self.operator.test(version, &self.target)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.target)
    }
}
