//! Semver facade providing high-level version operations

use crate::predicate::{VersionMatcher, VersionPredicate};
use crate::{RangeParser, SemanticVersion, VersionParsingError};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let predicate = match RangeParser::new().parse(range) {
            Ok(p) => p,
            Err(_) => return false,
        };

        Self::satisfies_parsed(version, &predicate)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let predicate = match RangeParser::new().parse(range) {
            Ok(p) => p,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| Self::satisfies_parsed(v, &predicate))
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse a range and return a reusable predicate.
    pub fn parse_range(range: &str) -> Result<VersionPredicate, VersionParsingError> {
        RangeParser::new().parse(range)
    }

    /// Check a version against a pre-parsed range.
    pub fn satisfies_parsed(version: &str, predicate: &VersionPredicate) -> bool {
        match version.parse::<SemanticVersion>() {
            Ok(v) => predicate.matches(&v),
            Err(_) => false,
        }
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(SemanticVersion, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((v.parse::<SemanticVersion>().ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare_to(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
