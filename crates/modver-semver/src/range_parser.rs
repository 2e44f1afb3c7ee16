//! Range expression parsing

use crate::predicate::{Clause, Operator, VersionPredicate};
use crate::{SemanticVersion, VersionParsingError};

/// Parser turning range expressions such as `>=1.2.0 <2.0.0` into predicates
pub struct RangeParser;

impl RangeParser {
    /// Create a new range parser
    pub fn new() -> Self {
        RangeParser
    }

    /// Parse a range expression.
    ///
    /// Clauses are separated by spaces and combined with AND. Empty clauses and
    /// `*` are skipped. A clause without a known operator prefix is an exact
    /// match. Fails only when a version literal does not parse.
    ///
    /// Prefixed wildcards like `=1.16.x` are accepted and behave like `1.16.x`.
    pub fn parse(&self, range: &str) -> Result<VersionPredicate, VersionParsingError> {
        let mut clauses = Vec::new();
        let mut prerelease_versions = Vec::new();

        for token in range.split(' ') {
            let token = token.trim();
            if token.is_empty() || token == "*" {
                continue;
            }

            let (operator, literal) = Operator::split_prefix(token);
            let target = SemanticVersion::parse(literal, true)?;

            if target.is_prerelease() {
                log::debug!("Range {:?} names prerelease {}", range, target);
                prerelease_versions.push(target.clone());
            }

            log::trace!("Parsed clause {}{} from {:?}", operator, target, token);
            clauses.push(Clause::new(operator, target));
        }

        let mut predicate = VersionPredicate::new(clauses, prerelease_versions);
        predicate.set_pretty_string(Some(range.to_string()));

        Ok(predicate)
    }
}

impl Default for RangeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::VersionMatcher;

    fn v(s: &str) -> SemanticVersion {
        s.parse().unwrap()
    }

    fn parse(range: &str) -> VersionPredicate {
        RangeParser::new().parse(range).unwrap()
    }

    #[test]
    fn test_empty_and_wildcard_ranges_match_everything() {
        for range in ["", " ", "*", "* *", "  *  "] {
            let predicate = parse(range);
            assert!(predicate.is_match_all(), "{:?}", range);
            for version in ["0.0.0", "1.2.3", "1.0.0-alpha", "400.1.2+build"] {
                assert!(predicate.matches(&v(version)), "{:?} should match {}", range, version);
            }
        }
    }

    #[test]
    fn test_single_clause_agrees_with_comparison() {
        let less = v("1.1.9");
        let equal = v("1.2.0");
        let greater = v("1.2.1");

        let cases = [
            (">=1.2.0", [false, true, true]),
            ("<=1.2.0", [true, true, false]),
            (">1.2.0", [false, false, true]),
            ("<1.2.0", [true, false, false]),
            ("=1.2.0", [false, true, false]),
            ("1.2.0", [false, true, false]),
        ];

        for (range, expected) in cases {
            let predicate = parse(range);
            assert_eq!(predicate.matches(&less), expected[0], "{} vs {}", range, less);
            assert_eq!(predicate.matches(&equal), expected[1], "{} vs {}", range, equal);
            assert_eq!(predicate.matches(&greater), expected[2], "{} vs {}", range, greater);
        }
    }

    #[test]
    fn test_tilde_range() {
        let predicate = parse("~1.2.0");
        assert!(predicate.matches(&v("1.2.5")));
        assert!(predicate.matches(&v("1.2.0")));
        assert!(!predicate.matches(&v("1.3.0")));
        assert!(!predicate.matches(&v("1.1.9")));
    }

    #[test]
    fn test_caret_range() {
        let predicate = parse("^1.2.0");
        assert!(predicate.matches(&v("1.9.9")));
        assert!(!predicate.matches(&v("2.0.0")));
        assert!(!predicate.matches(&v("1.1.9")));
    }

    #[test]
    fn test_multi_clause_range() {
        let predicate = parse(">=1.0.0 <2.0.0");
        assert!(predicate.matches(&v("1.5.0")));
        assert!(!predicate.matches(&v("0.9.0")));
        assert!(!predicate.matches(&v("2.0.0")));
        assert_eq!(predicate.clauses().len(), 2);
    }

    #[test]
    fn test_clause_order_does_not_matter() {
        let forward = parse(">=1.0.0 <2.0.0");
        let backward = parse("<2.0.0 >=1.0.0");

        for version in ["0.0.1", "0.9.9", "1.0.0", "1.0.0-rc.1", "1.5.0", "1.99.99", "2.0.0", "2.0.0-beta", "3.0.0"] {
            let version = v(version);
            assert_eq!(forward.matches(&version), backward.matches(&version), "{}", version);
        }
    }

    #[test]
    fn test_repeated_spaces_between_clauses() {
        let predicate = parse("  >=1.0.0    <2.0.0  ");
        assert_eq!(predicate.clauses().len(), 2);
        assert!(predicate.matches(&v("1.5.0")));
    }

    #[test]
    fn test_only_spaces_separate_clauses() {
        // A tab is not a separator, so the literal keeps it and fails to parse
        assert!(RangeParser::new().parse(">=1.0.0\t<2.0.0").is_err());
    }

    #[test]
    fn test_wildcard_range() {
        let predicate = parse("1.16.x");
        assert!(predicate.matches(&v("1.16.0")));
        assert!(predicate.matches(&v("1.16.7")));
        assert!(!predicate.matches(&v("1.17.0")));
        assert!(!predicate.matches(&v("1.15.9")));

        let star = parse("1.16.*");
        assert!(star.matches(&v("1.16.3")));
        assert!(!star.matches(&v("1.17.0")));
    }

    #[test]
    fn test_known_quirk_prefixed_wildcard_is_accepted() {
        let plain = parse("1.16.x");
        let prefixed = parse("=1.16.x");

        assert_eq!(prefixed.clauses()[0].operator(), Operator::Equal);
        for version in ["1.15.9", "1.16.0", "1.16.7", "1.16.2-pre.1", "1.17.0", "2.16.0"] {
            let version = v(version);
            assert_eq!(plain.matches(&version), prefixed.matches(&version), "{}", version);
        }
        assert!(prefixed.matches(&v("1.16.7")));
        assert!(!prefixed.matches(&v("1.17.0")));

        // Ordering operators take wildcards too
        assert!(parse(">=1.x").matches(&v("1.0.0")));
    }

    #[test]
    fn test_malformed_literal_fails() {
        let err = RangeParser::new().parse(">=not-a-version").unwrap_err();
        assert!(matches!(err, VersionParsingError::InvalidComponent { .. }));

        // Earlier valid clauses do not produce a partial result
        assert!(RangeParser::new().parse(">=1.0.0 <bogus").is_err());
    }

    #[test]
    fn test_error_passes_through_unchanged() {
        let direct = SemanticVersion::parse("1.x.2", true).unwrap_err();
        let through_range = RangeParser::new().parse("^1.x.2").unwrap_err();
        assert_eq!(direct, through_range);
        assert_eq!(direct.to_string(), through_range.to_string());
    }

    #[test]
    fn test_unknown_symbol_is_part_of_literal() {
        // "!" is not an operator, the whole token goes to the version parser
        assert!(RangeParser::new().parse("!1.0.0").is_err());
        // "==" strips one "=" and leaves "=1.0.0" as the literal
        assert!(RangeParser::new().parse("==1.0.0").is_err());
    }

    #[test]
    fn test_prerelease_versions_are_collected() {
        let predicate = parse(">=1.0.0-beta.2 <2.0.0 ~1.4.0-rc.1");
        let collected: Vec<String> = predicate
            .prerelease_versions()
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(collected, vec!["1.0.0-beta.2", "1.4.0-rc.1"]);
    }

    #[test]
    fn test_prerelease_matching() {
        let predicate = parse(">=1.0.0-beta.2");
        assert!(predicate.matches(&v("1.0.0-beta.3")));
        assert!(predicate.matches(&v("1.0.0")));
        assert!(!predicate.matches(&v("1.0.0-beta.1")));
        assert!(!predicate.matches(&v("1.0.0-alpha")));
    }

    #[test]
    fn test_predicate_is_reusable_across_threads() {
        let predicate = std::sync::Arc::new(parse("^1.2.0"));

        let handles: Vec<_> = ["1.2.0", "1.5.0", "2.0.0", "1.1.0"]
            .into_iter()
            .map(|version| {
                let predicate = predicate.clone();
                std::thread::spawn(move || predicate.matches(&version.parse::<SemanticVersion>().unwrap()))
            })
            .collect();

        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, true, false, false]);
    }

    #[test]
    fn test_pretty_string_keeps_input() {
        let predicate = parse(">=1.0.0  <2.0.0");
        assert_eq!(predicate.pretty_string(), ">=1.0.0  <2.0.0");
        assert_eq!(predicate.to_string(), ">=1.0.0 <2.0.0");
    }
}
