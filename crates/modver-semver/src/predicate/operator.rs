//! Operator types for range clauses

use std::cmp::Ordering;
use std::fmt;

use crate::SemanticVersion;

/// Comparison operators for range clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Equal (=), also used when a clause has no prefix
    Equal,
    /// Same major and minor, at least the target (~)
    Tilde,
    /// Same major, at least the target (^)
    Caret,
}

/// Prefix table, scanned in order.
///
/// Two character prefixes must stay ahead of their one character subsets.
pub const PREFIXES: &[(&str, Operator)] = &[
    (">=", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
    ("=", Operator::Equal),
    ("~", Operator::Tilde),
    ("^", Operator::Caret),
];

impl Operator {
    /// Split a clause into its operator and version literal.
    ///
    /// A clause without a known prefix is an exact match on the whole text.
    pub fn split_prefix(clause: &str) -> (Operator, &str) {
        for (prefix, operator) in PREFIXES {
            if let Some(rest) = clause.strip_prefix(prefix) {
                return (*operator, rest);
            }
        }

        (Operator::Equal, clause)
    }

    /// Apply the comparison rule with `source` as the version under test
    pub fn test(&self, source: &SemanticVersion, target: &SemanticVersion) -> bool {
        let ord = source.compare_to(target);

        match self {
            Operator::GreaterThanOrEqual => ord != Ordering::Less,
            Operator::LessThanOrEqual => ord != Ordering::Greater,
            Operator::GreaterThan => ord == Ordering::Greater,
            Operator::LessThan => ord == Ordering::Less,
            Operator::Equal => ord == Ordering::Equal,
            Operator::Tilde => {
                ord != Ordering::Less
                    && source.version_component(0) == target.version_component(0)
                    && source.version_component(1) == target.version_component(1)
            }
            Operator::Caret => {
                ord != Ordering::Less && source.version_component(0) == target.version_component(0)
            }
        }
    }

    /// Get the prefix of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::Equal => "=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_split_prefix_prefers_longest() {
        assert_eq!(Operator::split_prefix(">=1.0.0"), (Operator::GreaterThanOrEqual, "1.0.0"));
        assert_eq!(Operator::split_prefix("<=1.0.0"), (Operator::LessThanOrEqual, "1.0.0"));
        assert_eq!(Operator::split_prefix(">1.0.0"), (Operator::GreaterThan, "1.0.0"));
        assert_eq!(Operator::split_prefix("<1.0.0"), (Operator::LessThan, "1.0.0"));
        assert_eq!(Operator::split_prefix("=1.0.0"), (Operator::Equal, "1.0.0"));
        assert_eq!(Operator::split_prefix("~1.0.0"), (Operator::Tilde, "1.0.0"));
        assert_eq!(Operator::split_prefix("^1.0.0"), (Operator::Caret, "1.0.0"));
    }

    #[test]
    fn test_split_prefix_defaults_to_equal() {
        assert_eq!(Operator::split_prefix("1.0.0"), (Operator::Equal, "1.0.0"));
        assert_eq!(Operator::split_prefix("!1.0.0"), (Operator::Equal, "!1.0.0"));
    }

    #[test]
    fn test_split_prefix_strips_only_one_operator() {
        assert_eq!(Operator::split_prefix("==1.0.0"), (Operator::Equal, "=1.0.0"));
        assert_eq!(Operator::split_prefix(">>1.0.0"), (Operator::GreaterThan, ">1.0.0"));
    }

    #[test]
    fn test_table_order() {
        for (i, (prefix, _)) in PREFIXES.iter().enumerate() {
            for (later, _) in &PREFIXES[i + 1..] {
                assert!(!later.starts_with(prefix), "{} shadows {}", prefix, later);
            }
        }
    }

    #[test]
    fn test_tilde() {
        let target = v("1.2.0");
        assert!(Operator::Tilde.test(&v("1.2.0"), &target));
        assert!(Operator::Tilde.test(&v("1.2.5"), &target));
        assert!(!Operator::Tilde.test(&v("1.3.0"), &target));
        assert!(!Operator::Tilde.test(&v("1.1.9"), &target));
    }

    #[test]
    fn test_caret() {
        let target = v("1.2.0");
        assert!(Operator::Caret.test(&v("1.9.9"), &target));
        assert!(Operator::Caret.test(&v("1.2.0"), &target));
        assert!(!Operator::Caret.test(&v("2.0.0"), &target));
        assert!(!Operator::Caret.test(&v("1.1.9"), &target));
    }

    #[test]
    fn test_display() {
        for (prefix, operator) in PREFIXES {
            assert_eq!(operator.to_string(), *prefix);
        }
    }
}
