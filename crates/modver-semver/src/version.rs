//! Semantic version value type with wildcard support

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Dot separated identifiers; the empty string is accepted as well.
    static ref PRERELEASE_RE: Regex = Regex::new(r"^(?:[-0-9A-Za-z]+(?:\.[-0-9A-Za-z]+)*)?$").unwrap();

    static ref NUMERIC_IDENTIFIER_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Error raised when a version literal cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParsingError {
    #[error("Version \"{0}\" does not contain any version numbers")]
    Empty(String),
    #[error("Version \"{0}\" is missing a version number component")]
    MissingComponent(String),
    #[error("Could not parse version number component \"{component}\" of \"{version}\"")]
    InvalidComponent { version: String, component: String },
    #[error("Invalid prerelease string \"{prerelease}\" in version \"{version}\"")]
    InvalidPrerelease { version: String, prerelease: String },
    #[error("Pre-release version \"{0}\" is not allowed to use wildcards")]
    WildcardInPrerelease(String),
    #[error("Version \"{0}\" has a number after a wildcard component")]
    InterjacentWildcard(String),
    #[error("Version \"{0}\" consists of a single wildcard")]
    BareWildcard(String),
}

/// One dot separated component of a version's core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// A plain number
    Number(u32),
    /// `x`, `X` or `*`, matches any number at that position
    Wildcard,
}

impl Component {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Component::Wildcard)
    }

    /// The numeric value, or `None` for a wildcard
    pub fn number(&self) -> Option<u32> {
        match self {
            Component::Number(n) => Some(*n),
            Component::Wildcard => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{}", n),
            Component::Wildcard => write!(f, "x"),
        }
    }
}

/// A parsed semantic version such as `1.2.3-beta.1+build.7` or `1.16.x`.
///
/// Equality is structural. There is no `Ord` implementation: wildcard
/// components compare equal to every number, which makes the ordering
/// produced by [`SemanticVersion::compare_to`] non-transitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    components: Vec<Component>,
    prerelease: Option<String>,
    build: Option<String>,
}

impl SemanticVersion {
    /// Parse a version string.
    ///
    /// With `allow_wildcard`, the components `x`, `X` and `*` are accepted and
    /// stored as [`Component::Wildcard`].
    pub fn parse(text: &str, allow_wildcard: bool) -> Result<Self, VersionParsingError> {
        let (rest, build) = match text.find('+') {
            Some(pos) => (&text[..pos], Some(text[pos + 1..].to_string())),
            None => (text, None),
        };

        let (core, prerelease) = match rest.find('-') {
            Some(pos) => (&rest[..pos], Some(rest[pos + 1..].to_string())),
            None => (rest, None),
        };

        if let Some(ref prerelease) = prerelease {
            if !PRERELEASE_RE.is_match(prerelease) {
                return Err(VersionParsingError::InvalidPrerelease {
                    version: text.to_string(),
                    prerelease: prerelease.clone(),
                });
            }
        }

        if core.is_empty() {
            return Err(VersionParsingError::Empty(text.to_string()));
        }
        if core.starts_with('.') || core.ends_with('.') {
            return Err(VersionParsingError::MissingComponent(text.to_string()));
        }

        let mut components = Vec::with_capacity(3);
        let mut first_wildcard = None;

        for (i, part) in core.split('.').enumerate() {
            if allow_wildcard {
                if part == "x" || part == "X" || part == "*" {
                    if prerelease.is_some() {
                        return Err(VersionParsingError::WildcardInPrerelease(text.to_string()));
                    }
                    components.push(Component::Wildcard);
                    if first_wildcard.is_none() {
                        first_wildcard = Some(i);
                    }
                    continue;
                } else if first_wildcard.is_some() {
                    return Err(VersionParsingError::InterjacentWildcard(text.to_string()));
                }
            }

            if part.trim().is_empty() {
                return Err(VersionParsingError::MissingComponent(text.to_string()));
            }

            let number = part.parse::<u32>().map_err(|_| VersionParsingError::InvalidComponent {
                version: text.to_string(),
                component: part.to_string(),
            })?;
            components.push(Component::Number(number));
        }

        if allow_wildcard && components.len() == 1 && components[0].is_wildcard() {
            return Err(VersionParsingError::BareWildcard(text.to_string()));
        }

        // 1.x.x is stored as 1.x
        if let Some(first) = first_wildcard {
            if first > 0 && components.len() > first + 1 {
                components.truncate(first + 1);
            }
        }

        Ok(SemanticVersion {
            components,
            prerelease,
            build,
        })
    }

    /// All stored components
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of stored components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component at `pos` (0 = major, 1 = minor, 2 = patch, ...).
    ///
    /// Positions past the stored components read as a wildcard when the last
    /// stored component is one, and as zero otherwise.
    pub fn version_component(&self, pos: usize) -> Component {
        if let Some(component) = self.components.get(pos) {
            return *component;
        }

        match self.components.last() {
            Some(Component::Wildcard) => Component::Wildcard,
            _ => Component::Number(0),
        }
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn has_wildcard(&self) -> bool {
        self.components.iter().any(Component::is_wildcard)
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Three-way comparison.
    ///
    /// Wildcard components are skipped, build metadata is ignored and a
    /// prerelease sorts below its release unless the other side has a wildcard.
    pub fn compare_to(&self, other: &SemanticVersion) -> Ordering {
        let count = self.component_count().max(other.component_count());
        for i in 0..count {
            let (Component::Number(a), Component::Number(b)) =
                (self.version_component(i), other.version_component(i))
            else {
                continue;
            };

            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        match (&self.prerelease, &other.prerelease) {
            (Some(a), Some(b)) => compare_prerelease(a, b),
            (Some(_), None) => {
                if other.has_wildcard() {
                    Ordering::Equal
                } else {
                    Ordering::Less
                }
            }
            (None, Some(_)) => {
                if self.has_wildcard() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            (None, None) => Ordering::Equal,
        }
    }
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let mut a_parts = a.split('.').filter(|p| !p.is_empty());
    let mut b_parts = b.split('.').filter(|p| !p.is_empty());

    loop {
        match (a_parts.next(), b_parts.next()) {
            (Some(a), Some(b)) => {
                let a_numeric = NUMERIC_IDENTIFIER_RE.is_match(a);
                let b_numeric = NUMERIC_IDENTIFIER_RE.is_match(b);

                let ord = match (a_numeric, b_numeric) {
                    (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => a.cmp(b),
                };

                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::parse(s, false)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
        }

        if let Some(ref prerelease) = self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }

        Ok(())
    }
}
