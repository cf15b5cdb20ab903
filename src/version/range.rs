//! Version range constraints
//!
//! Supports the range syntax used for `SUPPORTED_VERSIONS`:
//! - `1.2.3`, `=1.2.3` - exact match
//! - `!=1.2.3` - anything but this version
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - comparison operators
//! - `^1.2.3` - compatible with version (>=1.2.3 <2.0.0)
//! - `~1.2.3` - approximately equivalent (>=1.2.3 <1.3.0)
//! - `>=0.1.0 <0.2.0`, `>=0.1.0, <0.2.0` - AND, all clauses must hold
//! - `<0.1.0 || >=1.0.0` - OR, any group must hold
//!
//! Clause versions are always full `MAJOR.MINOR.PATCH` literals.

use std::fmt;

use semver::Version;

use crate::version::error::RangeError;
use crate::version::semver::parse_version_triple;

/// A parsed range expression. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConstraint {
    expression: String,
    /// OR of groups, each group an AND of clauses
    groups: Vec<Vec<Comparator>>,
}

/// A single comparator clause
#[derive(Debug, Clone, PartialEq, Eq)]
enum Comparator {
    Exact(Version),
    NotEqual(Version),
    Gte(Version),
    Gt(Version),
    Lte(Version),
    Lt(Version),
    /// ^1.2.3 means >=1.2.3 <2.0.0 (or special cases for 0.x)
    Caret(Version),
    /// ~1.2.3 means >=1.2.3 <1.3.0
    Tilde(Version),
}

impl RangeConstraint {
    /// Parse a range expression such as `">=0.1.0 <0.2.0"`
    pub fn parse(expression: &str) -> Result<Self, RangeError> {
        let empty = || RangeError::Empty {
            expression: expression.to_string(),
        };

        if expression.trim().is_empty() {
            return Err(empty());
        }

        let mut groups = Vec::new();
        for group in expression.split("||") {
            let clauses = group
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|clause| !clause.is_empty())
                .map(|clause| {
                    Comparator::parse(clause).ok_or_else(|| RangeError::InvalidClause {
                        clause: clause.to_string(),
                        expression: expression.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if clauses.is_empty() {
                return Err(empty());
            }
            groups.push(clauses);
        }

        Ok(Self {
            expression: expression.to_string(),
            groups,
        })
    }

    /// Check whether a version satisfies the constraint.
    ///
    /// Only major, minor and patch are compared; callers strip pre-release labels first.
    pub fn check(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|clause| clause.satisfies(version)))
    }

    /// The expression this constraint was parsed from
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl fmt::Display for RangeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

impl Comparator {
    fn parse(clause: &str) -> Option<Self> {
        // Two-character operators come first so ">=" is not read as ">"
        const OPERATORS: [&str; 8] = [">=", "<=", "!=", ">", "<", "=", "^", "~"];

        let op = OPERATORS
            .iter()
            .copied()
            .find(|op| clause.starts_with(op))
            .unwrap_or("");
        let version = parse_version_triple(&clause[op.len()..]).ok()?;

        Some(match op {
            ">=" => Comparator::Gte(version),
            "<=" => Comparator::Lte(version),
            "!=" => Comparator::NotEqual(version),
            ">" => Comparator::Gt(version),
            "<" => Comparator::Lt(version),
            "^" => Comparator::Caret(version),
            "~" => Comparator::Tilde(version),
            _ => Comparator::Exact(version),
        })
    }

    fn satisfies(&self, version: &Version) -> bool {
        match self {
            Comparator::Exact(v) => version == v,
            Comparator::NotEqual(v) => version != v,
            Comparator::Gte(v) => version >= v,
            Comparator::Gt(v) => version > v,
            Comparator::Lte(v) => version <= v,
            Comparator::Lt(v) => version < v,
            Comparator::Caret(v) => {
                if version < v {
                    return false;
                }
                // ^1.2.3 -> >=1.2.3 <2.0.0
                // ^0.2.3 -> >=0.2.3 <0.3.0
                // ^0.0.3 -> >=0.0.3 <0.0.4
                if v.major == 0 {
                    if v.minor == 0 {
                        version.major == 0 && version.minor == 0 && version.patch == v.patch
                    } else {
                        version.major == 0 && version.minor == v.minor
                    }
                } else {
                    version.major == v.major
                }
            }
            Comparator::Tilde(v) => {
                version >= v && version.major == v.major && version.minor == v.minor
            }
        }
    }
}
