//! Version constraint expressions.
//!
//! Grammar, loosely following the ranges Go and npm tooling accept:
//!
//! ```text
//! constraint  := range ( "||" range )*
//! range       := term ( ( "," | whitespace ) term )*
//!              | partial " - " partial              (inclusive hyphen range)
//! term        := [ op ] partial
//! op          := "=" | "==" | "!=" | ">" | ">=" | "<" | "<=" | "~" | "^"
//! partial     := [ "v" ] part [ "." part [ "." part ] ] [ "-" pre ] [ "+" build ]
//! part        := number | "x" | "X" | "*"
//! ```
//!
//! A bare partial is an exact match (`v1.2.0` matches only `1.2.0`; `1.2`
//! matches the `1.2.x` line). Matching of each comparator is delegated to
//! `semver::VersionReq`, which also supplies the pre-release rule: a
//! pre-release only satisfies a range that names a pre-release on the same
//! `major.minor.patch`. A range made only of wildcards accepts every version.

use std::fmt;

use semver::{BuildMetadata, Comparator, Op, Prerelease, Version, VersionReq};
use thiserror::Error;

/// Why a constraint expression was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("empty constraint")]
    Empty,

    #[error("empty range between `||`")]
    EmptyRange,

    #[error("operator `{0}` is not followed by a version")]
    DanglingOperator(String),

    #[error("malformed hyphen range `{0}`")]
    HyphenRange(String),

    #[error("wildcard cannot be combined with `{0}`")]
    WildcardWithOperator(String),

    #[error("invalid version `{pattern}`: {reason}")]
    InvalidVersion { pattern: String, reason: String },
}

/// A parsed constraint: a disjunction of ranges.
#[derive(Debug, Clone)]
pub struct Constraint {
    original: String,
    ranges: Vec<Range>,
}

impl Constraint {
    pub fn parse(expr: &str) -> Result<Self, ConstraintError> {
        if expr.trim().is_empty() {
            return Err(ConstraintError::Empty);
        }
        let ranges = expr
            .split("||")
            .map(parse_range)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            original: expr.to_string(),
            ranges,
        })
    }

    /// Whether `version` satisfies any of the alternative ranges.
    pub fn matches(&self, version: &Version) -> bool {
        self.ranges.iter().any(|range| range.matches(version))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// A conjunction of comparators.
#[derive(Debug, Clone)]
struct Range {
    /// Only wildcards were given: every version matches.
    any: bool,
    req: VersionReq,
    /// Comparators introduced by `!=`.
    excluded: Vec<Comparator>,
}

impl Range {
    fn matches(&self, version: &Version) -> bool {
        let included = if self.any {
            true
        } else {
            self.req.matches(version)
        };
        included && !self.excluded.iter().any(|c| c.matches(version))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Exact,
    NotEqual,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Tilde,
    Caret,
}

/// Longest prefixes first so `>=` is not read as `>`.
const OPERATORS: &[(&str, Operator)] = &[
    (">=", Operator::GreaterEq),
    ("<=", Operator::LessEq),
    ("==", Operator::Exact),
    ("!=", Operator::NotEqual),
    (">", Operator::Greater),
    ("<", Operator::Less),
    ("=", Operator::Exact),
    ("~", Operator::Tilde),
    ("^", Operator::Caret),
];

fn split_operator(token: &str) -> (Option<Operator>, &str) {
    for (prefix, op) in OPERATORS {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (Some(*op), rest);
        }
    }
    (None, token)
}

/// One `[op] partial` term before lowering to a comparator.
struct Term<'a> {
    op: Option<Operator>,
    op_text: &'a str,
    pattern: &'a str,
}

fn parse_range(text: &str) -> Result<Range, ConstraintError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(ConstraintError::EmptyRange);
    }

    let mut terms: Vec<Term<'_>> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        if token == "-" {
            let malformed = || ConstraintError::HyphenRange(text.trim().to_string());
            let lower = terms
                .pop()
                .filter(|t| t.op.is_none())
                .ok_or_else(malformed)?;
            let upper = tokens
                .get(i + 1)
                .copied()
                .filter(|t| split_operator(t).0.is_none())
                .ok_or_else(malformed)?;
            terms.push(Term {
                op: Some(Operator::GreaterEq),
                op_text: ">=",
                pattern: lower.pattern,
            });
            terms.push(Term {
                op: Some(Operator::LessEq),
                op_text: "<=",
                pattern: upper,
            });
            i += 2;
            continue;
        }

        let (op, rest) = split_operator(token);
        let op_text = &token[..token.len() - rest.len()];
        if rest.is_empty() {
            // Operator separated from its version by whitespace: `>= 1.2`.
            let pattern = tokens
                .get(i + 1)
                .copied()
                .filter(|t| *t != "-" && split_operator(t).0.is_none())
                .ok_or_else(|| ConstraintError::DanglingOperator(token.to_string()))?;
            terms.push(Term {
                op,
                op_text,
                pattern,
            });
            i += 2;
        } else {
            terms.push(Term {
                op,
                op_text,
                pattern: rest,
            });
            i += 1;
        }
    }

    let mut range = Range {
        any: false,
        req: VersionReq::STAR,
        excluded: Vec::new(),
    };
    let mut saw_wildcard = false;
    for term in terms {
        let partial = Partial::parse(term.pattern)?;
        let Some(major) = partial.major else {
            match term.op {
                None | Some(Operator::Exact | Operator::GreaterEq | Operator::LessEq) => {
                    saw_wildcard = true;
                    continue;
                }
                Some(_) => {
                    return Err(ConstraintError::WildcardWithOperator(
                        term.op_text.to_string(),
                    ))
                }
            }
        };

        let exact_op = if partial.wildcard {
            Op::Wildcard
        } else {
            Op::Exact
        };
        let op = match term.op {
            None | Some(Operator::Exact) => exact_op,
            Some(Operator::NotEqual) => {
                range.excluded.push(partial.comparator(exact_op, major));
                continue;
            }
            Some(Operator::Greater) => Op::Greater,
            Some(Operator::GreaterEq) => Op::GreaterEq,
            Some(Operator::Less) => Op::Less,
            Some(Operator::LessEq) => Op::LessEq,
            Some(Operator::Tilde) => Op::Tilde,
            Some(Operator::Caret) => Op::Caret,
        };
        range.req.comparators.push(partial.comparator(op, major));
    }

    range.any = saw_wildcard && range.req.comparators.is_empty();
    Ok(range)
}

/// A possibly incomplete version pattern such as `1`, `v1.2`, `1.x` or `1.2.3-rc.1`.
#[derive(Debug)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Prerelease,
    wildcard: bool,
}

impl Partial {
    fn parse(pattern: &str) -> Result<Self, ConstraintError> {
        let invalid = |reason: &str| ConstraintError::InvalidVersion {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let body = pattern.strip_prefix(['v', 'V']).unwrap_or(pattern);
        let body = match body.split_once('+') {
            Some((core, build)) => {
                if build.is_empty() {
                    return Err(invalid("empty build metadata"));
                }
                BuildMetadata::new(build).map_err(|e| invalid(&e.to_string()))?;
                core
            }
            None => body,
        };
        let (core, pre) = match body.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (body, None),
        };

        let components: Vec<&str> = core.split('.').collect();
        if components.len() > 3 {
            return Err(invalid("expected at most three components"));
        }

        let mut parts = [None; 3];
        let mut wildcard = false;
        for (slot, component) in parts.iter_mut().zip(&components) {
            match *component {
                "*" | "x" | "X" => wildcard = true,
                digits => {
                    if wildcard {
                        return Err(invalid("number after a wildcard component"));
                    }
                    *slot = Some(parse_number(digits).map_err(invalid)?);
                }
            }
        }

        let pre = match pre {
            Some(pre) => {
                if parts.iter().any(Option::is_none) {
                    return Err(invalid("pre-release requires major.minor.patch"));
                }
                if pre.is_empty() {
                    return Err(invalid("empty pre-release"));
                }
                Prerelease::new(pre).map_err(|e| invalid(&e.to_string()))?
            }
            None => Prerelease::EMPTY,
        };

        let [major, minor, patch] = parts;
        Ok(Self {
            major,
            minor,
            patch,
            pre,
            wildcard,
        })
    }

    fn comparator(&self, op: Op, major: u64) -> Comparator {
        Comparator {
            op,
            major,
            minor: self.minor,
            patch: self.patch,
            pre: self.pre.clone(),
        }
    }
}

fn parse_number(digits: &str) -> Result<u64, &'static str> {
    if digits.is_empty() {
        return Err("empty version component");
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("unexpected character in version component");
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err("leading zero in version component");
    }
    digits.parse().map_err(|_| "version component out of range")
}
