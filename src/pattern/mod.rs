//! Ellipsis patterns: extraction and expansion.
//!
//! An input such as `pool{1...2}-disk{1...4}` is split into one [`Pattern`]
//! per `{N...M}` span, in the order the spans appear. The first pattern
//! carries the literal text before the first span as its prefix; every
//! pattern carries the literal text up to the next span as its suffix.
//!
//! # Grammar
//!
//! ```text
//! expr      := (literal)? ( ellipsis (literal)? )*
//! ellipsis  := "{" range "}"
//! range     := integer "..." integer
//! integer   := decimal-digits | hex-digits
//! ```
//!
//! # Example
//!
//! ```rust
//! use ellipsis::parse_ellipses_pattern;
//!
//! let arg = parse_ellipses_pattern("data{1...3}").unwrap();
//! assert_eq!(arg[0].expand(), vec!["data1", "data2", "data3"]);
//! ```

mod expand;
mod extract;


use std::fmt;
use std::ops::Deref;

use crate::range::{ELLIPSIS, RangeError, RangeToken};

pub use expand::expand_args;
pub use extract::{find_patterns, find_ranges};

pub(crate) const OPEN_BRACE: char = '{';
pub(crate) const CLOSE_BRACE: char = '}';

/// One resolved ellipsis span with its surrounding literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub prefix: String,
    pub suffix: String,
    pub seq: Vec<String>,
}

impl Pattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, seq: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            seq,
        }
    }

    /// Decorate every label with this pattern's prefix and suffix.
    ///
    /// Does not combine with any other pattern; see [`ArgPattern::expand`].
    pub fn expand(&self) -> Vec<String> {
        self.seq
            .iter()
            .map(|label| format!("{}{label}{}", self.prefix, self.suffix))
            .collect()
    }
}

/// A span whose range is parsed but whose labels are not built yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRange {
    pub prefix: String,
    pub suffix: String,
    pub range: RangeToken,
}

impl PatternRange {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, range: RangeToken) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            range,
        }
    }

    /// Number of labels the range will produce.
    pub fn count(&self) -> u64 {
        self.range.count()
    }

    /// Build the labels.
    pub fn into_pattern(self) -> Pattern {
        let seq = self.range.labels();
        Pattern::new(self.prefix, self.suffix, seq)
    }
}

/// All patterns found in one input argument, in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgPattern(Vec<Pattern>);

impl ArgPattern {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self(patterns)
    }

    pub fn into_inner(self) -> Vec<Pattern> {
        self.0
    }
}

impl Deref for ArgPattern {
    type Target = [Pattern];

    fn deref(&self) -> &[Pattern] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ArgPattern {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Errors from the low-level extractor, [`find_patterns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// No `{N...M}` span anywhere in the input.
    NoEllipsis,
    /// A `{` or `}` was left in the literal text after extraction.
    UnbalancedBraces,
    /// A span was found but its range did not resolve.
    Range(RangeError),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEllipsis => write!(f, "no ellipsis pattern found"),
            Self::UnbalancedBraces => write!(f, "unbalanced braces left after ellipsis expansion"),
            Self::Range(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RangeError> for PatternError {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

/// The single error shape returned by [`parse_ellipses_pattern`].
///
/// The message advertises a minimum range of 4 even though only
/// `start <= end` is checked; shorter ranges are still accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub arg: String,
    pub cause: PatternError,
}

impl FormatError {
    fn new(arg: &str, cause: PatternError) -> Self {
        Self {
            arg: arg.to_string(),
            cause,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid ellipsis format in ({}), ellipsis range must be provided in format \
             {{N...M}} where N and M are positive integers, M must be greater than N, \
             with an allowed minimum range of 4",
            self.arg
        )
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Parse every ellipsis span in `arg`.
///
/// Any failure, whatever its cause, is reported as a [`FormatError`] naming
/// `arg`. No partial result is returned.
pub fn parse_ellipses_pattern(arg: &str) -> Result<ArgPattern, FormatError> {
    find_patterns(arg).map_err(|cause| FormatError::new(arg, cause))
}

/// Like [`parse_ellipses_pattern`], but stops before building labels.
pub fn parse_ellipses_ranges(arg: &str) -> Result<Vec<PatternRange>, FormatError> {
    find_ranges(arg).map_err(|cause| FormatError::new(arg, cause))
}

/// True if every argument looks like it uses ellipsis syntax.
///
/// An argument qualifies if it contains `...`, or both a `{` and a `}`.
/// This is only a cheap pre-check; [`parse_ellipses_pattern`] does the
/// real validation.
pub fn has_ellipses<S: AsRef<str>>(args: &[S]) -> bool {
    args.iter().map(AsRef::as_ref).all(|arg| {
        arg.contains(ELLIPSIS) || (arg.contains(OPEN_BRACE) && arg.contains(CLOSE_BRACE))
    })
}
