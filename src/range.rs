//! Numeric range resolution for `{N...M}` ellipsis spans.
//!
//! Boundaries are decimal unless either one fails to parse as decimal, in
//! which case both are read as hexadecimal. A leading `0` on a boundary turns
//! on zero-padding to the width of the end boundary's literal text.

use std::fmt;

/// Separator between the two boundaries of a range.
pub const ELLIPSIS: &str = "...";

/// Errors produced while resolving a single range token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The token did not contain exactly one `...` separator.
    SeparatorCount(usize),
    /// A boundary is neither valid decimal nor valid hexadecimal.
    Parse(String),
    /// The start boundary is greater than the end boundary.
    Order { start: u64, end: u64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparatorCount(n) => {
                write!(f, "expected exactly one '{ELLIPSIS}' in range, found {n}")
            }
            Self::Parse(s) => write!(f, "invalid range boundary {s:?}"),
            Self::Order { start, end } => write!(
                f,
                "incorrect range start {start} cannot be bigger than end {end}"
            ),
        }
    }
}

impl std::error::Error for RangeError {}

/// A parsed `N...M` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeToken {
    pub start: u64,
    pub end: u64,
    pub is_hex: bool,
    /// Width every label is zero-padded to, if padding applies.
    pub pad_width: Option<usize>,
}

impl RangeToken {
    /// Parse a range token, with or without the surrounding braces.
    pub fn parse(token: &str) -> Result<RangeToken, RangeError> {
        let inner = token.strip_prefix('{').unwrap_or(token);
        let inner = inner.strip_suffix('}').unwrap_or(inner);

        let parts: Vec<&str> = inner.split(ELLIPSIS).collect();
        let &[lo, hi] = parts.as_slice() else {
            return Err(RangeError::SeparatorCount(parts.len().saturating_sub(1)));
        };

        let (start, end, is_hex) = match (parse_radix(lo, 10), parse_radix(hi, 10)) {
            (Some(start), Some(end)) => (start, end, false),
            _ => {
                let start = parse_radix(lo, 16).ok_or_else(|| RangeError::Parse(lo.to_string()))?;
                let end = parse_radix(hi, 16).ok_or_else(|| RangeError::Parse(hi.to_string()))?;
                (start, end, true)
            }
        };

        if start > end {
            return Err(RangeError::Order { start, end });
        }

        let padded = (lo.starts_with('0') && lo.len() > 1) || hi.starts_with('0');
        Ok(RangeToken {
            start,
            end,
            is_hex,
            pad_width: padded.then_some(hi.len()),
        })
    }

    /// Number of labels in the range.
    pub fn count(&self) -> u64 {
        // start <= end holds after `parse`; the full u64 span saturates.
        (self.end - self.start).saturating_add(1)
    }

    /// Render the label for one value of the range.
    pub fn label(&self, value: u64) -> String {
        match (self.is_hex, self.pad_width) {
            (false, None) => value.to_string(),
            (true, None) => format!("{value:x}"),
            (false, Some(width)) => format!("{value:0width$}"),
            (true, Some(width)) => format!("{value:0width$x}"),
        }
    }

    /// All labels in ascending order, `start` and `end` inclusive.
    pub fn labels(&self) -> Vec<String> {
        (self.start..=self.end).map(|v| self.label(v)).collect()
    }
}

/// Resolve a range token such as `"1...4"` or `"{00...0f}"` into its labels.
pub fn resolve_range(token: &str) -> Result<Vec<String>, RangeError> {
    Ok(RangeToken::parse(token)?.labels())
}

/// Parse an unsigned boundary in the given radix.
///
/// Rejects the sign prefix `from_str_radix` would otherwise accept.
fn parse_radix(s: &str, radix: u32) -> Option<u64> {
    if s.is_empty() || !s.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(s, radix).ok()
}
