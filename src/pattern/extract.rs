//! Left-to-right scanner that splits an input into literal text and
//! `{N...M}` spans.

use std::str::CharIndices;

use crate::range::{ELLIPSIS, RangeToken};

use super::{ArgPattern, CLOSE_BRACE, OPEN_BRACE, PatternError, PatternRange};

/// One span found by the scanner, with the literal text that follows it.
#[derive(Debug, PartialEq)]
struct Segment<'a> {
    /// Range text between the braces, e.g. `1...4`.
    range: &'a str,
    /// Literal text up to the next span or the end of input.
    suffix: &'a str,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Scanning,
    /// Inside a candidate span whose `{` is at the given byte offset.
    InBrace(usize),
}

struct Scanner<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    state: State,
    /// Byte ranges `(open, close)` of the braces of every span found.
    spans: Vec<(usize, usize)>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            state: State::Scanning,
            spans: Vec::new(),
        }
    }

    /// Run to the end of input, returning the leading literal and the spans.
    fn scan(mut self) -> (&'a str, Vec<Segment<'a>>) {
        while let Some((i, c)) = self.chars.next() {
            self.state = self.step(i, c);
        }

        let input = self.input;
        let Some(&(first_open, _)) = self.spans.first() else {
            return (input, Vec::new());
        };

        let segments = self
            .spans
            .iter()
            .enumerate()
            .map(|(n, &(open, close))| {
                let end = self.spans.get(n + 1).map_or(input.len(), |&(next, _)| next);
                Segment {
                    range: &input[open + 1..close],
                    suffix: &input[close + 1..end],
                }
            })
            .collect();
        (&input[..first_open], segments)
    }

    fn step(&mut self, i: usize, c: char) -> State {
        match (self.state, c) {
            // An unclosed `{` stays literal; the brace check catches it later.
            (_, OPEN_BRACE) => State::InBrace(i),
            (State::InBrace(open), CLOSE_BRACE) => {
                if is_range_shape(&self.input[open + 1..i]) {
                    self.spans.push((open, i));
                }
                State::Scanning
            }
            (State::InBrace(open), c) if is_range_char(c) => State::InBrace(open),
            _ => State::Scanning,
        }
    }
}

fn is_range_char(c: char) -> bool {
    c == '.' || c.is_ascii_digit() || c.is_ascii_lowercase()
}

/// `[0-9a-z]*...[0-9a-z]*`; the boundaries are validated by the range resolver.
fn is_range_shape(inner: &str) -> bool {
    let bound = |s: &str| s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase());
    match inner.split_once(ELLIPSIS) {
        Some((lo, hi)) => bound(lo) && bound(hi),
        None => false,
    }
}

fn has_brace(s: &str) -> bool {
    s.contains([OPEN_BRACE, CLOSE_BRACE])
}

/// Find every ellipsis span in `arg` and parse its range, without building
/// any labels.
///
/// Use [`PatternRange::count`] to size the expansion before calling
/// [`PatternRange::into_pattern`].
pub fn find_ranges(arg: &str) -> Result<Vec<PatternRange>, PatternError> {
    let (leading, segments) = Scanner::new(arg).scan();
    if segments.is_empty() {
        return Err(PatternError::NoEllipsis);
    }

    let mut ranges = Vec::with_capacity(segments.len());
    let mut prefix = leading;
    for segment in segments {
        let range = RangeToken::parse(segment.range)?;
        ranges.push(PatternRange::new(prefix, segment.suffix, range));
        prefix = "";
    }

    // Leftover braces usually mean a typo such as a missing `}` or nesting.
    if ranges
        .iter()
        .any(|r| has_brace(&r.prefix) || has_brace(&r.suffix))
    {
        return Err(PatternError::UnbalancedBraces);
    }

    Ok(ranges)
}

/// Find every ellipsis span in `arg` and resolve its range.
///
/// Unlike [`parse_ellipses_pattern`](super::parse_ellipses_pattern) this keeps
/// the specific cause of a failure.
pub fn find_patterns(arg: &str) -> Result<ArgPattern, PatternError> {
    let patterns = find_ranges(arg)?
        .into_iter()
        .map(PatternRange::into_pattern)
        .collect();
    Ok(ArgPattern::new(patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> (&str, Vec<(&str, &str)>) {
        let (leading, segments) = Scanner::new(s).scan();
        (
            leading,
            segments.into_iter().map(|s| (s.range, s.suffix)).collect(),
        )
    }

    #[test]
    fn scans_single_span() {
        assert_eq!(scan("data{1...3}"), ("data", vec![("1...3", "")]));
    }

    #[test]
    fn scans_spans_left_to_right() {
        assert_eq!(
            scan("pool{1...2}-disk{a...f}/x"),
            ("pool", vec![("1...2", "-disk"), ("a...f", "/x")])
        );
    }

    #[test]
    fn adjacent_spans_have_empty_literals() {
        assert_eq!(scan("{1...2}{3...4}"), ("", vec![("1...2", ""), ("3...4", "")]));
    }

    #[test]
    fn non_range_braces_are_literal() {
        assert_eq!(scan("{x-y}{1...2}"), ("{x-y}", vec![("1...2", "")]));
        assert_eq!(scan("{1.2}"), ("{1.2}", vec![]));
        assert_eq!(scan("{1...2...3}"), ("{1...2...3}", vec![]));
    }

    #[test]
    fn reopened_brace_restarts_span() {
        assert_eq!(scan("a{b{1...2}c"), ("a{b", vec![("1...2", "c")]));
    }

    #[test]
    fn uppercase_is_not_range_text() {
        assert_eq!(scan("{A...F}"), ("{A...F}", vec![]));
    }

    #[test]
    fn multibyte_literals_are_kept_intact() {
        assert_eq!(scan("né{1...2}ü"), ("né", vec![("1...2", "ü")]));
    }

    #[test]
    fn ranges_keep_literals_and_bounds() {
        let ranges = find_ranges("h{1...4}-{00...0f}").expect("ranges");
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].prefix, "h");
        assert_eq!(ranges[0].suffix, "-");
        assert_eq!(ranges[0].count(), 4);
        assert_eq!(ranges[1].range.pad_width, Some(2));
        assert_eq!(ranges[1].count(), 16);
    }

    #[test]
    fn huge_range_is_sized_without_building_labels() {
        let ranges = find_ranges("h{0...ffffffffffff}").expect("ranges");
        assert_eq!(ranges[0].count(), 0x1_0000_0000_0000);
    }

    #[test]
    fn stray_brace_is_caught_before_labels() {
        assert_eq!(
            find_ranges("h{0...ffffffffffff}}"),
            Err(PatternError::UnbalancedBraces)
        );
    }

    #[test]
    fn range_shape() {
        assert!(is_range_shape("1...4"));
        assert!(is_range_shape("..."));
        assert!(is_range_shape("0a...zz"));
        assert!(!is_range_shape("1..4"));
        assert!(!is_range_shape("1....4"));
        assert!(!is_range_shape("1-4"));
    }
}
