//! Command-line driver: expand arguments and print one line per combination.

use std::io::Write;

use anyhow::{Context, Result, bail};
use itertools::Itertools;

use crate::pattern::{
    ArgPattern, Pattern, PatternRange, expand_args, has_ellipses, parse_ellipses_ranges,
};
use crate::wildcard;

/// Default ceiling on the number of combinations a single run may produce.
pub const DEFAULT_LIMIT: u64 = 1_000_000;

/// Options controlling a single run.
#[derive(Debug, Clone)]
pub struct Options {
    pub patterns: Vec<String>,
    /// Only report whether every pattern uses ellipsis syntax.
    pub check: bool,
    /// Joins the strings taken from each argument on one output line.
    pub separator: String,
    /// Keep only lines matching this wildcard pattern.
    pub filter: Option<String>,
    pub limit: u64,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            check: false,
            separator: " ".to_string(),
            filter: None,
            limit: DEFAULT_LIMIT,
            verbose: false,
        }
    }
}

/// Run with `options`, writing results to `out`.
///
/// Returns `Ok(false)` when `--check` finds an argument without ellipsis
/// syntax.
pub fn run(options: &Options, out: &mut impl Write) -> Result<bool> {
    if options.check {
        let ok = has_ellipses(&options.patterns);
        writeln!(out, "{ok}")?;
        return Ok(ok);
    }

    let args = options
        .patterns
        .iter()
        .map(|p| Arg::parse(p))
        .collect::<Result<Vec<_>>>()?;

    // Sized from the parsed ranges, before any label is built.
    let total = args
        .iter()
        .try_fold(1u64, |acc, arg| acc.checked_mul(arg.combinations()?))
        .context("number of combinations overflows")?;
    if options.verbose {
        for (raw, arg) in options.patterns.iter().zip(&args) {
            eprintln!("{raw}: {}", arg.describe());
        }
        eprintln!("{total} combination(s)");
    }
    if total > options.limit {
        bail!(
            "expansion would produce {total} combinations, more than the limit of {}",
            options.limit
        );
    }

    let args = args.into_iter().map(Arg::into_arg_pattern).collect_vec();
    for tuple in expand_args(&args) {
        let line = tuple.iter().join(&options.separator);
        if let Some(filter) = &options.filter
            && !wildcard::matches(filter, &line)
        {
            continue;
        }
        writeln!(out, "{line}")?;
    }
    Ok(true)
}

/// One command-line argument before expansion.
#[derive(Debug)]
enum Arg {
    /// Text without ellipsis syntax, passed through as-is.
    Literal(String),
    Ranges(Vec<PatternRange>),
}

impl Arg {
    fn parse(raw: &str) -> Result<Arg> {
        if !has_ellipses(&[raw]) {
            return Ok(Arg::Literal(raw.to_string()));
        }
        Ok(Arg::Ranges(parse_ellipses_ranges(raw)?))
    }

    fn combinations(&self) -> Option<u64> {
        match self {
            Arg::Literal(_) => Some(1),
            Arg::Ranges(ranges) => ranges
                .iter()
                .try_fold(1u64, |acc, r| acc.checked_mul(r.count())),
        }
    }

    fn describe(&self) -> String {
        match self {
            Arg::Literal(text) => format!("literal {text:?}"),
            Arg::Ranges(ranges) => ranges
                .iter()
                .map(|r| {
                    format!(
                        "[{:?} {}..{} ({}) {:?}]",
                        r.prefix,
                        r.range.label(r.range.start),
                        r.range.label(r.range.end),
                        r.count(),
                        r.suffix
                    )
                })
                .join(" "),
        }
    }

    fn into_arg_pattern(self) -> ArgPattern {
        match self {
            Arg::Literal(text) => ArgPattern::new(vec![Pattern::new("", "", vec![text])]),
            Arg::Ranges(ranges) => {
                ArgPattern::new(ranges.into_iter().map(PatternRange::into_pattern).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ok(options: Options) -> (bool, String) {
        let mut out = Vec::new();
        let ok = run(&options, &mut out).expect("run should succeed");
        (ok, String::from_utf8(out).expect("utf-8 output"))
    }

    fn opts(patterns: &[&str]) -> Options {
        Options {
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            ..Options::default()
        }
    }

    #[test]
    fn expands_single_argument() {
        let (ok, out) = run_ok(opts(&["host{1...3}"]));
        assert!(ok);
        assert_eq!(out, "host1\nhost2\nhost3\n");
    }

    #[test]
    fn combines_arguments_with_separator() {
        let (_, out) = run_ok(Options {
            separator: ",".into(),
            ..opts(&["a{1...2}", "b{1...2}"])
        });
        assert_eq!(out, "a1,b1\na2,b1\na1,b2\na2,b2\n");
    }

    #[test]
    fn literal_arguments_pass_through() {
        let (_, out) = run_ok(opts(&["node{1...2}", "/data"]));
        assert_eq!(out, "node1 /data\nnode2 /data\n");
    }

    #[test]
    fn filter_keeps_matching_lines() {
        let (_, out) = run_ok(Options {
            filter: Some("*2*".into()),
            ..opts(&["pool{1...2}-disk{1...2}"])
        });
        assert_eq!(out, "pool2-disk1\npool1-disk2\npool2-disk2\n");
    }

    #[test]
    fn check_reports_syntax() {
        let (ok, out) = run_ok(Options {
            check: true,
            ..opts(&["a{1...4}", "plain"])
        });
        assert!(!ok);
        assert_eq!(out, "false\n");

        let (ok, out) = run_ok(Options {
            check: true,
            ..opts(&["a{1...4}"])
        });
        assert!(ok);
        assert_eq!(out, "true\n");
    }

    #[test]
    fn limit_rejects_large_expansions() {
        let options = Options {
            limit: 10,
            ..opts(&["a{1...4}", "b{1...4}"])
        };
        let err = run(&options, &mut Vec::<u8>::new()).expect_err("limit should trip");
        assert!(err.to_string().contains("limit of 10"));
    }

    #[test]
    fn malformed_argument_reports_format_error() {
        let err = run(&opts(&["server{4...1}"]), &mut Vec::<u8>::new()).expect_err("should fail");
        assert!(err.to_string().contains("invalid ellipsis format in (server{4...1})"));
    }

    #[test]
    fn limit_trips_before_labels_are_built() {
        let options = Options {
            limit: 10,
            ..opts(&["h{0...ffffffffffff}", "d{1...4}"])
        };
        let err = run(&options, &mut Vec::<u8>::new()).expect_err("limit should trip");
        assert!(err.to_string().contains("1125899906842624 combinations"));
    }

    #[test]
    fn overflowing_combinations_are_rejected() {
        let options = opts(&["a{0...ffffffffffff}", "b{0...ffffffffffff}"]);
        let err = run(&options, &mut Vec::<u8>::new()).expect_err("overflow");
        assert_eq!(err.to_string(), "number of combinations overflows");
    }

    #[test]
    fn describe_lists_ranges() {
        let arg = Arg::parse("n{01...16}.x").unwrap();
        assert_eq!(arg.describe(), "[\"n\" 01..16 (16) \".x\"]");
        assert_eq!(arg.combinations(), Some(16));
    }

    #[test]
    fn describe_marks_literals() {
        let arg = Arg::parse("/data").unwrap();
        assert_eq!(arg.describe(), "literal \"/data\"");
        assert_eq!(arg.combinations(), Some(1));
        assert_eq!(arg.into_arg_pattern().expand_joined(), vec!["/data"]);
    }
}
