//! Ellipsis range patterns for compact lists of hosts, paths and devices.
//!
//! A pattern such as `http://node{1...4}.local/disk{01...16}` names every
//! combination of its `{N...M}` ranges. Ranges are inclusive, decimal or
//! hexadecimal, and keep zero-padding when a boundary has a leading `0`.
//!
//! # Example
//!
//! ```rust
//! use ellipsis::{expand_args, has_ellipses, parse_ellipses_pattern};
//!
//! assert!(has_ellipses(&["node{1...2}/disk{1...2}"]));
//!
//! let arg = parse_ellipses_pattern("node{1...2}/disk{1...2}").unwrap();
//! assert_eq!(
//!     arg.expand_joined(),
//!     vec!["node1/disk1", "node2/disk1", "node1/disk2", "node2/disk2"]
//! );
//!
//! let pairs = expand_args(&[
//!     parse_ellipses_pattern("a{1...2}").unwrap(),
//!     parse_ellipses_pattern("b{1...2}").unwrap(),
//! ]);
//! assert_eq!(pairs[1], vec!["a2", "b1"]);
//! ```

pub mod app;
pub mod pattern;
pub mod range;
pub mod wildcard;

pub use pattern::{
    ArgPattern, FormatError, Pattern, PatternError, PatternRange, expand_args, find_patterns,
    find_ranges, has_ellipses, parse_ellipses_pattern, parse_ellipses_ranges,
};
pub use range::{RangeError, RangeToken, resolve_range};
