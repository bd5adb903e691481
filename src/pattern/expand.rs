//! Cartesian-product expansion of patterns and arguments.
//!
//! The emission order is fixed: the first list varies fastest and the last
//! list slowest, and every tuple lists its elements left to right. Callers
//! building address lists rely on this order, so it is pinned by tests.

use itertools::Itertools;

use super::ArgPattern;

/// Combine label lists into every ordered tuple, one label from each list.
fn combine(labels: &[Vec<String>]) -> Vec<Vec<String>> {
    match labels.split_last() {
        None => Vec::new(),
        Some((last, [])) => last.iter().map(|label| vec![label.clone()]).collect(),
        Some((last, rest)) => {
            let inner = combine(rest);
            let mut out = Vec::with_capacity(inner.len() * last.len());
            for label in last {
                for tuple in &inner {
                    let mut tuple = tuple.clone();
                    tuple.push(label.clone());
                    out.push(tuple);
                }
            }
            out
        }
    }
}

impl ArgPattern {
    /// Every combination of this argument's patterns.
    ///
    /// Each tuple holds one decorated label per pattern, left to right, so
    /// concatenating a tuple gives one concrete string.
    pub fn expand(&self) -> Vec<Vec<String>> {
        let labels: Vec<Vec<String>> = self.iter().map(|p| p.expand()).collect();
        combine(&labels)
    }

    /// Every combination concatenated into a single string.
    pub fn expand_joined(&self) -> Vec<String> {
        self.expand().into_iter().map(|tuple| tuple.concat()).collect()
    }

    /// Number of combinations [`expand`](Self::expand) would produce, or
    /// `None` if it does not fit in a `u64`.
    pub fn combinations(&self) -> Option<u64> {
        if self.is_empty() {
            return Some(0);
        }
        self.iter()
            .try_fold(1u64, |acc, p| acc.checked_mul(p.seq.len() as u64))
    }
}

/// Combine several parsed arguments.
///
/// Each argument is first expanded into its concrete strings; the result is
/// every tuple taking one string from each argument, in argument order.
pub fn expand_args(args: &[ArgPattern]) -> Vec<Vec<String>> {
    let labels = args.iter().map(ArgPattern::expand_joined).collect_vec();
    combine(&labels)
}
