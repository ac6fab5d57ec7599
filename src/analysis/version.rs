//! Version string comparison.
//!
//! Versions are compared as sequences of their maximal digit runs, so
//! `"11.4"`, `"v11.4"` and `"11.4.0"` all order sensibly against each
//! other. Malformed strings degrade to `[0]` instead of failing; the
//! engine has no error path for bad version data.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Relational operators a constraint may carry. The set is closed;
/// anything else never satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
    /// `~=` is approximated as a lower bound only. The compatible-release
    /// upper bound is intentionally discarded; downstream consumers rely
    /// on the looser matching.
    Compatible,
}

impl Operator {
    /// Parse one of the closed operator spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "==" => Some(Operator::Eq),
            ">=" => Some(Operator::Ge),
            "<=" => Some(Operator::Le),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            "~=" => Some(Operator::Compatible),
            _ => None,
        }
    }

    fn holds(self, ord: Ordering) -> bool {
        match self {
            Operator::Eq => ord == Ordering::Equal,
            Operator::Ge | Operator::Compatible => ord != Ordering::Less,
            Operator::Le => ord != Ordering::Greater,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Lt => ord == Ordering::Less,
        }
    }
}

/// Extract all maximal digit runs as integers, in order.
///
/// A string with no digits yields `[0]` so that every string is
/// comparable.
pub fn version_tuple(version: &str) -> Vec<u64> {
    let nums: Vec<u64> = DIGIT_RUN_RE
        .find_iter(version)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if nums.is_empty() {
        vec![0]
    } else {
        nums
    }
}

/// Compare two version strings, right-padding the shorter tuple with
/// zeros before lexicographic integer comparison.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let mut a = version_tuple(left);
    let mut b = version_tuple(right);
    let size = a.len().max(b.len());
    a.resize(size, 0);
    b.resize(size, 0);
    a.cmp(&b)
}

/// Whether `installed` satisfies `operator required`.
///
/// Unknown operator strings return false.
pub fn satisfies(installed: &str, operator: &str, required: &str) -> bool {
    match Operator::parse(operator) {
        Some(op) => op.holds(compare_versions(installed, required)),
        None => false,
    }
}
