//! JetPack series inference.
//!
//! The compatibility matrix is keyed by platform generation ("series"),
//! not by exact JetPack version. The series is resolved from the facts
//! via a priority-ordered fallback chain; explicit configuration always
//! wins over inference from looser signals.

use crate::model::Facts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A JetPack platform generation.
///
/// Serialized as its literal form (`"5.x"`, `"6.x"`, `"unknown"`); any
/// unrecognized literal deserializes to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Series {
    Jp5,
    Jp6,
    #[default]
    Unknown,
}

impl From<String> for Series {
    fn from(value: String) -> Self {
        match value.as_str() {
            "5.x" => Series::Jp5,
            "6.x" => Series::Jp6,
            _ => Series::Unknown,
        }
    }
}

impl From<Series> for String {
    fn from(series: Series) -> Self {
        series.as_str().to_string()
    }
}

impl Series {
    pub fn as_str(&self) -> &'static str {
        match self {
            Series::Jp5 => "5.x",
            Series::Jp6 => "6.x",
            Series::Unknown => "unknown",
        }
    }

    /// The leading major digit; an unknown series compares as 0, which
    /// makes it sort below every real generation.
    pub fn leading_digit(&self) -> u64 {
        match self {
            Series::Jp5 => 5,
            Series::Jp6 => 6,
            Series::Unknown => 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Series::Unknown)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the device's series from the facts.
///
/// Fallback chain, in priority order:
/// 1. the explicit `jetpack.series` field, when it is a known literal;
/// 2. the first digit of `jetpack.installed_version`;
/// 3. the `l4t.release` prefix (R35 shipped with JetPack 5, R36 with 6);
/// 4. otherwise unknown.
pub fn infer_series(facts: &Facts) -> Series {
    match facts.jetpack_series_field().trim() {
        "5.x" => return Series::Jp5,
        "6.x" => return Series::Jp6,
        _ => {}
    }

    let jp_version = facts.jetpack_version();
    if jp_version.starts_with('5') {
        return Series::Jp5;
    }
    if jp_version.starts_with('6') {
        return Series::Jp6;
    }

    let l4t = facts.l4t.release.as_deref().unwrap_or("");
    if l4t.starts_with("R35") {
        return Series::Jp5;
    }
    if l4t.starts_with("R36") {
        return Series::Jp6;
    }

    Series::Unknown
}

/// Map a bare major version (`"5"`, `"5.1.2"`, or `"5.x"`) to a series.
pub fn major_to_series(version: &str) -> Series {
    let major = version.split('.').next().unwrap_or("");
    match major {
        "5" => Series::Jp5,
        "6" => Series::Jp6,
        _ => Series::Unknown,
    }
}
