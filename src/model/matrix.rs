//! Static compatibility matrix.
//!
//! The matrix is read-only reference data describing what each JetPack
//! series supports: numeric min/max ranges for core components, ordered
//! tested-version lists for ML frameworks, the expected TensorRT major
//! per series, and human-readable alternative suggestions keyed by
//! failure scenario.
//!
//! Every query is tolerant of missing keys and returns an empty value
//! rather than failing; absence of matrix data is classified downstream
//! as an issue, never as an error.

use crate::error::{JetcheckError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default matrix compiled into the binary; `--matrix` overrides it.
const BUILTIN_MATRIX: &str = include_str!("../../data/compatibility_matrix.json");

static EMPTY_LIST: &[String] = &[];

/// The full compatibility matrix document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityMatrix {
    /// component -> series -> tested version prefixes, oldest to newest.
    pub component_support: BTreeMap<String, BTreeMap<String, Vec<String>>>,

    /// series -> per-component ranges and the expected TensorRT major.
    pub jetpack_series: BTreeMap<String, SeriesSupport>,

    /// scenario key -> suggestion text.
    pub alternatives: BTreeMap<String, String>,
}

/// Support data for one JetPack series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSupport {
    /// TensorRT is integer-major versioned per series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensorrt_major: Option<MajorVersion>,

    /// component -> allowed min/max range.
    #[serde(flatten)]
    pub components: BTreeMap<String, VersionRange>,
}

/// Min/max version bounds for one component within a series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionRange {
    pub min: String,
    pub max: String,
}

/// A major version that matrix authors may write as a number or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MajorVersion {
    Number(u64),
    Text(String),
}

impl MajorVersion {
    /// The major as a plain string for comparison and display.
    pub fn as_string(&self) -> String {
        match self {
            MajorVersion::Number(n) => n.to_string(),
            MajorVersion::Text(s) => s.clone(),
        }
    }
}

impl CompatibilityMatrix {
    /// Parse the matrix that ships inside the binary.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_MATRIX).map_err(|e| JetcheckError::InvalidMatrix {
            message: e.to_string(),
        })
    }

    /// Min/max range for a component within a series; empty strings when
    /// the matrix has no entry.
    pub fn component_range(&self, series: &str, component: &str) -> (String, String) {
        self.jetpack_series
            .get(series)
            .and_then(|s| s.components.get(component))
            .map(|r| (r.min.clone(), r.max.clone()))
            .unwrap_or_default()
    }

    /// Ordered tested-version prefixes for a component within a series.
    pub fn supported_versions(&self, component: &str, series: &str) -> &[String] {
        self.component_support
            .get(component)
            .and_then(|by_series| by_series.get(series))
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_LIST)
    }

    /// The newest tested version for a component within a series. The
    /// list is ordered oldest to newest, so the last entry is the pin to
    /// recommend; empty when no list exists.
    pub fn recommended_pin(&self, component: &str, series: &str) -> String {
        self.supported_versions(component, series)
            .last()
            .cloned()
            .unwrap_or_default()
    }

    /// Expected TensorRT major for a series; empty when undefined.
    pub fn expected_tensorrt_major(&self, series: &str) -> String {
        self.jetpack_series
            .get(series)
            .and_then(|s| s.tensorrt_major.as_ref())
            .map(MajorVersion::as_string)
            .unwrap_or_default()
    }

    /// Alternative-suggestion text for a failure scenario, falling back
    /// to the given default when the matrix defines none.
    pub fn alternative(&self, scenario: &str, fallback: &str) -> String {
        self.alternatives
            .get(scenario)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> CompatibilityMatrix {
        serde_json::from_value(serde_json::json!({
            "component_support": {
                "pytorch": {"5.x": ["1.13", "2.0"], "6.x": ["2.1", "2.2"]}
            },
            "jetpack_series": {
                "5.x": {
                    "cuda": {"min": "11.4", "max": "11.4"},
                    "python": {"min": "3.8", "max": "3.8"},
                    "tensorrt_major": "8"
                },
                "6.x": {
                    "cuda": {"min": "12.2", "max": "12.6"},
                    "tensorrt_major": 10
                }
            },
            "alternatives": {
                "jetpack_major_mismatch": "Reflash to the matching major."
            }
        }))
        .unwrap()
    }

    #[test]
    fn builtin_matrix_parses() {
        let matrix = CompatibilityMatrix::builtin().unwrap();
        assert!(!matrix.jetpack_series.is_empty());
        assert!(!matrix.component_support.is_empty());
    }

    #[test]
    fn component_range_returns_bounds() {
        let matrix = sample_matrix();
        let (min, max) = matrix.component_range("5.x", "cuda");
        assert_eq!(min, "11.4");
        assert_eq!(max, "11.4");
    }

    #[test]
    fn component_range_missing_is_empty() {
        let matrix = sample_matrix();
        assert_eq!(matrix.component_range("7.x", "cuda"), (String::new(), String::new()));
        assert_eq!(matrix.component_range("5.x", "ubuntu"), (String::new(), String::new()));
    }

    #[test]
    fn supported_versions_preserve_order() {
        let matrix = sample_matrix();
        assert_eq!(matrix.supported_versions("pytorch", "5.x"), ["1.13", "2.0"]);
        assert!(matrix.supported_versions("pytorch", "4.x").is_empty());
        assert!(matrix.supported_versions("onnxruntime", "5.x").is_empty());
    }

    #[test]
    fn recommended_pin_is_last_entry() {
        let matrix = sample_matrix();
        assert_eq!(matrix.recommended_pin("pytorch", "6.x"), "2.2");
        assert_eq!(matrix.recommended_pin("pytorch", "4.x"), "");
    }

    #[test]
    fn expected_tensorrt_major_handles_both_shapes() {
        let matrix = sample_matrix();
        assert_eq!(matrix.expected_tensorrt_major("5.x"), "8");
        assert_eq!(matrix.expected_tensorrt_major("6.x"), "10");
        assert_eq!(matrix.expected_tensorrt_major("unknown"), "");
    }

    #[test]
    fn alternative_falls_back_when_missing() {
        let matrix = sample_matrix();
        assert_eq!(
            matrix.alternative("jetpack_major_mismatch", "fallback"),
            "Reflash to the matching major."
        );
        assert_eq!(matrix.alternative("no_such_key", "fallback"), "fallback");
    }
}
