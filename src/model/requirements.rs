//! Tutorial requirement documents.
//!
//! A requirements document is produced by the extractor (or written by
//! hand) and consumed by the resolution engine. Constraint order in the
//! document has no semantic meaning; the engine re-sorts constraints into
//! a canonical order so that output is reproducible.

use serde::{Deserialize, Serialize};

/// Normalized requirements extracted from one tutorial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialRequirements {
    /// Where the tutorial came from (local path as a display string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Free-form lines that mention hardware.
    pub hardware_requirements: Vec<String>,

    /// Free-form lines that mention software components.
    pub software_requirements: Vec<String>,

    /// Structured version assertions found in the text.
    pub version_constraints: Vec<VersionConstraint>,

    /// Extraction caveats for the reader.
    pub notes: Vec<String>,

    /// Extraction confidence in `[0.0, 0.99]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// One version assertion from a tutorial, e.g. `cuda >= 11.4`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConstraint {
    pub component: String,
    pub operator: String,
    pub version: String,
    /// The tutorial line the constraint was read from.
    pub evidence: String,
}

impl VersionConstraint {
    /// A copy with the component name canonicalized.
    pub fn normalized(&self) -> Self {
        let mut constraint = self.clone();
        constraint.component = canonical_component(&self.component);
        if constraint.operator.is_empty() {
            constraint.operator = "==".to_string();
        }
        constraint
    }

    /// Canonical sort key: component, version, operator, evidence.
    pub fn sort_key(&self) -> (&str, &str, &str, &str) {
        (&self.component, &self.version, &self.operator, &self.evidence)
    }
}

/// Canonicalize a component name: lowercase, spaces stripped, aliases
/// folded ("ONNX Runtime" and "onnxruntime" name the same component).
pub fn canonical_component(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "")
}
