//! Data model: input documents, the compatibility matrix, and the report.
//!
//! All entities here are plain serde data. Inputs (facts, requirements,
//! matrix) are immutable once loaded; the report is derived entirely from
//! them by the [`crate::analysis`] engine.

pub mod document;
pub mod facts;
pub mod matrix;
pub mod report;
pub mod requirements;

pub use document::{read_document, write_document};
pub use facts::{Facts, UNKNOWN};
pub use matrix::CompatibilityMatrix;
pub use report::{
    AnalysisReport, BlockedItem, Issue, OverallStatus, ReadyItem, RecommendedAction, RequiredSpec,
    RiskLevel, Severity,
};
pub use requirements::{canonical_component, TutorialRequirements, VersionConstraint};
