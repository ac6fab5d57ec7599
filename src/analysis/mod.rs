//! The compatibility resolution engine.
//!
//! A single-pass, stateless pipeline: facts + requirements + matrix go
//! in, one report comes out. The engine performs no I/O and never
//! errors; malformed or missing data degrades to `"unknown"` values that
//! the rule engine classifies as issues or blockers.
//!
//! - [`version`] - version parsing and relational operators
//! - [`series`] - JetPack series inference
//! - [`component`] - component category dispatch
//! - [`rules`] - the per-category decision table
//! - [`actions`] - sequential remediation-action synthesis

pub mod actions;
pub mod component;
pub mod rules;
pub mod series;
pub mod version;

use crate::model::{AnalysisReport, CompatibilityMatrix, Facts, TutorialRequirements};
use rules::RuleEngine;

/// Run one full analysis.
///
/// Constraints are normalized and re-sorted into canonical order
/// (component, version, operator, evidence) before evaluation, so the
/// report is byte-identical across runs regardless of input ordering.
pub fn analyze(
    facts: &Facts,
    requirements: &TutorialRequirements,
    matrix: &CompatibilityMatrix,
) -> AnalysisReport {
    let mut engine = RuleEngine::new(facts, matrix);

    engine.evaluate_hardware(&requirements.hardware_requirements);

    let mut constraints: Vec<_> = requirements
        .version_constraints
        .iter()
        .map(|c| c.normalized())
        .collect();
    constraints.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    tracing::debug!(count = constraints.len(), "evaluating version constraints");

    for constraint in &constraints {
        engine.evaluate_constraint(constraint);
    }

    engine.finish()
}
