//! Analysis report types.
//!
//! The report is the engine's only output: classified findings per
//! constraint, deduplicated alternative suggestions, and the synthesized
//! remediation actions. Everything here is constructed once per analysis
//! run and never mutated afterwards.

use crate::analysis::series::Series;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall verdict for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "ready")]
    #[default]
    Ready,
    #[serde(rename = "needs-adjustments")]
    NeedsAdjustments,
    #[serde(rename = "blocked")]
    Blocked,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Ready => "ready",
            OverallStatus::NeedsAdjustments => "needs-adjustments",
            OverallStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a non-fatal deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Risk carried by a remediation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl From<RiskLevel> for Severity {
    fn from(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Low => Severity::Low,
            RiskLevel::Medium => Severity::Medium,
            RiskLevel::High => Severity::High,
        }
    }
}

/// What a finding required: a single version expression, or a list of
/// acceptable device models for the hardware check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiredSpec {
    One(String),
    Many(Vec<String>),
}

impl From<String> for RequiredSpec {
    fn from(value: String) -> Self {
        RequiredSpec::One(value)
    }
}

impl From<Vec<String>> for RequiredSpec {
    fn from(value: Vec<String>) -> Self {
        RequiredSpec::Many(value)
    }
}

impl fmt::Display for RequiredSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredSpec::One(s) => f.write_str(s),
            RequiredSpec::Many(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// A resolvable deviation from the tutorial's requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub component: String,
    pub severity: Severity,
    pub message: String,
    pub required: RequiredSpec,
    pub installed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// A fatal incompatibility; any blocker forces the overall status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedItem {
    pub component: String,
    pub message: String,
    pub required: RequiredSpec,
    pub installed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// A constraint the installed stack already satisfies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyItem {
    pub component: String,
    pub required: RequiredSpec,
    pub installed: String,
}

/// One idempotent, independently auditable remediation unit.
///
/// Actions are append-only and numbered in emission order; each carries
/// its own rollback guidance and verification command so it can be
/// reviewed without reference to any other action's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedAction {
    pub id: String,
    pub summary: String,
    pub command: String,
    pub requires_sudo: bool,
    pub risk_level: RiskLevel,
    pub rollback_hint: String,
    pub verify_command: String,
}

/// The aggregate output document of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_status: OverallStatus,
    pub facts_series: Series,
    pub issues: Vec<Issue>,
    pub alternatives: Vec<String>,
    pub blocked_items: Vec<BlockedItem>,
    pub ready_items: Vec<ReadyItem>,
    pub recommended_actions: Vec<RecommendedAction>,
}
