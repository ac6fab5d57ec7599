//! Deployment plan generation.
//!
//! Consumes an analysis report and turns its recommended actions into an
//! ordered execution plan: a preflight review first, then the actions
//! renumbered as steps. Sudo gating and guided-mode approval flags are
//! applied here; the plan never executes anything itself.

use crate::model::{AnalysisReport, OverallStatus, RiskLevel};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether the generated plan may contain privileged steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowSudo {
    Yes,
    No,
}

impl AllowSudo {
    pub fn allowed(&self) -> bool {
        matches!(self, AllowSudo::Yes)
    }
}

/// Plan-only output, or a guided plan with approval gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    Plan,
    Guided,
}

/// One executable step of the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStep {
    pub id: String,
    pub command: String,
    pub requires_sudo: bool,
    pub risk_level: RiskLevel,
    pub rollback_hint: String,
    pub verify_command: String,
    pub approval_required: bool,
}

/// A privileged step that was stripped because sudo is disallowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualPrerequisite {
    pub id: String,
    pub original_command: String,
    pub reason: String,
}

/// The generated plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployPlan {
    pub mode: PlanMode,
    pub allow_sudo: AllowSudo,
    pub overall_status: OverallStatus,
    pub generated_at: DateTime<Utc>,
    pub steps: Vec<PlanStep>,
    pub manual_prerequisites: Vec<ManualPrerequisite>,
}

fn step_id(counter: &mut usize) -> String {
    let id = format!("step-{:03}", *counter);
    *counter += 1;
    id
}

fn preflight_step(id: String) -> PlanStep {
    PlanStep {
        id,
        command:
            "echo \"Review available disk, memory, and network connectivity before deployment.\""
                .to_string(),
        requires_sudo: false,
        risk_level: RiskLevel::Low,
        rollback_hint: "No rollback needed for preflight review.".to_string(),
        verify_command: "echo \"Preflight checklist reviewed.\"".to_string(),
        approval_required: false,
    }
}

/// When the analysis produced no actions, the plan still gets one step
/// acknowledging the verdict.
fn fallback_step(id: String, status: OverallStatus) -> PlanStep {
    if status == OverallStatus::Blocked {
        PlanStep {
            id,
            command: "echo \"Deployment blocked. Review analysis alternatives and blockers.\""
                .to_string(),
            requires_sudo: false,
            risk_level: RiskLevel::High,
            rollback_hint: "No system changes have been made.".to_string(),
            verify_command: "echo \"Blockers acknowledged.\"".to_string(),
            approval_required: false,
        }
    } else {
        PlanStep {
            id,
            command:
                "echo \"Compatibility check passed. Continue with project-specific install commands.\""
                    .to_string(),
            requires_sudo: false,
            risk_level: RiskLevel::Low,
            rollback_hint: "No rollback needed.".to_string(),
            verify_command: "echo \"Compatibility-ready state confirmed.\"".to_string(),
            approval_required: false,
        }
    }
}

/// Build a deployment plan from an analysis report.
pub fn build_plan(analysis: &AnalysisReport, allow_sudo: AllowSudo, mode: PlanMode) -> DeployPlan {
    let mut counter = 1usize;
    let mut steps = vec![preflight_step(step_id(&mut counter))];
    let mut manual_prerequisites = Vec::new();

    if analysis.recommended_actions.is_empty() {
        steps.push(fallback_step(step_id(&mut counter), analysis.overall_status));
    } else {
        for action in &analysis.recommended_actions {
            let id = step_id(&mut counter);
            let mut step = PlanStep {
                id: id.clone(),
                command: action.command.clone(),
                requires_sudo: action.requires_sudo,
                risk_level: action.risk_level,
                rollback_hint: action.rollback_hint.clone(),
                verify_command: action.verify_command.clone(),
                approval_required: false,
            };

            if !allow_sudo.allowed() && step.requires_sudo {
                manual_prerequisites.push(ManualPrerequisite {
                    id,
                    original_command: step.command.clone(),
                    reason: "allow-sudo=no".to_string(),
                });
                step.command = format!("echo \"Manual sudo prerequisite: {}\"", step.command);
                step.requires_sudo = false;
                step.risk_level = RiskLevel::High;
                step.rollback_hint = "No command executed because sudo is disabled.".to_string();
                step.verify_command = "echo \"Manual prerequisite recorded.\"".to_string();
            }

            if mode == PlanMode::Guided
                && matches!(step.risk_level, RiskLevel::Medium | RiskLevel::High)
            {
                step.approval_required = true;
            }

            steps.push(step);
        }
    }

    tracing::debug!(
        steps = steps.len(),
        manual = manual_prerequisites.len(),
        "generated deployment plan"
    );

    DeployPlan {
        mode,
        allow_sudo,
        overall_status: analysis.overall_status,
        generated_at: Utc::now(),
        steps,
        manual_prerequisites,
    }
}
