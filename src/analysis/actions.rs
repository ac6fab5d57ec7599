//! Remediation action synthesis.
//!
//! Action identifiers are sequential per analysis run. The counter is
//! state local to one run, threaded through the rule engine as part of
//! this log rather than living in any ambient global.

use crate::model::{RecommendedAction, RiskLevel};

/// Append-only log of synthesized actions.
#[derive(Debug, Default)]
pub struct ActionLog {
    actions: Vec<RecommendedAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action, assigning the next zero-padded sequential id.
    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        summary: impl Into<String>,
        command: impl Into<String>,
        requires_sudo: bool,
        risk_level: RiskLevel,
        rollback_hint: impl Into<String>,
        verify_command: impl Into<String>,
    ) {
        let id = format!("action-{:03}", self.actions.len() + 1);
        self.actions.push(RecommendedAction {
            id,
            summary: summary.into(),
            command: command.into(),
            requires_sudo,
            risk_level,
            rollback_hint: rollback_hint.into(),
            verify_command: verify_command.into(),
        });
    }

    pub fn into_actions(self) -> Vec<RecommendedAction> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
