//! Human rendering of analysis reports.
//!
//! The JSON document is the machine interface; this module renders the
//! same report for a terminal reader, styled by verdict severity.

use crate::model::{AnalysisReport, OverallStatus};
use crate::ui::Console;

/// Render the verdict line plus report detail to the console.
pub fn show_report(console: &Console, report: &AnalysisReport) {
    console
        .output
        .println(&verdict_line(console, report));

    for blocked in &report.blocked_items {
        console.error(&format!("  [{}] {}", blocked.component, blocked.message));
    }
    for issue in &report.issues {
        console.warning(&format!(
            "  [{}] ({:?}) {}",
            issue.component,
            issue.severity,
            issue.message
        ));
        if let Some(suggestion) = &issue.suggestion {
            console.message(&format!("      {}", console.theme.dim.apply_to(suggestion)));
        }
    }
    if console.output.mode().shows_ready_items() {
        for ready in &report.ready_items {
            console.success(&format!(
                "  [{}] requires {} (installed: {})",
                ready.component, ready.required, ready.installed
            ));
        }
    }

    if !report.recommended_actions.is_empty() {
        console.message(&format!(
            "{}",
            console.theme.header.apply_to("Recommended actions:")
        ));
        for action in &report.recommended_actions {
            let sudo = if action.requires_sudo { " [sudo]" } else { "" };
            console.message(&format!(
                "  {} ({}{}) {}",
                console.theme.key.apply_to(&action.id),
                action.risk_level.as_str(),
                sudo,
                action.summary
            ));
            console.message(&format!(
                "      {}",
                console.theme.command.apply_to(&action.command)
            ));
        }
    }

    if !report.alternatives.is_empty() {
        console.message(&format!(
            "{}",
            console.theme.header.apply_to("Alternatives:")
        ));
        for alternative in &report.alternatives {
            console.message(&format!("  - {}", alternative));
        }
    }
}

fn verdict_line(console: &Console, report: &AnalysisReport) -> String {
    let text = format!(
        "Overall status: {} (series {})",
        report.overall_status, report.facts_series
    );
    let style = match report.overall_status {
        OverallStatus::Ready => &console.theme.success,
        OverallStatus::NeedsAdjustments => &console.theme.warning,
        OverallStatus::Blocked => &console.theme.error,
    };
    format!("{}", style.apply_to(text))
}
