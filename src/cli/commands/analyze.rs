//! Analyze command implementation.
//!
//! The `jetcheck analyze` command runs the resolution engine over the
//! facts, requirements, and matrix documents and writes the analysis
//! report.

use crate::analysis::analyze;
use crate::cli::args::AnalyzeArgs;
use crate::error::Result;
use crate::model::{
    read_document, write_document, CompatibilityMatrix, Facts, TutorialRequirements,
};
use crate::ui::Console;

use super::dispatcher::{Command, CommandResult};
use super::display::show_report;

/// The analyze command implementation.
pub struct AnalyzeCommand {
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    /// Create a new analyze command.
    pub fn new(args: AnalyzeArgs) -> Self {
        Self { args }
    }

    fn load_matrix(&self) -> Result<CompatibilityMatrix> {
        match &self.args.matrix {
            Some(path) => read_document(path),
            None => CompatibilityMatrix::builtin(),
        }
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let facts: Facts = read_document(&self.args.facts)?;
        let requirements: TutorialRequirements = read_document(&self.args.requirements)?;
        let matrix = self.load_matrix()?;

        let report = analyze(&facts, &requirements, &matrix);
        write_document(&self.args.output, &report)?;
        tracing::info!(
            status = %report.overall_status,
            output = %self.args.output.display(),
            "analysis written"
        );

        show_report(console, &report);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisReport, OverallStatus};
    use crate::ui::{OutputMode, Theme};
    use std::fs;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, name: &str, value: serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        path
    }

    #[test]
    fn analyze_writes_report_document() {
        let temp = TempDir::new().unwrap();
        let facts = write_json(
            &temp,
            "facts.json",
            serde_json::json!({
                "jetpack": {"series": "6.x"},
                "python": {"version": "3.10.12"}
            }),
        );
        let requirements = write_json(
            &temp,
            "requirements.json",
            serde_json::json!({
                "version_constraints": [
                    {"component": "python", "operator": ">=", "version": "3.8", "evidence": "Python 3.8+"}
                ]
            }),
        );
        let output = temp.path().join("analysis.json");

        let cmd = AnalyzeCommand::new(AnalyzeArgs {
            facts,
            requirements,
            matrix: None,
            output: output.clone(),
        });
        let console = Console::new(OutputMode::Quiet, Theme::plain());
        let result = cmd.execute(&console).unwrap();
        assert!(result.success);

        let report: AnalysisReport = read_document(&output).unwrap();
        assert_eq!(report.overall_status, OverallStatus::Ready);
        assert_eq!(report.ready_items[0].component, "python");
    }

    #[test]
    fn missing_facts_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let requirements = write_json(&temp, "requirements.json", serde_json::json!({}));

        let cmd = AnalyzeCommand::new(AnalyzeArgs {
            facts: temp.path().join("absent.json"),
            requirements,
            matrix: None,
            output: temp.path().join("analysis.json"),
        });
        let console = Console::new(OutputMode::Quiet, Theme::plain());
        assert!(cmd.execute(&console).is_err());
        // No partial output document
        assert!(!temp.path().join("analysis.json").exists());
    }
}
