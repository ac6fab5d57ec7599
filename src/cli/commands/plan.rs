//! Plan command implementation.
//!
//! The `jetcheck plan` command turns an analysis report into an ordered
//! execution plan with sudo gating and guided-mode approval flags.

use crate::cli::args::PlanArgs;
use crate::error::Result;
use crate::model::{read_document, write_document, AnalysisReport};
use crate::plan::build_plan;
use crate::ui::Console;

use super::dispatcher::{Command, CommandResult};

/// The plan command implementation.
pub struct PlanCommand {
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(args: PlanArgs) -> Self {
        Self { args }
    }
}

impl Command for PlanCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let analysis: AnalysisReport = read_document(&self.args.analysis)?;
        let plan = build_plan(&analysis, self.args.allow_sudo, self.args.mode);
        write_document(&self.args.output, &plan)?;

        console.output.println(&format!(
            "Plan with {} steps written to {}",
            plan.steps.len(),
            self.args.output.display()
        ));
        if !plan.manual_prerequisites.is_empty() {
            console.warning(&format!(
                "{} privileged steps need manual handling (sudo disabled)",
                plan.manual_prerequisites.len()
            ));
        }
        Ok(CommandResult::success())
    }
}
