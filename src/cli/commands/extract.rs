//! Extract command implementation.
//!
//! The `jetcheck extract` command parses a local tutorial file into the
//! normalized requirements document.

use crate::cli::args::ExtractArgs;
use crate::error::Result;
use crate::extract::{extract_from_text, load_source};
use crate::model::write_document;
use crate::ui::Console;

use super::dispatcher::{Command, CommandResult};

/// The extract command implementation.
pub struct ExtractCommand {
    args: ExtractArgs,
}

impl ExtractCommand {
    /// Create a new extract command.
    pub fn new(args: ExtractArgs) -> Self {
        Self { args }
    }
}

impl Command for ExtractCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let text = load_source(&self.args.source)?;
        let requirements = extract_from_text(&text, &self.args.source);
        write_document(&self.args.output, &requirements)?;

        let confidence = requirements.confidence.unwrap_or(0.0);
        console.output.println(&format!(
            "Extracted {} constraints (confidence {:.2})",
            requirements.version_constraints.len(),
            confidence
        ));
        for note in &requirements.notes {
            console.warning(note);
        }
        Ok(CommandResult::success())
    }
}
