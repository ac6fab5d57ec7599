//! Output mode and writer.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including ready items.
    Verbose,
    /// Show the verdict plus blockers, issues, and actions.
    #[default]
    Normal,
    /// Show the verdict line only.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Whether per-item detail (issues, actions) is shown.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Whether ready items are listed individually.
    pub fn shows_ready_items(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a status line unconditionally.
    pub fn println(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Write a detail line unless in quiet mode.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", msg);
        }
    }
}
