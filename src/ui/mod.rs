//! Terminal output components.
//!
//! - [`Output`] / [`OutputMode`] - verbosity-aware writer
//! - [`Theme`] - console styling
//! - [`Console`] - the pair, as passed to command implementations

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::Theme;

/// Output writer plus theme, handed to every command.
#[derive(Debug)]
pub struct Console {
    pub output: Output,
    pub theme: Theme,
}

impl Console {
    pub fn new(mode: OutputMode, theme: Theme) -> Self {
        Self {
            output: Output::new(mode),
            theme,
        }
    }

    /// Display a plain message.
    pub fn message(&self, msg: &str) {
        self.output.detail(msg);
    }

    /// Display a success message.
    pub fn success(&self, msg: &str) {
        self.output.detail(&self.theme.format_success(msg));
    }

    /// Display a warning message.
    pub fn warning(&self, msg: &str) {
        self.output.detail(&self.theme.format_warning(msg));
    }

    /// Display an error message. Errors ignore quiet mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
