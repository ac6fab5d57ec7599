//! Jetcheck - Jetson tutorial compatibility analysis.
//!
//! Jetcheck compares a tutorial's stated hardware and software requirements
//! against the software stack actually installed on a Jetson device and
//! produces a classified verdict (ready / needs-adjustments / blocked)
//! together with concrete, risk-annotated remediation actions.
//!
//! # Modules
//!
//! - [`analysis`] - The compatibility resolution engine
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Requirement extraction from tutorial text
//! - [`model`] - Facts, requirements, matrix, and report documents
//! - [`plan`] - Deployment plan generation from an analysis report
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```
//! use jetcheck::analysis::analyze;
//! use jetcheck::model::{CompatibilityMatrix, Facts, TutorialRequirements};
//!
//! let facts = Facts::default();
//! let requirements = TutorialRequirements::default();
//! let matrix = CompatibilityMatrix::builtin().unwrap();
//!
//! let report = analyze(&facts, &requirements, &matrix);
//! assert_eq!(report.facts_series.as_str(), "unknown");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod extract;
pub mod model;
pub mod plan;
pub mod ui;

pub use error::{JetcheckError, Result};
