//! Component category dispatch.
//!
//! The engine's policy is keyed by component *category*, not by name:
//! each category has one handler in the rule engine, and adding a
//! component means extending the classification here rather than growing
//! a chain of string comparisons.

use crate::model::RiskLevel;
use crate::analysis::series::Series;

/// The fixed policy categories a constraint's component can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// L4T release: recorded for audit, never evaluated.
    ReleasePassthrough,
    /// JetPack itself: series-level generation checks.
    PlatformGeneration,
    /// Components bounded by a per-series min/max range in the matrix.
    RangeBounded(RangeComponent),
    /// ML frameworks validated against per-series tested-version lists.
    TestedList,
    /// TensorRT: one expected integer major per series.
    IntegerMajor,
    /// Anything the engine has no policy for.
    Unrecognized,
}

/// The concrete range-bounded components, each with its own mismatch
/// remediation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeComponent {
    Cuda,
    Python,
    Ubuntu,
}

/// Remediation policy for a range-bounded component whose installed
/// version fails its constraint.
#[derive(Debug, Clone)]
pub struct MismatchPolicy {
    pub suggestion: String,
    pub command: String,
    pub requires_sudo: bool,
    pub risk_level: RiskLevel,
    pub rollback_hint: String,
    pub verify_command: String,
}

impl ComponentKind {
    /// Classify a canonical component name.
    pub fn classify(component: &str) -> Self {
        match component {
            "l4t" => ComponentKind::ReleasePassthrough,
            "jetpack" => ComponentKind::PlatformGeneration,
            "cuda" => ComponentKind::RangeBounded(RangeComponent::Cuda),
            "python" => ComponentKind::RangeBounded(RangeComponent::Python),
            "ubuntu" => ComponentKind::RangeBounded(RangeComponent::Ubuntu),
            "pytorch" | "onnxruntime" => ComponentKind::TestedList,
            "tensorrt" => ComponentKind::IntegerMajor,
            _ => ComponentKind::Unrecognized,
        }
    }
}

impl RangeComponent {
    pub fn name(&self) -> &'static str {
        match self {
            RangeComponent::Cuda => "cuda",
            RangeComponent::Python => "python",
            RangeComponent::Ubuntu => "ubuntu",
        }
    }

    /// Whether fixing an out-of-range requirement for this component
    /// needs root. CUDA ties into the JetPack image and Ubuntu changes
    /// are system-wide; the interpreter can be adjusted per-project.
    pub fn exceeds_range_requires_sudo(&self) -> bool {
        !matches!(self, RangeComponent::Python)
    }

    /// Remediation policy for a plain version mismatch within range.
    pub fn mismatch_policy(&self, series: Series) -> MismatchPolicy {
        match self {
            RangeComponent::Python => MismatchPolicy {
                suggestion: "Use a project virtual environment and install compatible wheels."
                    .to_string(),
                command: "python3 -m venv .venv && . .venv/bin/activate && python3 -m pip install --upgrade pip"
                    .to_string(),
                requires_sudo: false,
                risk_level: RiskLevel::Medium,
                rollback_hint: "Remove or recreate the virtual environment if needed.".to_string(),
                verify_command: "python3 --version".to_string(),
            },
            RangeComponent::Cuda => MismatchPolicy {
                suggestion: format!(
                    "Stay inside {series} CUDA range and use JetPack-aligned CUDA packages."
                ),
                command:
                    "echo \"Adjust CUDA requirement to JetPack-compatible version; avoid cross-major upgrades.\""
                        .to_string(),
                requires_sudo: true,
                risk_level: RiskLevel::High,
                rollback_hint: "Remove or recreate the virtual environment if needed.".to_string(),
                verify_command: "python3 - <<'PY'\nprint('verify cuda manually')\nPY".to_string(),
            },
            RangeComponent::Ubuntu => MismatchPolicy {
                suggestion:
                    "Do not force unsupported Ubuntu version changes inside an existing JetPack image."
                        .to_string(),
                command: "echo \"Manual action required: Ubuntu baseline mismatch with tutorial.\""
                    .to_string(),
                requires_sudo: true,
                risk_level: RiskLevel::High,
                rollback_hint: "Remove or recreate the virtual environment if needed.".to_string(),
                verify_command: "python3 - <<'PY'\nprint('verify ubuntu manually')\nPY".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_components_classify_into_categories() {
        assert_eq!(ComponentKind::classify("l4t"), ComponentKind::ReleasePassthrough);
        assert_eq!(ComponentKind::classify("jetpack"), ComponentKind::PlatformGeneration);
        assert_eq!(
            ComponentKind::classify("cuda"),
            ComponentKind::RangeBounded(RangeComponent::Cuda)
        );
        assert_eq!(
            ComponentKind::classify("ubuntu"),
            ComponentKind::RangeBounded(RangeComponent::Ubuntu)
        );
        assert_eq!(ComponentKind::classify("pytorch"), ComponentKind::TestedList);
        assert_eq!(ComponentKind::classify("onnxruntime"), ComponentKind::TestedList);
        assert_eq!(ComponentKind::classify("tensorrt"), ComponentKind::IntegerMajor);
    }

    #[test]
    fn unknown_component_is_unrecognized() {
        assert_eq!(ComponentKind::classify("gstreamer"), ComponentKind::Unrecognized);
        assert_eq!(ComponentKind::classify(""), ComponentKind::Unrecognized);
    }

    #[test]
    fn only_python_skips_sudo_for_range_blockers() {
        assert!(RangeComponent::Cuda.exceeds_range_requires_sudo());
        assert!(RangeComponent::Ubuntu.exceeds_range_requires_sudo());
        assert!(!RangeComponent::Python.exceeds_range_requires_sudo());
    }

    #[test]
    fn python_mismatch_suggests_isolated_environment() {
        let policy = RangeComponent::Python.mismatch_policy(Series::Jp6);
        assert!(policy.suggestion.contains("virtual environment"));
        assert!(!policy.requires_sudo);
        assert_eq!(policy.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn cuda_mismatch_is_high_risk_sudo() {
        let policy = RangeComponent::Cuda.mismatch_policy(Series::Jp5);
        assert!(policy.suggestion.contains("5.x"));
        assert!(policy.requires_sudo);
        assert_eq!(policy.risk_level, RiskLevel::High);
    }

    #[test]
    fn ubuntu_mismatch_warns_against_forcing_release() {
        let policy = RangeComponent::Ubuntu.mismatch_policy(Series::Jp6);
        assert!(policy.suggestion.contains("JetPack image"));
        assert!(policy.requires_sudo);
        assert_eq!(policy.risk_level, RiskLevel::High);
    }
}
