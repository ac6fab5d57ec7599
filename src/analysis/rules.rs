//! The decision table.
//!
//! One classification policy per component category. Blockers are
//! reserved for contradictions that cannot be resolved inside the
//! installed platform generation (wrong hardware, wrong JetPack major,
//! requirement beyond the series range); resolvable version mismatches
//! become issues; unknown or missing data is always an issue, never
//! silently ready and never a blocker.

use crate::analysis::actions::ActionLog;
use crate::analysis::component::{ComponentKind, RangeComponent};
use crate::analysis::series::{infer_series, major_to_series, Series};
use crate::analysis::version::{compare_versions, satisfies, Operator};
use crate::model::{
    AnalysisReport, BlockedItem, CompatibilityMatrix, Facts, Issue, OverallStatus, ReadyItem,
    RequiredSpec, RiskLevel, Severity, VersionConstraint, UNKNOWN,
};
use std::cmp::Ordering;

/// Device models a tutorial can call out by name.
const KNOWN_MODELS: &[&str] = &[
    "jetson nano",
    "jetson xavier nx",
    "jetson agx xavier",
    "jetson orin nano",
    "jetson orin nx",
    "jetson agx orin",
    "jetson tx2",
];

/// Known model names found in free-form hardware requirement lines,
/// first-seen order, deduplicated.
pub fn detect_required_models(hardware_requirements: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for line in hardware_requirements {
        let lowered = line.to_lowercase();
        for model in KNOWN_MODELS {
            if lowered.contains(model) && !found.iter().any(|m| m == model) {
                found.push((*model).to_string());
            }
        }
    }
    found
}

/// Per-run classification state. Constructed once per analysis, consumed
/// by [`RuleEngine::finish`].
pub struct RuleEngine<'a> {
    facts: &'a Facts,
    matrix: &'a CompatibilityMatrix,
    series: Series,
    issues: Vec<Issue>,
    blocked_items: Vec<BlockedItem>,
    ready_items: Vec<ReadyItem>,
    alternatives: Vec<String>,
    actions: ActionLog,
}

impl<'a> RuleEngine<'a> {
    pub fn new(facts: &'a Facts, matrix: &'a CompatibilityMatrix) -> Self {
        let series = infer_series(facts);
        tracing::debug!(series = %series, "inferred JetPack series");
        Self {
            facts,
            matrix,
            series,
            issues: Vec::new(),
            blocked_items: Vec::new(),
            ready_items: Vec::new(),
            alternatives: Vec::new(),
            actions: ActionLog::new(),
        }
    }

    /// The series the engine resolved the facts to.
    pub fn series(&self) -> Series {
        self.series
    }

    /// Evaluate the hardware model requirement, once per run.
    ///
    /// Only runs when the tutorial names specific models; a tutorial
    /// that names none is not evaluated against hardware at all.
    pub fn evaluate_hardware(&mut self, hardware_requirements: &[String]) {
        let required_models = detect_required_models(hardware_requirements);
        if required_models.is_empty() {
            return;
        }

        let installed_model = self.facts.model().to_string();
        let lowered = installed_model.to_lowercase();
        let model_ok = required_models.iter().any(|m| lowered.contains(m.as_str()));

        if model_ok {
            self.ready_items.push(ReadyItem {
                component: "hardware".into(),
                required: required_models.into(),
                installed: installed_model,
            });
        } else {
            self.blocked_items.push(BlockedItem {
                component: "hardware".into(),
                message: format!(
                    "Tutorial targets {required_models:?}, but device is '{installed_model}'."
                ),
                required: required_models.into(),
                installed: installed_model,
                evidence: None,
            });
            self.alternatives.push(
                "Use a tutorial that targets the current Jetson model, or switch hardware."
                    .to_string(),
            );
        }
    }

    /// Classify one normalized constraint.
    pub fn evaluate_constraint(&mut self, constraint: &VersionConstraint) {
        match ComponentKind::classify(&constraint.component) {
            ComponentKind::ReleasePassthrough => self.check_release_passthrough(constraint),
            ComponentKind::PlatformGeneration => self.check_platform_generation(constraint),
            ComponentKind::RangeBounded(component) => self.check_range(constraint, component),
            ComponentKind::TestedList => self.check_tested_list(constraint),
            ComponentKind::IntegerMajor => self.check_integer_major(constraint),
            ComponentKind::Unrecognized => self.check_unrecognized(constraint),
        }
    }

    /// Consume the engine and aggregate the report.
    pub fn finish(self) -> AnalysisReport {
        let overall_status = if !self.blocked_items.is_empty() {
            OverallStatus::Blocked
        } else if !self.issues.is_empty() {
            OverallStatus::NeedsAdjustments
        } else {
            OverallStatus::Ready
        };

        AnalysisReport {
            overall_status,
            facts_series: self.series,
            issues: self.issues,
            alternatives: dedup_preserving_order(self.alternatives),
            blocked_items: self.blocked_items,
            ready_items: self.ready_items,
            recommended_actions: self.actions.into_actions(),
        }
    }

    fn required_display(constraint: &VersionConstraint) -> RequiredSpec {
        format!("{} {}", constraint.operator, constraint.version).into()
    }

    /// L4T is pinned by the flashed image; the constraint is recorded
    /// for audit and never blocks.
    fn check_release_passthrough(&mut self, constraint: &VersionConstraint) {
        self.ready_items.push(ReadyItem {
            component: constraint.component.clone(),
            required: Self::required_display(constraint),
            installed: self.facts.l4t_release().to_string(),
        });
    }

    fn check_platform_generation(&mut self, constraint: &VersionConstraint) {
        let installed = self.facts.installed_version(&constraint.component);
        let required_series = major_to_series(&constraint.version);
        let installed_series = major_to_series(&installed);
        let operator = constraint.operator.as_str();

        if (operator == "==" || operator == ">=") && !required_series.is_unknown() {
            if operator == "==" && installed_series != required_series {
                self.blocked_items.push(BlockedItem {
                    component: constraint.component.clone(),
                    message: format!(
                        "JetPack major mismatch: requires {required_series}, found {installed_series}."
                    ),
                    required: Self::required_display(constraint),
                    installed,
                    evidence: Some(constraint.evidence.clone()),
                });
                self.alternatives.push(self.matrix.alternative(
                    "jetpack_major_mismatch",
                    "Use a compatible tutorial or reflash to matching major.",
                ));
                self.actions.push(
                    "Handle JetPack major mismatch manually.",
                    "echo \"Manual action required: major JetPack mismatch detected. Review fallback or reflash path.\"",
                    false,
                    RiskLevel::High,
                    "No state changed by this placeholder action.",
                    "echo \"Verify major compatibility decision is documented.\"",
                );
                return;
            }
            if operator == ">="
                && installed_series.leading_digit() < required_series.leading_digit()
            {
                self.blocked_items.push(BlockedItem {
                    component: constraint.component.clone(),
                    message: format!(
                        "JetPack major too low: requires {required_series} or newer, found {installed_series}."
                    ),
                    required: Self::required_display(constraint),
                    installed,
                    evidence: Some(constraint.evidence.clone()),
                });
                self.alternatives.push(self.matrix.alternative(
                    "jetpack_major_mismatch",
                    "Use a compatible tutorial or reflash to matching major.",
                ));
                self.actions.push(
                    "Escalate JetPack major upgrade decision.",
                    "echo \"Manual decision required: tutorial needs newer JetPack major.\"",
                    false,
                    RiskLevel::High,
                    "No state changed by this placeholder action.",
                    "echo \"Verify upgrade or fallback decision is approved.\"",
                );
                return;
            }
        }

        self.ready_items.push(ReadyItem {
            component: constraint.component.clone(),
            required: Self::required_display(constraint),
            installed,
        });
    }

    fn check_range(&mut self, constraint: &VersionConstraint, component: RangeComponent) {
        let name = component.name();
        let installed = self.facts.installed_version(name);

        // Absence of data is not evidence of incompatibility.
        if installed == UNKNOWN {
            self.issues.push(Issue {
                component: name.into(),
                severity: Severity::Medium,
                message: format!(
                    "Installed {name} version is unknown; manual verification required."
                ),
                required: Self::required_display(constraint),
                installed,
                suggestion: None,
                evidence: Some(constraint.evidence.clone()),
            });
            self.alternatives.push(format!(
                "Collect {name} facts again and re-run compatibility analysis."
            ));
            return;
        }

        let series = self.series;
        let (min, max) = self.matrix.component_range(series.as_str(), name);
        let order_preserving = matches!(
            Operator::parse(&constraint.operator),
            Some(Operator::Eq | Operator::Ge | Operator::Gt)
        );
        if !max.is_empty()
            && compare_versions(&constraint.version, &max) == Ordering::Greater
            && order_preserving
        {
            self.blocked_items.push(BlockedItem {
                component: name.into(),
                message: format!(
                    "{name} requirement {} {} exceeds {series} range (max {max}).",
                    constraint.operator, constraint.version
                ),
                required: Self::required_display(constraint),
                installed,
                evidence: Some(constraint.evidence.clone()),
            });
            self.alternatives.push(format!(
                "Use a {name} version within {series} supported range ({min} to {max})."
            ));
            self.actions.push(
                format!("Resolve unsupported {name} requirement."),
                format!(
                    "echo \"Manual action required: adjust {name} requirement to {series} supported range.\""
                ),
                component.exceeds_range_requires_sudo(),
                RiskLevel::High,
                "No state changed by this placeholder action.",
                format!("echo \"Verify {name} requirement now fits {series} range.\""),
            );
            return;
        }

        if satisfies(&installed, &constraint.operator, &constraint.version) {
            self.ready_items.push(ReadyItem {
                component: name.into(),
                required: Self::required_display(constraint),
                installed,
            });
            return;
        }

        let policy = component.mismatch_policy(series);
        self.issues.push(Issue {
            component: name.into(),
            severity: policy.risk_level.into(),
            message: format!(
                "{name} does not satisfy requirement {} {}.",
                constraint.operator, constraint.version
            ),
            required: Self::required_display(constraint),
            installed,
            suggestion: Some(policy.suggestion.clone()),
            evidence: Some(constraint.evidence.clone()),
        });
        self.alternatives.push(policy.suggestion);
        self.actions.push(
            format!("Adjust {name} compatibility."),
            policy.command,
            policy.requires_sudo,
            policy.risk_level,
            policy.rollback_hint,
            policy.verify_command,
        );
    }

    fn check_tested_list(&mut self, constraint: &VersionConstraint) {
        let component = constraint.component.as_str();
        let series = self.series;
        let supported = self
            .matrix
            .supported_versions(component, series.as_str())
            .to_vec();

        if supported.is_empty() {
            self.issues.push(Issue {
                component: component.into(),
                severity: Severity::Medium,
                message: format!("No support map found for {component} on {series}."),
                required: Self::required_display(constraint),
                installed: UNKNOWN.into(),
                suggestion: None,
                evidence: Some(constraint.evidence.clone()),
            });
            self.alternatives.push(format!(
                "Manually validate {component} package availability for {series}."
            ));
            return;
        }

        // Match on the first two dot segments, or the full string when
        // there is no dot; a required version may also extend a tested
        // prefix ("2.1.0" matches the "2.1" entry).
        let required = constraint.version.as_str();
        let required_prefix: String = if required.contains('.') {
            required.split('.').take(2).collect::<Vec<_>>().join(".")
        } else {
            required.to_string()
        };
        let supported_ok = supported
            .iter()
            .any(|s| required_prefix == *s || required.starts_with(s.as_str()));

        if supported_ok {
            self.ready_items.push(ReadyItem {
                component: component.into(),
                required: Self::required_display(constraint),
                installed: format!("compatible with {series}"),
            });
            return;
        }

        let pin = self.matrix.recommended_pin(component, series.as_str());
        let suggestion = if pin.is_empty() {
            format!("Pin {component} to a tested version for {series}.")
        } else {
            format!("Pin {component} to {pin} for {series}.")
        };
        self.issues.push(Issue {
            component: component.into(),
            severity: Severity::Medium,
            message: format!(
                "{component} version {required} is not in tested list for {series}."
            ),
            required: Self::required_display(constraint),
            installed: format!("supported list: {supported:?}"),
            suggestion: Some(suggestion.clone()),
            evidence: Some(constraint.evidence.clone()),
        });
        self.alternatives.push(suggestion);
        let install_command = if pin.is_empty() {
            format!("echo \"Select a tested {component} version for {series}.\"")
        } else {
            format!("python3 -m pip install {component}=={pin}")
        };
        self.actions.push(
            format!("Pin {component} to a {series} compatible version."),
            install_command,
            false,
            RiskLevel::Medium,
            format!("Reinstall previous {component} version if regression is observed."),
            format!(
                "python3 - <<'PY'\nimport importlib\nm=importlib.import_module('{component}')\nprint(getattr(m, '__version__', 'unknown'))\nPY"
            ),
        );
    }

    fn check_integer_major(&mut self, constraint: &VersionConstraint) {
        let component = constraint.component.as_str();
        let series = self.series;
        let required_major = constraint.version.split('.').next().unwrap_or("");
        let expected_major = self.matrix.expected_tensorrt_major(series.as_str());

        if !expected_major.is_empty() && required_major != expected_major {
            self.blocked_items.push(BlockedItem {
                component: component.into(),
                message: format!(
                    "TensorRT major {required_major} is incompatible with {series} expected major {expected_major}."
                ),
                required: Self::required_display(constraint),
                installed: format!("expected major {expected_major}"),
                evidence: Some(constraint.evidence.clone()),
            });
            self.alternatives
                .push(format!("Use TensorRT major {expected_major} for {series}."));
            self.actions.push(
                "Resolve TensorRT major mismatch.",
                format!("echo \"Use TensorRT major {expected_major} to match {series}.\""),
                true,
                RiskLevel::High,
                "No state changed by this placeholder action.",
                "echo \"Verify TensorRT major compatibility.\"",
            );
        } else {
            self.ready_items.push(ReadyItem {
                component: component.into(),
                required: Self::required_display(constraint),
                installed: format!("compatible major for {series}"),
            });
        }
    }

    /// Unknown is not unsafe, but it is also not verified.
    fn check_unrecognized(&mut self, constraint: &VersionConstraint) {
        let component = constraint.component.as_str();
        self.issues.push(Issue {
            component: component.into(),
            severity: Severity::Low,
            message: format!("Unknown component '{component}'. Manual review required."),
            required: Self::required_display(constraint),
            installed: UNKNOWN.into(),
            suggestion: None,
            evidence: Some(constraint.evidence.clone()),
        });
        self.alternatives.push(format!(
            "Manually map unknown component '{component}' to Jetson-compatible packages."
        ));
    }
}

/// Deduplicate while preserving first-seen order; empties are dropped.
fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}
