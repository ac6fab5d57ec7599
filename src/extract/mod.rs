//! Requirement extraction from tutorial text.
//!
//! The extractor turns a local plain-text or markdown tutorial into the
//! normalized requirements document the engine consumes. It works on
//! whole lines: keyword scans collect hardware/software requirement
//! lines, and a single constraint pattern pulls structured version
//! assertions out of the prose. Remote URLs and HTML sources are out of
//! scope; those must be saved as plain text first.

use crate::error::{JetcheckError, Result};
use crate::model::{canonical_component, TutorialRequirements, VersionConstraint};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const HARDWARE_KEYWORDS: &[&str] = &[
    "jetson", "camera", "usb", "csi", "ram", "memory", "disk", "storage", "gpu",
];

const SOFTWARE_KEYWORDS: &[&str] = &[
    "jetpack", "l4t", "cuda", "python", "pytorch", "tensorrt", "onnx", "ubuntu",
];

/// Component name, optional operator, optional "version"/"v" noise word,
/// then a dotted version or `N.x`.
static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(jetpack|l4t|cuda|python|ubuntu|pytorch|tensorrt|onnx\s*runtime|onnxruntime)\b(?:\s*(>=|<=|==|~=|>|<))?(?:\s*(?:version|v)?)?\s*([0-9]+(?:\.[0-9]+){0,2}|[0-9]+\.x)",
    )
    .unwrap()
});

/// Read a tutorial source, rejecting anything that is not a local
/// plain-text file.
pub fn load_source(source_ref: &str) -> Result<String> {
    let trimmed = source_ref.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Err(JetcheckError::UnsupportedSource {
            source_ref: trimmed.to_string(),
        });
    }

    let path = Path::new(trimmed);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension == "html" || extension == "htm" {
        return Err(JetcheckError::UnsupportedSource {
            source_ref: trimmed.to_string(),
        });
    }

    if !path.exists() {
        return Err(JetcheckError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Extract requirements from tutorial text.
pub fn extract_from_text(text: &str, source_ref: &str) -> TutorialRequirements {
    let lines = normalize_lines(text);
    let hardware = matching_lines(&lines, HARDWARE_KEYWORDS);
    let software = matching_lines(&lines, SOFTWARE_KEYWORDS);
    let constraints = extract_constraints(&lines);

    let mut notes = Vec::new();
    if constraints.is_empty() {
        notes.push("No explicit version constraints were found.".to_string());
    }
    if hardware.is_empty() {
        notes.push("No explicit hardware requirements were found.".to_string());
    }
    if software.is_empty() {
        notes.push("No explicit software requirements were found.".to_string());
    }

    let confidence = compute_confidence(hardware.len(), software.len(), constraints.len());
    if confidence < 0.50 {
        notes.push("Low confidence extraction. Request user confirmation before execution.".to_string());
    }
    tracing::debug!(
        constraints = constraints.len(),
        confidence,
        "extracted tutorial requirements"
    );

    TutorialRequirements {
        source_url: Some(source_ref.to_string()),
        hardware_requirements: hardware,
        software_requirements: software,
        version_constraints: constraints,
        notes,
        confidence: Some(confidence),
    }
}

/// Collapse runs of whitespace and drop blank lines.
fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Lines containing any of the keywords, first-seen order, deduplicated.
fn matching_lines(lines: &[String], keywords: &[&str]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut items = Vec::new();
    for line in lines {
        let lowered = line.to_lowercase();
        if keywords.iter().any(|k| lowered.contains(k)) && seen.insert(line.clone()) {
            items.push(line.clone());
        }
    }
    items
}

/// All structured constraints in the text, deduplicated and sorted into
/// canonical order.
fn extract_constraints(lines: &[String]) -> Vec<VersionConstraint> {
    let mut seen = BTreeSet::new();
    let mut constraints = Vec::new();
    for line in lines {
        for caps in CONSTRAINT_RE.captures_iter(line) {
            let component = canonical_component(&caps[1]);
            let operator = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| "==".to_string());
            let version = caps[3].to_string();
            let key = (component.clone(), operator.clone(), version.clone(), line.clone());
            if !seen.insert(key) {
                continue;
            }
            constraints.push(VersionConstraint {
                component,
                operator,
                version,
                evidence: line.clone(),
            });
        }
    }
    constraints.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    constraints
}

/// Confidence score in `[0.20, 0.99]`: each constraint adds 0.10 (up to
/// six), each hardware or software line 0.05 (up to four each).
fn compute_confidence(hardware: usize, software: usize, constraints: usize) -> f64 {
    let score = 0.20
        + constraints.min(6) as f64 * 0.10
        + hardware.min(4) as f64 * 0.05
        + software.min(4) as f64 * 0.05;
    (score.min(0.99) * 100.0).round() / 100.0
}
