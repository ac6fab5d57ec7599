//! Integration tests for the jetcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

fn jp6_facts(dir: &Path) -> PathBuf {
    write_json(
        dir,
        "facts.json",
        serde_json::json!({
            "device": {"model": "NVIDIA Jetson Orin Nano Developer Kit"},
            "jetpack": {"series": "6.x", "installed_version": "6.0"},
            "l4t": {"release": "R36.3.0"},
            "os": {"pretty_name": "Ubuntu 22.04.4 LTS"},
            "cuda": {"version": "12.2"},
            "python": {"version": "3.10.12"},
            "tensorrt": {"version": "10.0.1"}
        }),
    )
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Jetson tutorial compatibility analysis",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_analyze_writes_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let facts = jp6_facts(temp.path());
    let requirements = write_json(
        temp.path(),
        "requirements.json",
        serde_json::json!({
            "version_constraints": [
                {"component": "python", "operator": ">=", "version": "3.8", "evidence": "Python 3.8+"}
            ]
        }),
    );
    let output = temp.path().join("analysis.json");

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["analyze", "--facts"])
        .arg(&facts)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overall status: ready"));

    let raw = fs::read_to_string(&output)?;
    assert!(raw.ends_with('\n'));
    let report: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(report["overall_status"], "ready");
    assert_eq!(report["facts_series"], "6.x");
    Ok(())
}

#[test]
fn cli_analyze_missing_facts_fails_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let requirements = write_json(temp.path(), "requirements.json", serde_json::json!({}));
    let output = temp.path().join("analysis.json");

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["analyze", "--facts"])
        .arg(temp.path().join("absent.json"))
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg(&output);
    let assert = cmd
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input not found"));

    // single diagnostic line, no partial output document
    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert_eq!(stderr.trim_end().lines().count(), 1);
    assert!(!output.exists());
    Ok(())
}

#[test]
fn cli_analyze_malformed_requirements_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let facts = jp6_facts(temp.path());
    let requirements = temp.path().join("requirements.json");
    fs::write(&requirements, "not json")?;

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["analyze", "--facts"])
        .arg(&facts)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg(temp.path().join("analysis.json"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn cli_analyze_reports_blockers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let facts = jp6_facts(temp.path());
    let requirements = write_json(
        temp.path(),
        "requirements.json",
        serde_json::json!({
            "version_constraints": [
                {"component": "jetpack", "operator": "==", "version": "5.1", "evidence": "JetPack 5.1"}
            ]
        }),
    );

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["analyze", "--facts"])
        .arg(&facts)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg(temp.path().join("analysis.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overall status: blocked"));
    Ok(())
}

#[test]
fn cli_extract_writes_requirements() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let source = temp.path().join("tutorial.md");
    fs::write(
        &source,
        "# Object detection on Jetson Orin Nano\n\n\
         Requires JetPack 6.0 with CUDA >= 12.2.\n\
         Install PyTorch 2.2 via pip.\n",
    )?;
    let output = temp.path().join("requirements.json");

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["extract", "--source"])
        .arg(&source)
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("constraints (confidence"));

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    let constraints = doc["version_constraints"].as_array().unwrap();
    assert_eq!(constraints.len(), 3);
    assert!(doc["confidence"].as_f64().unwrap() > 0.2);
    Ok(())
}

#[test]
fn cli_extract_rejects_url_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = temp.path().join("requirements.json");

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["extract", "--source", "https://example.com/tutorial"])
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported tutorial source"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn cli_plan_gates_sudo_steps() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let facts = jp6_facts(temp.path());
    // cuda >= 99 is beyond any series range and produces a sudo action
    let requirements = write_json(
        temp.path(),
        "requirements.json",
        serde_json::json!({
            "version_constraints": [
                {"component": "cuda", "operator": ">=", "version": "99.0", "evidence": "CUDA >= 99"}
            ]
        }),
    );
    let analysis = temp.path().join("analysis.json");
    Command::new(cargo_bin("jetcheck"))
        .args(["analyze", "--facts"])
        .arg(&facts)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg(&analysis)
        .assert()
        .success();

    let plan_path = temp.path().join("plan.json");
    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["plan", "--analysis"])
        .arg(&analysis)
        .args(["--allow-sudo", "no", "--mode", "plan", "--output"])
        .arg(&plan_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("steps written to"));

    let plan: serde_json::Value = serde_json::from_str(&fs::read_to_string(&plan_path)?)?;
    assert_eq!(plan["allow_sudo"], "no");
    assert_eq!(plan["manual_prerequisites"].as_array().unwrap().len(), 1);
    let steps = plan["steps"].as_array().unwrap();
    assert_eq!(steps[0]["id"], "step-001");
    for step in steps {
        assert_eq!(step["requires_sudo"], false);
    }
    Ok(())
}

#[test]
fn cli_plan_guided_mode_flags_approval() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let analysis = write_json(
        temp.path(),
        "analysis.json",
        serde_json::json!({
            "overall_status": "needs-adjustments",
            "facts_series": "6.x",
            "issues": [],
            "alternatives": [],
            "blocked_items": [],
            "ready_items": [],
            "recommended_actions": [{
                "id": "action-001",
                "summary": "Pin pytorch to a 6.x compatible version.",
                "command": "python3 -m pip install pytorch==2.3",
                "requires_sudo": false,
                "risk_level": "medium",
                "rollback_hint": "Reinstall previous pytorch version if regression is observed.",
                "verify_command": "python3 --version"
            }]
        }),
    );
    let plan_path = temp.path().join("plan.json");

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["plan", "--analysis"])
        .arg(&analysis)
        .args(["--allow-sudo", "yes", "--mode", "guided", "--output"])
        .arg(&plan_path);
    cmd.assert().success();

    let plan: serde_json::Value = serde_json::from_str(&fs::read_to_string(&plan_path)?)?;
    assert_eq!(plan["mode"], "guided");
    let steps = plan["steps"].as_array().unwrap();
    let pin_step = steps
        .iter()
        .find(|s| s["command"].as_str().unwrap().contains("pip install"))
        .unwrap();
    assert_eq!(pin_step["approval_required"], true);
    Ok(())
}

#[test]
fn cli_completions_emit_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("jetcheck"));
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let facts = jp6_facts(temp.path());
    let requirements = write_json(temp.path(), "requirements.json", serde_json::json!({}));

    let mut cmd = Command::new(cargo_bin("jetcheck"));
    cmd.args(["--debug", "analyze", "--facts"])
        .arg(&facts)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg(temp.path().join("analysis.json"));
    cmd.assert().success();
    Ok(())
}
