//! Installed-system facts.
//!
//! The facts document describes what is actually installed on the target
//! Jetson device. It is collected by an external fact-gathering step and
//! read-only throughout resolution. Missing subtrees deserialize to empty
//! defaults; the resolver maps absent values to the literal `"unknown"`
//! rather than failing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Placeholder for any value the fact collector could not determine.
pub const UNKNOWN: &str = "unknown";

/// Ubuntu releases are versioned `NN.NN` inside the os pretty name.
static UBUNTU_RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}\.\d{2})\b").unwrap());

/// Everything known about the target device's installed stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Facts {
    pub device: DeviceFacts,
    pub jetpack: JetpackFacts,
    pub l4t: L4tFacts,
    pub os: OsFacts,
    pub cuda: VersionFact,
    pub python: VersionFact,
    pub tensorrt: VersionFact,
}

/// Device identity facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceFacts {
    pub model: Option<String>,
}

/// JetPack facts: the explicit series override plus the installed version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JetpackFacts {
    pub series: Option<String>,
    pub installed_version: Option<String>,
}

/// L4T (Linux for Tegra) release facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct L4tFacts {
    pub release: Option<String>,
}

/// Operating system facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OsFacts {
    pub pretty_name: Option<String>,
}

/// A single installed component version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionFact {
    pub version: Option<String>,
}

impl Facts {
    /// The device model, or `"unknown"` when the collector found none.
    pub fn model(&self) -> &str {
        self.device.model.as_deref().unwrap_or(UNKNOWN)
    }

    /// The explicit JetPack series field, empty when absent.
    pub fn jetpack_series_field(&self) -> &str {
        self.jetpack.series.as_deref().unwrap_or("")
    }

    /// The installed JetPack version string, empty when absent.
    pub fn jetpack_version(&self) -> &str {
        self.jetpack.installed_version.as_deref().unwrap_or("")
    }

    /// The L4T release identifier, or `"unknown"` when absent.
    pub fn l4t_release(&self) -> &str {
        self.l4t.release.as_deref().unwrap_or(UNKNOWN)
    }

    /// Ubuntu release extracted from the os pretty name (`NN.NN`),
    /// or `"unknown"` when no release pattern is present.
    pub fn ubuntu_release(&self) -> String {
        let pretty = self.os.pretty_name.as_deref().unwrap_or("");
        UBUNTU_RELEASE_RE
            .captures(pretty)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Resolve the installed version for a canonical component name.
    ///
    /// Dispatches on the closed set of known component names; anything
    /// else, and any missing fact field, resolves to `"unknown"`.
    pub fn installed_version(&self, component: &str) -> String {
        let value = match component {
            "jetpack" => self.jetpack.installed_version.clone(),
            "cuda" => self.cuda.version.clone(),
            "python" => self.python.version.clone(),
            "ubuntu" => return self.ubuntu_release(),
            "tensorrt" => self.tensorrt.version.clone(),
            _ => None,
        };
        value.unwrap_or_else(|| UNKNOWN.to_string())
    }
}
