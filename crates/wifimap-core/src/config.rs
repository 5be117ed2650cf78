use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::heatmap::HeatmapParams;
use crate::render::DisplayConfig;
use crate::scan::ScannerConfig;

/// Top-level tool configuration, stored as TOML.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WifiMapConfig {
    #[serde(default)]
    pub heatmap: HeatmapParams,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub networks: NetworkConfig,
}

impl WifiMapConfig {
    /// Load a config file. Missing sections and fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// When a scan batch turns into observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapturePolicy {
    /// Every completed scan is recorded at the current scan location.
    #[default]
    OnScan,
    /// The most recent scan is recorded when a new location is clicked.
    OnClick,
}

impl fmt::Display for CapturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnScan => write!(f, "On Scan"),
            Self::OnClick => write!(f, "On Click"),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub policy: CapturePolicy,
}

/// How a network label's member addresses evolve across scan batches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberPolicy {
    /// Members are fixed at the batch where the label first appeared.
    #[default]
    FirstSeen,
    /// Addresses from later batches are added to existing labels.
    Accumulate,
}

impl fmt::Display for MemberPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstSeen => write!(f, "First Seen"),
            Self::Accumulate => write!(f, "Accumulate"),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub member_policy: MemberPolicy,
}
