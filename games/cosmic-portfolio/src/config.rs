use cosmic_engine::{InputConfig, MotionProfile, RigConfig};
use serde::{Deserialize, Serialize};

/// Runtime-tunable settings. Missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub motion: MotionProfile,
    pub rig: RigConfig,
    pub input: InputConfig,
}

impl PortfolioConfig {
    /// Parse a config override from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
