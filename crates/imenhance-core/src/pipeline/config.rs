use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HIGH_GAMMA, DEFAULT_INTENSITY_THRESHOLD, DEFAULT_LOW_GAMMA, MAX_LEVEL};
use crate::enhance::LumaOutput;
use crate::error::{EnhanceError, Result};

/// Tunables for an `EnhancementPipeline`. Every field falls back to its
/// default when missing from a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Gamma exponent applied to low-intensity images.
    pub low_gamma: f64,
    /// Gamma exponent applied to high-intensity images.
    pub high_gamma: f64,
    /// Average luma above which an image is high intensity.
    pub intensity_threshold: f64,
    pub luma_output: LumaOutput,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            low_gamma: DEFAULT_LOW_GAMMA,
            high_gamma: DEFAULT_HIGH_GAMMA,
            intensity_threshold: DEFAULT_INTENSITY_THRESHOLD,
            luma_output: LumaOutput::default(),
        }
    }
}

impl EnhanceConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, gamma) in [("low_gamma", self.low_gamma), ("high_gamma", self.high_gamma)] {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(EnhanceError::InvalidConfig(format!(
                    "{name} must be a positive number, got {gamma}"
                )));
            }
        }
        if !(0.0..=MAX_LEVEL).contains(&self.intensity_threshold) {
            return Err(EnhanceError::InvalidConfig(format!(
                "intensity_threshold must be within 0..=255, got {}",
                self.intensity_threshold
            )));
        }
        Ok(())
    }

    /// True when the gammas match the process-wide standard curves.
    pub(crate) fn uses_standard_curves(&self) -> bool {
        self.low_gamma == DEFAULT_LOW_GAMMA && self.high_gamma == DEFAULT_HIGH_GAMMA
    }
}
