use std::sync::LazyLock;

use crate::analysis::intensity::IntensityClass;
use crate::color::to_channel;
use crate::consts::{DEFAULT_HIGH_GAMMA, DEFAULT_LOW_GAMMA, LEVELS, MAX_LEVEL};

static STANDARD_CURVES: LazyLock<GammaCurves> =
    LazyLock::new(|| GammaCurves::new(DEFAULT_LOW_GAMMA, DEFAULT_HIGH_GAMMA));

/// Power-law response for every 8-bit level: `255 * (i / 255)^gamma`.
///
/// Entries are kept as reals so callers pick their own rounding; `lookup`
/// rounds to nearest and clamps.
#[derive(Clone, Debug, PartialEq)]
pub struct GammaTable {
    gamma: f64,
    entries: [f32; LEVELS],
}

impl GammaTable {
    pub fn build(gamma: f64) -> Self {
        let mut entries = [0.0f32; LEVELS];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = (MAX_LEVEL * (i as f64 / MAX_LEVEL).powf(gamma)) as f32;
        }
        Self { gamma, entries }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn entries(&self) -> &[f32; LEVELS] {
        &self.entries
    }

    /// Unrounded response for `level`.
    #[inline]
    pub fn get(&self, level: u8) -> f32 {
        self.entries[level as usize]
    }

    /// Response for `level`, rounded to the nearest channel value.
    #[inline]
    pub fn lookup(&self, level: u8) -> u8 {
        to_channel(self.entries[level as usize] as f64)
    }

    /// Rounded table, for per-pixel remapping without float work.
    pub fn to_u8_lut(&self) -> [u8; LEVELS] {
        let mut lut = [0u8; LEVELS];
        for (i, v) in lut.iter_mut().enumerate() {
            *v = self.lookup(i as u8);
        }
        lut
    }
}

/// The low/high gamma pair an image is enhanced with.
#[derive(Clone, Debug, PartialEq)]
pub struct GammaCurves {
    /// Brightens shadows; used for low-intensity images.
    pub low: GammaTable,
    /// Compresses highlights; used for high-intensity images.
    pub high: GammaTable,
}

impl GammaCurves {
    pub fn new(low_gamma: f64, high_gamma: f64) -> Self {
        Self {
            low: GammaTable::build(low_gamma),
            high: GammaTable::build(high_gamma),
        }
    }

    /// Process-wide 0.45 / 2.2 pair, built on first use.
    pub fn standard() -> &'static GammaCurves {
        &STANDARD_CURVES
    }

    pub fn select(&self, class: IntensityClass) -> &GammaTable {
        match class {
            IntensityClass::High => &self.high,
            IntensityClass::Low => &self.low,
        }
    }
}

impl Default for GammaCurves {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_built_once() {
        assert!(std::ptr::eq(GammaCurves::standard(), GammaCurves::standard()));
    }

    #[test]
    fn identity_gamma_is_identity() {
        let table = GammaTable::build(1.0);
        for level in 0..=255u8 {
            assert_eq!(table.lookup(level), level);
        }
    }
}
