use serde::{Deserialize, Serialize};

use crate::color::ycbcr::{rgb_to_ycbcr, ycbcr_to_rgb, YCbCr};
use crate::frame::{PixelBuffer, BLUE, GREEN, RED};
use crate::gamma::GammaTable;

/// Which enhancement to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnhanceMode {
    /// Gamma on the Y channel only, chroma untouched.
    LumaOnly,
    /// Gamma on each of R, G and B.
    FullRgb,
}

impl EnhanceMode {
    pub const ALL: [EnhanceMode; 2] = [EnhanceMode::LumaOnly, EnhanceMode::FullRgb];
}

impl std::fmt::Display for EnhanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LumaOnly => write!(f, "Luminance (Y)"),
            Self::FullRgb => write!(f, "Power Law (RGB)"),
        }
    }
}

/// How `LumaOnly` writes its result back into RGBA slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LumaOutput {
    /// Store Y', Cb, Cr directly in R, G, B. A false-colour view of the
    /// luma/chroma planes.
    #[default]
    ChromaPreview,
    /// Convert Y', Cb, Cr back to RGB.
    Rgb,
}

impl std::fmt::Display for LumaOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChromaPreview => write!(f, "Chroma preview"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// Dispatch to the transform for `mode`.
pub fn enhance(
    source: &PixelBuffer,
    mode: EnhanceMode,
    table: &GammaTable,
    luma_output: LumaOutput,
) -> PixelBuffer {
    match mode {
        EnhanceMode::LumaOnly => enhance_luma(source, table, luma_output),
        EnhanceMode::FullRgb => enhance_power_law(source, table),
    }
}

/// Remap the luma of every pixel through `table`, leaving Cb/Cr as computed.
///
/// Alpha passes through unchanged.
pub fn enhance_luma(source: &PixelBuffer, table: &GammaTable, output: LumaOutput) -> PixelBuffer {
    let lut = table.to_u8_lut();
    let mut out = source.clone();
    out.for_each_pixel_mut(|mut px| {
        let ycc = rgb_to_ycbcr(px[RED], px[GREEN], px[BLUE]);
        let mapped = YCbCr {
            y: lut[ycc.y as usize],
            ..ycc
        };
        let [r, g, b] = match output {
            LumaOutput::ChromaPreview => [mapped.y, mapped.cb, mapped.cr],
            LumaOutput::Rgb => ycbcr_to_rgb(mapped),
        };
        px[RED] = r;
        px[GREEN] = g;
        px[BLUE] = b;
    });
    out
}

/// Remap R, G and B independently through `table`. Alpha passes through.
pub fn enhance_power_law(source: &PixelBuffer, table: &GammaTable) -> PixelBuffer {
    let lut = table.to_u8_lut();
    let mut out = source.clone();
    out.for_each_pixel_mut(|mut px| {
        for ch in [RED, GREEN, BLUE] {
            px[ch] = lut[px[ch] as usize];
        }
    });
    out
}
