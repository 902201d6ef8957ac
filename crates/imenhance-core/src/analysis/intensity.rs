use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_INTENSITY_THRESHOLD;
use crate::frame::{PixelBuffer, RED};

/// Overall brightness class of an image. Decides which gamma curve is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityClass {
    High,
    Low,
}

impl std::fmt::Display for IntensityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Mean red-channel value of a grayscale buffer.
///
/// R == G == B after `to_grayscale`, so one channel is enough. A zero-area
/// buffer averages to 0.0.
pub fn average_intensity(grayscale: &PixelBuffer) -> f64 {
    let count = grayscale.pixel_count();
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = grayscale.pixels().map(|px| px[RED] as u64).sum();
    sum as f64 / count as f64
}

/// Classify against the 127.5 midpoint.
pub fn classify(grayscale: &PixelBuffer) -> IntensityClass {
    classify_with_threshold(grayscale, DEFAULT_INTENSITY_THRESHOLD)
}

/// High if the average strictly exceeds `threshold`, Low otherwise.
pub fn classify_with_threshold(grayscale: &PixelBuffer, threshold: f64) -> IntensityClass {
    class_for_average(average_intensity(grayscale), threshold)
}

pub fn class_for_average(average: f64, threshold: f64) -> IntensityClass {
    if average > threshold {
        IntensityClass::High
    } else {
        IntensityClass::Low
    }
}
