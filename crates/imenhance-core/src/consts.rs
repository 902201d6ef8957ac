/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Channels per pixel in a `PixelBuffer` (R, G, B, A).
pub const CHANNEL_COUNT: usize = 4;

/// Number of distinct 8-bit channel levels, and the size of a gamma table.
pub const LEVELS: usize = 256;

/// Largest 8-bit channel value as a float.
pub const MAX_LEVEL: f64 = 255.0;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Offset applied to the chroma channels so they fit in an unsigned byte.
pub const CHROMA_OFFSET: f64 = 128.0;

/// Gamma exponent for low-intensity images. Below 1.0, lifts shadows.
pub const DEFAULT_LOW_GAMMA: f64 = 0.45;

/// Gamma exponent for high-intensity images. Above 1.0, compresses highlights.
pub const DEFAULT_HIGH_GAMMA: f64 = 2.2;

/// Average luma above which an image counts as high intensity (midpoint of 0..=255).
pub const DEFAULT_INTENSITY_THRESHOLD: f64 = 127.5;

/// Scale factor the host applies to a decoded photo before enhancement.
pub const DEFAULT_PREVIEW_SCALE: f32 = 0.5;

/// Default horizontal gap (pixels) between the two halves of a comparison.
pub const DEFAULT_COMPARE_GAP: u32 = 8;

