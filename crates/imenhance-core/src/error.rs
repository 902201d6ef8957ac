use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl EnhanceError {
    /// True for errors caused by a zero-area or malformed pixel buffer.
    pub fn is_invalid_image(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::BufferSizeMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
