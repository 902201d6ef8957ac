pub mod analysis;
pub mod color;
pub mod compare;
pub mod consts;
pub mod enhance;
pub mod error;
pub mod frame;
pub mod gamma;
pub mod io;
pub mod pipeline;

pub use enhance::{EnhanceMode, LumaOutput};
pub use error::{EnhanceError, Result};
pub use frame::PixelBuffer;
pub use pipeline::config::EnhanceConfig;
pub use pipeline::EnhancementPipeline;
