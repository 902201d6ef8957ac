use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use imenhance_core::consts::DEFAULT_PREVIEW_SCALE;
use imenhance_core::io::image_io::load_image;
use imenhance_core::io::scale::rescale;
use imenhance_core::pipeline::{PipelineStage, ProgressReporter};
use imenhance_core::{EnhanceConfig, EnhanceMode, EnhancementPipeline, LumaOutput, PixelBuffer};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Gamma on luminance (Y) only
    Luma,
    /// Gamma on every RGB channel
    PowerLaw,
}

impl From<ModeArg> for EnhanceMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Luma => EnhanceMode::LumaOnly,
            ModeArg::PowerLaw => EnhanceMode::FullRgb,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LumaOutputArg {
    ChromaPreview,
    Rgb,
}

impl From<LumaOutputArg> for LumaOutput {
    fn from(arg: LumaOutputArg) -> Self {
        match arg {
            LumaOutputArg::ChromaPreview => LumaOutput::ChromaPreview,
            LumaOutputArg::Rgb => LumaOutput::Rgb,
        }
    }
}

/// Options shared by every command that loads an image.
#[derive(Args)]
pub struct SourceArgs {
    /// Input image file (PNG, JPEG, ...)
    pub file: PathBuf,

    /// Scale factor applied before enhancement
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub scale: f32,

    /// Enhancement config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How luminance-only results are written (overrides config)
    #[arg(long, value_enum)]
    pub luma_output: Option<LumaOutputArg>,
}

/// Spinner driven by pipeline stage changes.
struct SpinnerReporter {
    pb: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.pb.set_message(stage.to_string());
    }
}

pub fn load_config(path: Option<&Path>) -> Result<EnhanceConfig> {
    let Some(path) = path else {
        return Ok(EnhanceConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid enhancement config")
}

/// Decode and pre-shrink the input, then load it into a fresh pipeline.
pub fn open(args: &SourceArgs) -> Result<(PixelBuffer, EnhancementPipeline, ProgressBar)> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(output) = args.luma_output {
        config.luma_output = output.into();
    }

    let original = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let preview = rescale(&original, args.scale).context("Failed to rescale image")?;
    println!(
        "Loaded {}x{} image, working at {}x{}",
        original.width(),
        original.height(),
        preview.width(),
        preview.height()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut pipeline = EnhancementPipeline::with_config(config)?
        .with_reporter(Arc::new(SpinnerReporter { pb: pb.clone() }));
    pipeline
        .load_image(preview.clone())
        .with_context(|| format!("Cannot enhance {}", args.file.display()))?;

    Ok((preview, pipeline, pb))
}
