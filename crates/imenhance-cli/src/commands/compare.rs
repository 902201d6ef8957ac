use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imenhance_core::compare::side_by_side;
use imenhance_core::consts::DEFAULT_COMPARE_GAP;
use imenhance_core::io::image_io::save_image;
use imenhance_core::EnhanceMode;

use super::session::{self, ModeArg, SourceArgs};

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Enhancement shown on the right
    #[arg(long, value_enum, default_value = "power-law")]
    pub mode: ModeArg,

    /// Gap between the two halves in pixels
    #[arg(long, default_value_t = DEFAULT_COMPARE_GAP)]
    pub gap: u32,

    /// Output file path
    #[arg(short, long, default_value = "compare.png")]
    pub output: PathBuf,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let (preview, mut pipeline, pb) = session::open(&args.source)?;
    let mode = EnhanceMode::from(args.mode);

    pb.suspend(|| crate::summary::print_image_summary(&args.source.file, &pipeline));

    let enhanced = pipeline.get_enhanced(mode)?;
    let combined = side_by_side(&preview, enhanced, args.gap);
    pb.finish_with_message(format!("{mode} done"));

    save_image(&combined, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!(
        "Saved {}x{} comparison to {}",
        combined.width(),
        combined.height(),
        args.output.display()
    );

    Ok(())
}
