use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imenhance_core::io::image_io::save_image;
use imenhance_core::EnhanceMode;

use super::session::{self, ModeArg, SourceArgs};

#[derive(Args)]
pub struct EnhanceArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Enhancement to apply
    #[arg(long, value_enum, default_value = "power-law")]
    pub mode: ModeArg,

    /// Output file path
    #[arg(short, long, default_value = "enhanced.png")]
    pub output: PathBuf,
}

pub fn run(args: &EnhanceArgs) -> Result<()> {
    let (_, mut pipeline, pb) = session::open(&args.source)?;
    let mode = EnhanceMode::from(args.mode);

    pb.suspend(|| crate::summary::print_image_summary(&args.source.file, &pipeline));

    let enhanced = pipeline.get_enhanced(mode)?;
    pb.finish_with_message(format!("{mode} done"));

    save_image(enhanced, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
