use anyhow::Result;
use clap::Args;

use super::session::{self, SourceArgs};

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let (_, pipeline, pb) = session::open(&args.source)?;
    pb.finish_and_clear();

    crate::summary::print_image_summary(&args.source.file, &pipeline);
    Ok(())
}
