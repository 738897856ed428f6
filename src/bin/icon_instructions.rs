use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use edubot_icons::instructions;

#[derive(Debug, Parser)]
#[clap(
    name = "icon-instructions",
    about = "Write the manual icon creation guide for the EduBot app"
)]
struct Args {
    /// Directory the guide is written into.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;
    let path = instructions::write_instructions(&args.output)?;

    println!("✓ Created {}", path.display());
    println!("Follow the instructions to create the app icons by hand,");
    println!("or run edubot-icons to generate placeholder versions.");

    Ok(())
}
