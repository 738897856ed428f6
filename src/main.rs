use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use edubot_icons::icon_gen::{self, Options};

#[derive(Debug, Parser)]
#[clap(
    name = "edubot-icons",
    about = "Generate placeholder EduBot app icons for iOS and Android"
)]
struct Args {
    /// Output directory.
    #[clap(
        short,
        long,
        value_name = "DIR",
        default_value = "./assets/icons/generated"
    )]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Generate icons for the iOS platform only
    #[clap(long)]
    ios: bool,

    /// Generate icons for the Android platform only
    #[clap(long)]
    android: bool,

    /// The gradient color at the top of the icon (CSS color format)
    #[clap(long, default_value = "#4f46e5")]
    color_top: String,

    /// The gradient color at the bottom of the icon (CSS color format)
    #[clap(long, default_value = "#ec4899")]
    color_bottom: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&Options {
        output: args.output,
        png: args.png,
        ios: args.ios,
        android: args.android,
        color_top: args.color_top,
        color_bottom: args.color_bottom,
    })
}
