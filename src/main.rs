use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use overpass_icons::contents_json::ContentsFile;
use overpass_icons::export::{export_all, ExportSpec};

#[derive(Debug, Parser)]
#[clap(
    name = "overpass-icons",
    about = "Generate the OverPass app icon set at all required macOS sizes"
)]
struct Args {
    /// Output directory for the generated icon set.
    #[clap(
        short,
        long,
        value_name = "DIR",
        default_value = "OverPass/Assets.xcassets/AppIcon.appiconset"
    )]
    output: PathBuf,

    /// Also write a Contents.json manifest describing the generated files.
    #[clap(long)]
    contents_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let spec = ExportSpec::macos_app_icon();
    export_all(&spec, &args.output)?;

    if args.contents_json {
        ContentsFile::for_icon_set(&spec).write(&args.output)?;
        println!("✓ Generated Contents.json");
    } else {
        println!();
        println!("Next step: Update Contents.json to reference these files.");
    }

    Ok(())
}
