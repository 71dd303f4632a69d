//! CLI entry point for the `emojicon` icon generator.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use emojicon::{Error, GeneratorConfig, IconGenerator, IconRecipe, Result};

#[derive(Parser)]
#[command(version, about = "Generate an application icon set from a single emoji")]
struct Args {
    /// Emoji character to render (e.g. "😀")
    emoji: Option<String>,

    /// Starting gradient color as a hex triplet or shorthand
    #[arg(long, default_value = "#000000")]
    start: String,

    /// Finishing gradient color as a hex triplet or shorthand
    #[arg(long, default_value = "#000000")]
    finish: String,

    /// Output directory; must exist and be writable
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// JSON recipe file (alternative to the positional arguments)
    #[arg(long, conflicts_with = "emoji")]
    recipe: Option<PathBuf>,

    /// Override the glyph source URI template ({emoji} placeholder)
    #[arg(long)]
    uri_template: Option<String>,
}

fn run(args: Args) -> Result<Vec<PathBuf>> {
    let mut config = GeneratorConfig::default();
    if let Some(template) = args.uri_template {
        config.asset_uri_template = template;
    }

    let mut generator = IconGenerator::new(config);

    if let Some(path) = &args.recipe {
        let json = fs::read_to_string(path).map_err(|e| {
            Error::Validation(format!("cannot read recipe \"{}\": {e}", path.display()))
        })?;
        let recipe = IconRecipe::from_json(&json).map_err(|e| {
            Error::Validation(format!("cannot parse recipe \"{}\": {e}", path.display()))
        })?;
        generator.apply_recipe(&recipe)?;
    } else {
        if let Some(emoji) = args.emoji {
            generator.set_emoji(emoji);
        }
        generator.set_gradient(&args.start, &args.finish)?;
    }

    generator.set_output_dir(&args.output);
    let written = generator.generate()?;
    info!("output directory: {}", args.output.display());
    Ok(written)
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(written) => println!("wrote {} icons", written.len()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
