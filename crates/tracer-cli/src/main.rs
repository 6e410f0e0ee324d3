mod cli;
mod output;
mod progress;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, ExecutionMode};
use utils::{AvailableScene, Dimensions};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, default_value = "1024x768")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 90.0)]
    /// Vertical field of view, in degrees
    fov: f32,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "out.ppm")]
    /// Tone mapped output, the format is deduced from the extension
    output: PathBuf,

    #[arg(long)]
    /// Also save the raw colors as an OpenEXR file
    hdr_output: Option<PathBuf>,

    #[arg(short, long, default_value = "multithreaded")]
    /// "multithreaded", "monothreaded" or a single pixel to debug, eg "512x384"
    execution_mode: ExecutionMode,

    #[arg(long, default_value_t = 1000.0)]
    /// Objects further than this distance are not seen
    horizon: f32,

    #[arg(long, default_value_t = 1e-3)]
    /// Offset applied to shadow rays to avoid self-shadowing
    shadow_bias: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cli = Cli::from_args(args)?;
    cli.run()?;

    log::info!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use crate::{cli::ExecutionMode, utils::Dimensions, Args};

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["tracer-cli"]);
        assert_eq!(
            args.dimensions,
            Dimensions {
                width: 1024,
                height: 768
            }
        );
        assert_eq!(args.fov, 90.0);
        assert_eq!(args.execution_mode, ExecutionMode::Multithreaded);
        assert_eq!(args.output.to_str(), Some("out.ppm"));
        assert!(args.hdr_output.is_none());
    }

    #[test]
    fn pixel_mode() {
        let args = Args::parse_from(["tracer-cli", "-e", "10x20", "-d", "64x48", "--scene", "debug"]);
        assert_eq!(args.execution_mode, ExecutionMode::Pixel { x: 10, y: 20 });
        assert_eq!(args.dimensions.width, 64);
    }
}
