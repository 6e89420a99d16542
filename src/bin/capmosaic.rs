use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use capmosaic::{DEFAULT_CAP_RADIUS, OutputMode, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "capmosaic", version, about = "Render images as bottlecap mosaics")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the image as a mosaic of circular caps on a transparent canvas.
    Mosaic(ModeArgs),
    /// Render the image as a blocky pixelated version of itself.
    Blocks(ModeArgs),
}

#[derive(Parser, Debug)]
struct ModeArgs {
    /// Image to be tiled.
    #[arg(short = 'i', long = "img")]
    img: PathBuf,

    /// Resolution of the resulting mosaic X-axis.
    #[arg(long = "res-x", default_value_t = 100)]
    res_x: u32,

    /// Resolution of the resulting mosaic Y-axis (0 derives it from the
    /// source aspect ratio).
    #[arg(long = "res-y", default_value_t = 0)]
    res_y: u32,

    /// Output PNG path.
    #[arg(short = 'o', long, default_value = "./output.png")]
    out: PathBuf,

    /// Radius of one cap in output pixels (mosaic mode only).
    #[arg(long = "cap-radius", default_value_t = DEFAULT_CAP_RADIUS)]
    cap_radius: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Mosaic(args) => run_mode(args, OutputMode::Mosaic),
        Command::Blocks(args) => run_mode(args, OutputMode::Blocks),
    }
}

fn run_mode(args: ModeArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = RenderConfig {
        res_x: args.res_x,
        res_y: args.res_y,
        cap_radius: args.cap_radius,
        mode,
    };

    capmosaic::run(&args.img, &args.out, &config)
        .with_context(|| format!("render '{}'", args.img.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
