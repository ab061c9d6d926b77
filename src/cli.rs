use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "voxmorph", version, about = "Voxel shape meshing and morph animation")]
pub struct Cli {
    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mesh a single shape
    Mesh(MeshArgs),
    /// Mesh a morph sequence between two shapes
    Animate(AnimateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Override the cube size from the shape file(s)
    #[arg(long)]
    pub size: Option<usize>,

    /// Override the seed from the shape file(s)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads for extraction (defaults to rayon's global pool)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output JSON path (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Mesh grids as generated, without the viewer flip
    #[arg(long)]
    pub raw_orientation: bool,
}

#[derive(Args, Debug)]
pub struct MeshArgs {
    /// Shape description (TOML)
    #[arg(long)]
    pub shape: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct AnimateArgs {
    /// Shape at the first frame (TOML)
    #[arg(long)]
    pub from: PathBuf,

    /// Shape at the last frame (TOML)
    #[arg(long)]
    pub to: PathBuf,

    /// Number of frames
    #[arg(long, default_value_t = 10)]
    pub frames: usize,

    /// Display interval between frames in milliseconds
    #[arg(long)]
    pub interval_ms: Option<f32>,

    #[command(flatten)]
    pub common: CommonArgs,
}
