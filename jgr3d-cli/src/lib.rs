/// Command-line front end: OBJ on stdin, jgraph on stdout
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};

use jgr3d_core::obj::parse_obj;
use jgr3d_core::{JgraphWriter, Pipeline, PipelineConfig, ProjectionParams, RenderStats};

#[derive(Parser, Debug)]
#[command(name = "obj2jgr")]
#[command(about = "Render an OBJ mesh as a jgraph drawing", long_about = None)]
#[command(version, allow_negative_numbers = true)]
pub struct Cli {
    /// Rotation about the X axis in degrees
    pub x_rotation: f32,

    /// Rotation about the Y axis in degrees
    pub y_rotation: f32,

    /// Distance the model is pushed away from the camera. Increase it until
    /// the whole model is visible.
    pub zoom: f32,

    /// Read the mesh from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Near clip plane distance
    #[arg(long, default_value_t = 0.1)]
    pub near: f32,

    /// Far clip plane distance
    #[arg(long, default_value_t = 1000.0)]
    pub far: f32,

    /// Log render statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            projection: ProjectionParams {
                fov_deg: self.fov,
                near: self.near,
                far: self.far,
                ..ProjectionParams::default()
            },
            ..PipelineConfig::new(self.x_rotation, self.y_rotation, self.zoom)
        }
    }

    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

/// Install the stderr subscriber; stdout is reserved for the drawing
pub fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Open the configured input, falling back to stdin
pub fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Load the mesh from `input`, render it and write jgraph to `output`
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> Result<RenderStats> {
    let pipeline =
        Pipeline::new(&cli.pipeline_config()).context("invalid rendering parameters")?;

    let mesh = parse_obj(input).context("failed to load mesh")?;
    if mesh.is_empty() {
        warn!("mesh has no faces, only the background will be drawn");
    }
    info!(triangles = mesh.len(), "rendering");

    let mut writer = JgraphWriter::new(output);
    let stats = pipeline
        .render(&mesh, &mut writer)
        .context("failed to write jgraph output")?;
    Ok(stats)
}
