/// obj2jgr - render a Wavefront OBJ mesh as a jgraph drawing
///
/// Usage: obj2jgr <x-rotation> <y-rotation> <zoom> < model.obj > model.jgr
use anyhow::Result;
use clap::Parser;
use std::io;

use jgr3d_cli::{init_logging, open_input, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let input = open_input(&cli)?;
    let stdout = io::stdout();
    run(&cli, input, stdout.lock())?;

    Ok(())
}
