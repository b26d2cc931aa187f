mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;

use cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Any failure here ends the run before a window is opened.
    let dataset = data::loader::load_file(&args.path)
        .with_context(|| format!("cannot plot {}", args.path.display()))?;

    ui::render(dataset, &args.window_title())
}
