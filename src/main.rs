use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod command;
mod manifest;
mod render;

use cli::{Command, ListArgs, RenderArgs, RootArgs};
use manifest::Manifest;
use render::RenderConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Render(args) => cmd_render(args),
        Command::List(args) => cmd_list(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let spec = manifest
        .find(&args.command)
        .ok_or_else(|| anyhow!("unknown command: {}", args.command))?;
    let config = RenderConfig::new(args.width);
    println!("{}", render::render_command(spec, &manifest.bin, config));
    Ok(())
}

fn cmd_list(args: ListArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    for command in &manifest.commands {
        match command.synopsis() {
            Some(synopsis) => println!("{}  {}", command.id, synopsis),
            None => println!("{}", command.id),
        }
    }
    Ok(())
}
