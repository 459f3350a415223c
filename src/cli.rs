//! CLI argument parsing for the help renderer.
//!
//! The CLI stays thin: it resolves inputs and hands the pure renderer a
//! metadata structure and a width, so the same core logic can be reused
//! elsewhere.
use crate::render::DEFAULT_WIDTH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "helpfmt",
    version,
    about = "Render terminal help text from declarative command metadata",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Render(RenderArgs),
    List(ListArgs),
}

/// Render command inputs.
#[derive(Parser, Debug)]
#[command(about = "Render help for one command from a manifest")]
pub struct RenderArgs {
    /// Command manifest (JSON)
    #[arg(long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Command id or alias to render
    #[arg(long, value_name = "ID")]
    pub command: String,

    /// Target column width; 0 falls back to the default
    #[arg(long, value_name = "COLS", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
}

/// List command inputs.
#[derive(Parser, Debug)]
#[command(about = "List manifest commands with their synopses")]
pub struct ListArgs {
    /// Command manifest (JSON)
    #[arg(long, value_name = "FILE")]
    pub manifest: PathBuf,
}
