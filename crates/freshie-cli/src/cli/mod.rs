//! Command-line interface definition.
//!
//! - `freshie build` - assemble descriptors and write them under `dest`
//! - `freshie inspect` - print the assembled descriptors to stdout

mod commands;

use clap::Parser;

pub use commands::{BuildArgs, Command, InspectArgs, InspectTarget, ProjectArgs};

/// freshie - config assembly for client and SSR bundles
#[derive(Parser, Debug)]
#[command(
    name = "freshie",
    version,
    about = "Assemble client and SSR bundle configurations",
    long_about = "freshie merges presets and your project config, discovers routes and entry\n\
                  files, and produces the client and (optionally) server bundle descriptors."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
