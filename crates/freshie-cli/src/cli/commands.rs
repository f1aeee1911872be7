use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Available freshie subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble bundle descriptors and write them to `<dest>/freshie.bundle.json`
    Build(BuildArgs),

    /// Print the assembled descriptors as JSON
    Inspect(InspectArgs),
}

/// Project flags shared by every command.
///
/// Unset flags fall through to `FRESHIE_*` environment variables and then
/// to the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Source directory, relative to the project root [default: src]
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Output directory, relative to the project root [default: build]
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Production mode
    #[arg(long)]
    pub prod: bool,

    /// Build the server bundle (default)
    #[arg(long, overrides_with = "no_ssr")]
    pub ssr: bool,

    /// Skip the server bundle
    #[arg(long, overrides_with = "ssr")]
    pub no_ssr: bool,

    /// Append the minifier to both pipelines
    #[arg(long)]
    pub minify: bool,
}

impl ProjectArgs {
    /// The SSR choice made on the command line, if any
    pub fn ssr_flag(&self) -> Option<bool> {
        if self.no_ssr {
            Some(false)
        } else if self.ssr {
            Some(true)
        } else {
            None
        }
    }
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Which part of the result to print
    #[arg(long, value_enum, default_value = "all")]
    pub target: InspectTarget,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectTarget {
    /// Options, client and server
    All,
    /// Merged options only
    Options,
    /// Client descriptor only
    Client,
    /// Server descriptor only (`null` when SSR is off)
    Server,
}
