//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use z3pack::util::shell::ColorChoice;

/// z3pack - Build and package the Z3 theorem prover
#[derive(Parser)]
#[command(name = "z3pack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress step labels, print errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output: auto, always, or never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure and compile Z3, then stage the artifacts
    Build(BuildArgs),

    /// Build and stage for an editable (in-place) install
    Develop(BuildArgs),

    /// Produce the staged tree for a binary distribution
    Bdist(BuildArgs),

    /// Assemble the vendored source bundle for a source distribution
    Sdist(SdistArgs),

    /// Remove the staged libraries, binaries, and headers
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Package root directory
    #[arg(long, default_value = ".")]
    pub package_root: PathBuf,
}

#[derive(Args)]
pub struct SdistArgs {
    /// Package root directory
    #[arg(long, default_value = ".")]
    pub package_root: PathBuf,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Package root directory
    #[arg(long, default_value = ".")]
    pub package_root: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
