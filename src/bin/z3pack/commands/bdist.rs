//! `z3pack bdist` command
//!
//! A binary distribution delegates entirely to the build pipeline; the
//! staged tree is what the downstream packaging tool bundles.

use anyhow::Result;

use z3pack::util::shell::Shell;

use crate::cli::BuildArgs;
use crate::commands::build;

pub fn execute(args: BuildArgs, shell: &Shell) -> Result<()> {
    build::run_pipeline(&args.package_root, shell)
}
