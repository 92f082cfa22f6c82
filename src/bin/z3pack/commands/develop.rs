//! `z3pack develop` command
//!
//! Editable installs run the same configure/compile/stage sequence as a
//! regular build; the difference is only in what the downstream
//! packaging tool does with the staged tree afterwards.

use anyhow::Result;

use z3pack::util::shell::Shell;

use crate::cli::BuildArgs;
use crate::commands::build;

pub fn execute(args: BuildArgs, shell: &Shell) -> Result<()> {
    build::run_pipeline(&args.package_root, shell)
}
