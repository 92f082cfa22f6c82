//! `z3pack build` command

use std::path::Path;

use anyhow::Result;

use z3pack::core::{BuildEnv, Layout, Platform, Toolchain};
use z3pack::ops;
use z3pack::util::shell::{Shell, Status};

use crate::cli::BuildArgs;

pub fn execute(args: BuildArgs, shell: &Shell) -> Result<()> {
    run_pipeline(&args.package_root, shell)
}

/// Configure, compile, and stage. Shared by build, develop, and bdist;
/// the first failing step aborts the whole sequence.
pub fn run_pipeline(package_root: &Path, shell: &Shell) -> Result<()> {
    let layout = Layout::discover(package_root);
    let platform = Platform::current();
    let toolchain = Toolchain::from_env();
    let env = BuildEnv::new(&toolchain);

    tracing::debug!(
        "building from {} ({:?})",
        layout.source_root().display(),
        layout.source_kind()
    );

    shell.status(Status::Configuring, "Z3");
    let configured = ops::configure(&layout, platform, &toolchain, &env)?;

    shell.status(Status::Building, "Z3");
    ops::compile(&configured, platform, &toolchain, &env)?;

    shell.status(Status::Copying, "binaries");
    ops::stage_artifacts(&layout, &configured, platform)?;

    shell.status(
        Status::Finished,
        format!("artifacts staged in {}", layout.root().display()),
    );

    Ok(())
}
