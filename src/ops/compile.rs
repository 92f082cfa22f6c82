//! Compile step: run the platform build tool in the build directory.

use std::path::Path;

use anyhow::Result;

use crate::core::platform::{BuildTool, Platform};
use crate::core::toolchain::{BuildEnv, Toolchain};
use crate::ops::configure::ConfiguredBuild;
use crate::ops::ToolError;
use crate::util::process::ProcessBuilder;

/// Run the platform build tool in the configured build directory.
///
/// Windows uses `nmake` with no parallelism flag; everything else uses
/// `make -j <jobs>`. A nonzero exit is a hard failure for the pipeline.
pub fn compile(
    build: &ConfiguredBuild,
    platform: Platform,
    toolchain: &Toolchain,
    env: &BuildEnv,
) -> Result<()> {
    let build_dir = build.build_dir();

    // The directory was checked when ConfiguredBuild was produced, but
    // nothing stops an external process from removing it in between.
    if !build_dir.is_dir() {
        return Err(ToolError::MissingBuildDir(build_dir.to_path_buf()).into());
    }

    let cmd = env.apply(build_command(platform, toolchain, build_dir));

    tracing::debug!("compiling: {}", cmd.display_command());

    let status = cmd.status()?;
    if !status.success() {
        return Err(ToolError::Compile.into());
    }

    Ok(())
}

/// Construct the build-tool invocation for the platform.
fn build_command(platform: Platform, toolchain: &Toolchain, build_dir: &Path) -> ProcessBuilder {
    let cmd = match platform.build_tool() {
        BuildTool::Nmake => ProcessBuilder::new(&toolchain.nmake),
        BuildTool::Make { jobs } => ProcessBuilder::new(&toolchain.make)
            .arg("-j")
            .arg(jobs.to_string()),
    };
    cmd.cwd(build_dir)
}
