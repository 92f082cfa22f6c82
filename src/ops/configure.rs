//! Configure step: run Z3's build-system generator.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::layout::Layout;
use crate::core::platform::{host_pointer_width, Platform};
use crate::core::toolchain::{BuildEnv, Toolchain};
use crate::ops::ToolError;
use crate::util::process::ProcessBuilder;

/// Proof that configuration ran and produced a build directory.
///
/// [`compile`](crate::ops::compile) only accepts a `ConfiguredBuild`,
/// so the build directory handoff is explicit rather than an implicit
/// side effect of the configure script.
#[derive(Debug, Clone)]
pub struct ConfiguredBuild {
    build_dir: PathBuf,
}

impl ConfiguredBuild {
    pub(crate) fn new(build_dir: PathBuf) -> ConfiguredBuild {
        ConfiguredBuild { build_dir }
    }

    /// The build directory prepared by the configure script.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}

/// Run `mk_make.py` against the resolved source root.
///
/// The script inherits our environment plus the [`BuildEnv`] overrides
/// and writes generated build files into `<source root>/build`. A
/// nonzero exit is a hard failure; a zero exit that did not create the
/// build directory fails fast here instead of letting the build tool
/// discover it.
pub fn configure(
    layout: &Layout,
    platform: Platform,
    toolchain: &Toolchain,
    env: &BuildEnv,
) -> Result<ConfiguredBuild> {
    let script = layout.source_root().join("scripts").join("mk_make.py");

    let cmd = ProcessBuilder::new(&toolchain.python)
        .arg(&script)
        .args(platform.configure_args(host_pointer_width()))
        .cwd(layout.source_root());
    let cmd = env.apply(cmd);

    tracing::debug!("configuring: {}", cmd.display_command());

    let status = cmd.status()?;
    if !status.success() {
        return Err(ToolError::Configure.into());
    }

    let build_dir = layout.build_dir();
    if !build_dir.is_dir() {
        return Err(ToolError::MissingBuildDir(build_dir).into());
    }

    Ok(ConfiguredBuild::new(build_dir))
}
