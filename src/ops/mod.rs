//! Pipeline operations: configure, compile, stage, vendor.

pub mod compile;
pub mod configure;
pub mod stage;
pub mod vendor;

pub use compile::compile;
pub use configure::{configure, ConfiguredBuild};
pub use stage::{clean_staging, stage_artifacts};
pub use vendor::vendor_sources;

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the external Z3 build toolchain.
///
/// Nonzero exits from the configure script and the build tool map to
/// the two fixed-message variants; filesystem failures during staging
/// are deliberately not converted and propagate with path context
/// instead.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unable to configure Z3")]
    Configure,

    #[error("unable to build Z3")]
    Compile,

    #[error("configure did not create the build directory at {}", .0.display())]
    MissingBuildDir(PathBuf),
}
