//! z3pack - Build and package the Z3 theorem prover
//!
//! This crate provides the core library functionality for z3pack:
//! resolving the native source tree, driving the external Z3 build
//! toolchain, and staging the resulting artifacts into a distributable
//! package tree.

pub mod core;
pub mod ops;
pub mod util;

pub use core::{
    artifacts::ArtifactSet,
    layout::{Layout, SourceKind},
    platform::{BuildTool, Platform},
    toolchain::{BuildEnv, Toolchain},
};

pub use ops::ToolError;
pub use util::shell::Shell;
