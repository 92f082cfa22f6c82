//! Core types: source layout, platform policy, artifact set, toolchain.

pub mod artifacts;
pub mod layout;
pub mod platform;
pub mod toolchain;

pub use artifacts::ArtifactSet;
pub use layout::{Layout, SourceKind};
pub use platform::{BuildTool, Platform};
pub use toolchain::{BuildEnv, Toolchain};
