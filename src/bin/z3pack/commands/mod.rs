//! Command implementations

pub mod bdist;
pub mod build;
pub mod clean;
pub mod completions;
pub mod develop;
pub mod sdist;
