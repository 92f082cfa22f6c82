//! Artifact staging: collect build outputs into the package tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::artifacts::{ArtifactSet, GENERATED_BINDINGS};
use crate::core::layout::{Layout, SourceKind};
use crate::core::platform::Platform;
use crate::ops::configure::ConfiguredBuild;
use crate::util::fs::{copy_file, ensure_dir, remove_dir_all_if_exists};

/// Remove the staging directories, ignoring missing ones.
///
/// Returns the directories that actually existed and were removed.
pub fn clean_staging(layout: &Layout) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for dir in [layout.libs_dir(), layout.bins_dir(), layout.headers_dir()] {
        if dir.exists() {
            remove_dir_all_if_exists(&dir)?;
            removed.push(dir);
        }
    }

    Ok(removed)
}

/// Copy the compiled artifacts into the package staging directories.
///
/// Each staging directory is assembled in a fresh temporary directory
/// next to its destination and swapped into place afterwards, so a
/// mid-copy failure never leaves a half-populated directory where a
/// working one used to be. Stale content from earlier runs never
/// survives the swap.
///
/// In a local-source build the two generated binding modules are
/// additionally copied into the package's binding directory; a
/// repository build already has them in place.
pub fn stage_artifacts(
    layout: &Layout,
    build: &ConfiguredBuild,
    platform: Platform,
) -> Result<()> {
    let set = ArtifactSet::for_platform(platform);

    if layout.source_kind() == SourceKind::Local {
        let generated = layout
            .source_root()
            .join("src")
            .join("api")
            .join("python")
            .join("z3");
        let bindings_dir = layout.bindings_dir();
        ensure_dir(&bindings_dir)?;

        for module in GENERATED_BINDINGS {
            copy_file(&generated.join(module), &bindings_dir.join(module))?;
        }
    }

    let build_dir = build.build_dir();

    stage_dir(&layout.libs_dir(), |tmp| {
        copy_file(&build_dir.join(set.library), &tmp.join(set.library))
    })?;

    stage_dir(&layout.bins_dir(), |tmp| {
        copy_file(&build_dir.join(set.executable), &tmp.join(set.executable))
    })?;

    let api_dir = layout.api_dir();
    stage_dir(&layout.headers_dir(), |tmp| {
        for header in set.headers {
            let dest = tmp.join(header);
            if let Some(parent) = dest.parent() {
                ensure_dir(parent)?;
            }
            copy_file(&api_dir.join(header), &dest)?;
        }
        Ok(())
    })?;

    Ok(())
}

/// Populate `dest` via a temporary directory and an atomic swap.
fn stage_dir<F>(dest: &Path, populate: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let parent = dest
        .parent()
        .with_context(|| format!("staging directory {} has no parent", dest.display()))?;
    ensure_dir(parent)?;

    let tmp = tempfile::Builder::new()
        .prefix(".stage-")
        .tempdir_in(parent)
        .with_context(|| format!("failed to create staging area in {}", parent.display()))?;

    // On failure the TempDir cleans itself up and dest is untouched.
    populate(tmp.path())?;

    remove_dir_all_if_exists(dest)?;
    let staged = tmp.keep();
    fs::rename(&staged, dest)
        .with_context(|| format!("failed to move staged files into {}", dest.display()))?;

    Ok(())
}
