//! Source staging: assemble the minimal vendored Z3 tree for a
//! source-only distribution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::layout::Layout;
use crate::util::fs::{copy_dir_all, copy_file, ensure_dir, relative_path, remove_dir_all_if_exists};

/// Path of the generated binding package, relative to the native `src`
/// tree. Excluded from the vendored copy and recreated as an empty
/// placeholder so a build from the bundle still finds the expected
/// directory.
const BINDINGS_SUBDIR: &str = "api/python";

/// Assemble `<root>/core` from the repository checkout: license, build
/// scripts, examples, and the native sources minus the binding package.
///
/// Always reads from the repository-relative candidate, never from a
/// previously vendored tree. Never invokes a build tool and never
/// touches the build directory.
pub fn vendor_sources(layout: &Layout) -> Result<()> {
    let repo = layout.repo_source_dir();
    let dest = layout.vendor_dir();

    remove_dir_all_if_exists(&dest)?;
    ensure_dir(&dest)?;

    copy_file(&repo.join("LICENSE.txt"), &dest.join("LICENSE.txt"))?;
    copy_dir_all(&repo.join("scripts"), &dest.join("scripts"))?;
    copy_dir_all(&repo.join("examples"), &dest.join("examples"))?;
    copy_src_excluding_bindings(&repo.join("src"), &dest.join("src"))?;

    // Empty binding package, marker file only.
    let stub = dest.join("src").join(BINDINGS_SUBDIR).join("z3");
    ensure_dir(&stub)?;
    fs::File::create(stub.join(".placeholder"))
        .with_context(|| format!("failed to create placeholder in {}", stub.display()))?;

    Ok(())
}

/// Recursively copy the native `src` tree, pruning exactly the entry
/// whose path relative to `src_root` is [`BINDINGS_SUBDIR`].
///
/// The match is an exact relative-path comparison, so sibling
/// directories under `api/` and unrelated directories that happen to be
/// named `python` elsewhere in the tree are retained.
fn copy_src_excluding_bindings(src_root: &Path, dest_root: &Path) -> Result<()> {
    let exclude = Path::new(BINDINGS_SUBDIR);

    let walker = WalkDir::new(src_root)
        .into_iter()
        .filter_entry(|entry| relative_path(src_root, entry.path()) != exclude);

    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to walk {}", src_root.display()))?;
        let rel = relative_path(src_root, entry.path());
        let dest = dest_root.join(&rel);

        if entry.file_type().is_dir() {
            ensure_dir(&dest)?;
        } else {
            copy_file(entry.path(), &dest)?;
        }
    }

    Ok(())
}
