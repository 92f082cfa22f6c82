//! Source tree and package directory layout.
//!
//! The package can be built against two source layouts:
//!
//! - **Local**: a vendored copy of the Z3 tree at `<root>/core`, present
//!   when building from a source bundle assembled by `z3pack sdist`.
//! - **Repository**: the package directory living inside the Z3
//!   repository itself at `src/api/python`, so the checkout root is
//!   three levels up. Used for in-place development builds.
//!
//! The choice is made once per invocation and every other component
//! reads it from [`Layout`]; nothing re-derives it independently.

use std::path::{Path, PathBuf};

/// Which candidate source tree was chosen as the Z3 source root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Vendored copy inside the package (`<root>/core`).
    Local,
    /// Sibling repository checkout (`<root>/../../..`).
    Repository,
}

/// Resolved directory layout for one packaging invocation.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    source_root: PathBuf,
    source_kind: SourceKind,
}

impl Layout {
    /// Resolve the layout from the package root.
    ///
    /// An existing local vendored tree always wins over the
    /// repository-relative path, regardless of whether the latter is
    /// valid. Neither candidate existing is not an error here; the
    /// configure step surfaces that failure when it cannot find its
    /// script.
    pub fn discover(root: impl Into<PathBuf>) -> Layout {
        let root = root.into();
        let local = Self::local_source_dir_of(&root);

        let (source_root, source_kind) = if local.exists() {
            (local, SourceKind::Local)
        } else {
            (Self::repo_source_dir_of(&root), SourceKind::Repository)
        };

        tracing::debug!(
            "source root: {} ({:?})",
            source_root.display(),
            source_kind
        );

        Layout {
            root,
            source_root,
            source_kind,
        }
    }

    fn local_source_dir_of(root: &Path) -> PathBuf {
        root.join("core")
    }

    fn repo_source_dir_of(root: &Path) -> PathBuf {
        root.join("..").join("..").join("..")
    }

    /// The package root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The chosen Z3 source root.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Which candidate was chosen as the source root.
    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    /// The repository-relative source candidate, regardless of which
    /// candidate was chosen. Source staging always reads from here.
    pub fn repo_source_dir(&self) -> PathBuf {
        Self::repo_source_dir_of(&self.root)
    }

    /// Destination of the vendored source bundle (`<root>/core`).
    pub fn vendor_dir(&self) -> PathBuf {
        Self::local_source_dir_of(&self.root)
    }

    /// The build directory the configure script prepares inside the
    /// source root. Created by `mk_make.py`, not by this tool.
    pub fn build_dir(&self) -> PathBuf {
        self.source_root.join("build")
    }

    /// Public C API directory of the Z3 source tree.
    pub fn api_dir(&self) -> PathBuf {
        self.source_root.join("src").join("api")
    }

    /// Staging directory for the shared library (`<root>/z3/lib`).
    pub fn libs_dir(&self) -> PathBuf {
        self.root.join("z3").join("lib")
    }

    /// Staging directory for the executable (`<root>/bin`).
    pub fn bins_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Staging directory for the public headers (`<root>/z3/include`).
    pub fn headers_dir(&self) -> PathBuf {
        self.root.join("z3").join("include")
    }

    /// The package's binding module directory (`<root>/z3`), which
    /// receives the generated binding modules in local-source builds.
    pub fn bindings_dir(&self) -> PathBuf {
        self.root.join("z3")
    }
}
