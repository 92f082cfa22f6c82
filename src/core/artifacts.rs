//! The fixed set of artifacts a successful Z3 build must deliver.
//!
//! The header list is a contract with Z3's public C API surface and has
//! to stay in sync with it; a header renamed or added upstream without
//! updating this list would be silently left out of the package.

use crate::core::platform::Platform;

/// Public API headers copied from `src/api` into the staged include
/// directory. `c++/z3++.h` keeps its nested subdirectory.
pub const API_HEADERS: &[&str] = &[
    "z3.h",
    "z3_v1.h",
    "z3_macros.h",
    "z3_api.h",
    "z3_algebraic.h",
    "z3_polynomial.h",
    "z3_rcf.h",
    "z3_interp.h",
    "z3_fpa.h",
    "c++/z3++.h",
];

/// Generated binding modules copied from a vendored source tree into
/// the package's binding directory.
pub const GENERATED_BINDINGS: &[&str] = &["z3core.py", "z3consts.py"];

/// Everything artifact staging expects to find after a successful
/// native build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Shared library filename, as the platform policy names it.
    pub library: &'static str,
    /// Executable filename, as the platform policy names it.
    pub executable: &'static str,
    /// Public headers, relative to the source tree's `src/api`.
    pub headers: &'static [&'static str],
}

impl ArtifactSet {
    /// The artifact set for the given platform.
    ///
    /// The filenames are taken from the platform policy so that staging
    /// can never diverge from it.
    pub fn for_platform(platform: Platform) -> ArtifactSet {
        ArtifactSet {
            library: platform.library_filename(),
            executable: platform.executable_filename(),
            headers: API_HEADERS,
        }
    }
}
