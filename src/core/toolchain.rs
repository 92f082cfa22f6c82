//! External tool discovery and the build environment record.

use std::env;
use std::path::PathBuf;

use crate::util::process::{find_executable, ProcessBuilder};

/// C++ standard pinned for the native compiler.
const CXXFLAGS: &str = "-std=c++11";

/// Paths of the external tools driven by the pipeline, resolved once
/// per invocation.
///
/// Resolution order follows the usual convention: an environment
/// variable override first, then a PATH lookup, then a bare fallback
/// name. An unresolvable tool is not an error here; spawning it
/// surfaces the failure with the command in the message.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Python interpreter running `mk_make.py`.
    pub python: PathBuf,
    /// make, for non-Windows builds.
    pub make: PathBuf,
    /// nmake, for Windows builds.
    pub nmake: PathBuf,
}

impl Toolchain {
    /// Resolve the toolchain from the environment.
    pub fn from_env() -> Toolchain {
        Toolchain {
            python: resolve_tool(env::var("PYTHON").ok(), &["python3", "python"]),
            make: resolve_tool(env::var("MAKE").ok(), &["make", "gmake"]),
            nmake: resolve_tool(env::var("NMAKE").ok(), &["nmake"]),
        }
    }
}

/// Resolve one tool path: explicit override, then PATH candidates, then
/// the first candidate as a bare name.
fn resolve_tool(override_path: Option<String>, candidates: &[&str]) -> PathBuf {
    if let Some(path) = override_path {
        return PathBuf::from(path);
    }

    for candidate in candidates {
        if let Some(path) = find_executable(candidate) {
            return path;
        }
    }

    PathBuf::from(candidates[0])
}

/// Environment overrides applied to every toolchain invocation.
///
/// Constructed once per invocation and never mutated; the child process
/// environment is the inherited one plus exactly these two entries.
#[derive(Debug, Clone)]
pub struct BuildEnv {
    /// Interpreter path exported as `PYTHON` for the build scripts.
    pub python: PathBuf,
    /// Compiler flags exported as `CXXFLAGS`.
    pub cxxflags: String,
}

impl BuildEnv {
    /// Build the environment record for the given toolchain.
    pub fn new(toolchain: &Toolchain) -> BuildEnv {
        BuildEnv {
            python: toolchain.python.clone(),
            cxxflags: CXXFLAGS.to_string(),
        }
    }

    /// Apply the overrides to a process invocation.
    pub fn apply(&self, cmd: ProcessBuilder) -> ProcessBuilder {
        cmd.env("PYTHON", self.python.to_string_lossy())
            .env("CXXFLAGS", &self.cxxflags)
    }
}
