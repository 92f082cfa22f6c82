//! Platform policy: artifact filenames and build-tool invocation style.

use std::thread;

/// Operating system family the package is being built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

/// All supported platform families, for exhaustive policy tests.
pub const ALL_PLATFORMS: &[Platform] = &[Platform::Linux, Platform::MacOs, Platform::Windows];

/// How the native build is driven after configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildTool {
    /// `nmake`, invoked with no parallelism flag.
    Nmake,
    /// `make -j <jobs>`.
    Make { jobs: usize },
}

impl Platform {
    /// Detect the current platform.
    ///
    /// Anything that is neither Windows nor macOS uses the Linux policy
    /// (ELF shared object, make-driven build).
    pub fn current() -> Platform {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Linux,
        }
    }

    /// Filename of the Z3 shared library produced by the native build.
    pub fn library_filename(self) -> &'static str {
        match self {
            Platform::Linux => "libz3.so",
            Platform::MacOs => "libz3.dylib",
            Platform::Windows => "libz3.dll",
        }
    }

    /// Filename of the Z3 executable produced by the native build.
    pub fn executable_filename(self) -> &'static str {
        match self {
            Platform::Windows => "z3.exe",
            _ => "z3",
        }
    }

    /// The build-tool invocation used after configuration.
    pub fn build_tool(self) -> BuildTool {
        match self {
            Platform::Windows => BuildTool::Nmake,
            _ => BuildTool::Make {
                jobs: available_jobs(),
            },
        }
    }

    /// Extra arguments for the configure script.
    ///
    /// Only a 64-bit Windows host adds the `-x` cross-compile flag.
    /// Pointer width is a parameter so the rule is testable from any
    /// host; callers pass [`host_pointer_width`].
    pub fn configure_args(self, pointer_width: u32) -> &'static [&'static str] {
        if self == Platform::Windows && pointer_width == 64 {
            &["-x"]
        } else {
            &[]
        }
    }
}

/// Pointer width of the host, in bits.
pub fn host_pointer_width() -> u32 {
    usize::BITS
}

/// Number of parallel jobs for make-driven builds.
fn available_jobs() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
