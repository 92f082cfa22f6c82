//! CLI integration tests for z3pack.
//!
//! These tests run the full lifecycle commands against a fake Z3
//! checkout with stub configure/build tools, injected through the
//! `PYTHON` and `MAKE` environment overrides.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use z3pack::core::artifacts::API_HEADERS;
use z3pack::core::platform::Platform;

/// Get the z3pack binary command.
fn z3pack() -> Command {
    Command::cargo_bin("z3pack").unwrap()
}

/// Write an executable stub script and return its path.
fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A fake Z3 checkout with the package living at `src/api/python`,
/// plus stub configure and build tools.
struct Fixture {
    _tmp: TempDir,
    repo: PathBuf,
    pkg: PathBuf,
    python: PathBuf,
    make: PathBuf,
    make_marker: PathBuf,
}

impl Fixture {
    /// Stubs that succeed: the configure stub creates the build
    /// directory, the build stub drops the expected artifacts into it.
    fn passing() -> Fixture {
        let platform = Platform::current();
        Fixture::with_stubs(
            "mkdir -p build",
            &format!(
                "touch {} {}",
                platform.library_filename(),
                platform.executable_filename()
            ),
        )
    }

    fn with_stubs(python_body: &str, make_body: &str) -> Fixture {
        let tmp = TempDir::new().unwrap();
        let repo = tmp.path().join("checkout");
        let pkg = repo.join("src/api/python");
        fs::create_dir_all(&pkg).unwrap();

        fs::write(repo.join("LICENSE.txt"), "MIT").unwrap();
        fs::create_dir_all(repo.join("scripts")).unwrap();
        fs::write(repo.join("scripts/mk_make.py"), "# configure").unwrap();
        fs::create_dir_all(repo.join("examples")).unwrap();
        fs::write(repo.join("examples/example.c"), "int main(){}").unwrap();

        let api = repo.join("src/api");
        fs::create_dir_all(api.join("c++")).unwrap();
        for header in API_HEADERS {
            fs::write(api.join(header), format!("// {}", header)).unwrap();
        }

        let make_marker = tmp.path().join("make-ran");
        let python = write_stub(tmp.path(), "python", python_body);
        let make = write_stub(
            tmp.path(),
            "make",
            &format!("touch {}\n{}", make_marker.display(), make_body),
        );

        Fixture {
            _tmp: tmp,
            repo,
            pkg,
            python,
            make,
            make_marker,
        }
    }

    /// A z3pack command wired to this fixture's stubs and package root.
    fn cmd(&self, subcommand: &str) -> Command {
        let mut cmd = z3pack();
        cmd.arg(subcommand)
            .arg("--package-root")
            .arg(&self.pkg)
            .env("PYTHON", &self.python)
            .env("MAKE", &self.make);
        cmd
    }
}

// ============================================================================
// z3pack build
// ============================================================================

#[test]
fn test_build_stages_all_artifacts() {
    let fx = Fixture::passing();

    fx.cmd("build")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuring"))
        .stderr(predicate::str::contains("Finished"));

    let platform = Platform::current();

    // Exactly the expected artifact in each staging directory.
    let libs: Vec<_> = fs::read_dir(fx.pkg.join("z3/lib"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(libs, [platform.library_filename()]);

    let bins: Vec<_> = fs::read_dir(fx.pkg.join("bin"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(bins, [platform.executable_filename()]);

    for header in API_HEADERS {
        assert!(
            fx.pkg.join("z3/include").join(header).is_file(),
            "missing staged header {}",
            header
        );
    }
}

#[test]
fn test_build_is_repeatable() {
    let fx = Fixture::passing();

    fx.cmd("build").assert().success();
    fx.cmd("build").assert().success();

    let platform = Platform::current();
    assert!(fx
        .pkg
        .join("z3/lib")
        .join(platform.library_filename())
        .is_file());
}

#[test]
fn test_build_quiet_prints_nothing_on_success() {
    let fx = Fixture::passing();

    fx.cmd("build")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// failure propagation
// ============================================================================

#[test]
fn test_configure_failure_aborts_before_compile() {
    let fx = Fixture::with_stubs("exit 1", "true");

    fx.cmd("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to configure Z3"));

    // The build tool never ran and nothing was staged.
    assert!(!fx.make_marker.exists());
    assert!(!fx.pkg.join("z3/lib").exists());
    assert!(!fx.pkg.join("bin").exists());
    assert!(!fx.pkg.join("z3/include").exists());
}

#[test]
fn test_configure_without_build_dir_fails_fast() {
    let fx = Fixture::with_stubs("true", "true");

    fx.cmd("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "did not create the build directory",
        ));

    assert!(!fx.make_marker.exists());
}

#[test]
fn test_compile_failure_aborts_before_staging() {
    let fx = Fixture::with_stubs("mkdir -p build", "exit 1");

    fx.cmd("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to build Z3"));

    assert!(!fx.pkg.join("z3/lib").exists());
    assert!(!fx.pkg.join("bin").exists());
    assert!(!fx.pkg.join("z3/include").exists());
}

#[test]
fn test_missing_artifact_fails_staging() {
    // Build dir exists but the build stub produces no artifacts.
    let fx = Fixture::with_stubs("mkdir -p build", "true");

    fx.cmd("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to copy"));
}

// ============================================================================
// z3pack develop / bdist
// ============================================================================

#[test]
fn test_develop_runs_the_build_pipeline() {
    let fx = Fixture::passing();

    fx.cmd("develop").assert().success();

    let platform = Platform::current();
    assert!(fx
        .pkg
        .join("z3/lib")
        .join(platform.library_filename())
        .is_file());
}

#[test]
fn test_bdist_delegates_to_build() {
    let fx = Fixture::passing();

    fx.cmd("bdist").assert().success();

    assert!(fx.pkg.join("bin").is_dir());
    assert!(fx.pkg.join("z3/include/z3.h").is_file());
}

// ============================================================================
// z3pack sdist
// ============================================================================

#[test]
fn test_sdist_assembles_vendored_bundle() {
    let fx = Fixture::passing();

    // Binding sources that must be excluded from the bundle.
    let bindings = fx.repo.join("src/api/python/z3");
    fs::create_dir_all(&bindings).unwrap();
    fs::write(bindings.join("z3core.py"), "# generated").unwrap();

    fx.cmd("sdist")
        .assert()
        .success()
        .stderr(predicate::str::contains("Vendoring"));

    let core = fx.pkg.join("core");
    assert!(core.join("LICENSE.txt").is_file());
    assert!(core.join("scripts/mk_make.py").is_file());
    assert!(core.join("examples/example.c").is_file());
    assert!(core.join("src/api/z3.h").is_file());
    assert!(!core.join("src/api/python/z3/z3core.py").exists());
    assert!(core.join("src/api/python/z3/.placeholder").is_file());
}

#[test]
fn test_sdist_cleans_staged_binaries_first() {
    let fx = Fixture::passing();

    fx.cmd("build").assert().success();
    assert!(fx.pkg.join("z3/lib").exists());

    fx.cmd("sdist").assert().success();
    assert!(!fx.pkg.join("z3/lib").exists());
    assert!(!fx.pkg.join("bin").exists());
    assert!(!fx.pkg.join("z3/include").exists());
}

#[test]
fn test_build_after_sdist_uses_vendored_tree() {
    let fx = Fixture::passing();

    fx.cmd("sdist").assert().success();

    // Drop the generated bindings into the vendored tree, as the real
    // configure step would.
    let core = fx.pkg.join("core");
    let vendored_bindings = core.join("src/api/python/z3");
    fs::write(vendored_bindings.join("z3core.py"), "# generated").unwrap();
    fs::write(vendored_bindings.join("z3consts.py"), "# generated").unwrap();

    fx.cmd("build").assert().success();

    // Local-source builds also install the binding modules.
    assert!(fx.pkg.join("z3/z3core.py").is_file());
    assert!(fx.pkg.join("z3/z3consts.py").is_file());
    // And the build ran inside the vendored tree, not the checkout.
    assert!(core.join("build").is_dir());
}

// ============================================================================
// z3pack clean
// ============================================================================

#[test]
fn test_clean_removes_staging_directories() {
    let fx = Fixture::passing();

    fx.cmd("build").assert().success();

    fx.cmd("clean")
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed"));

    assert!(!fx.pkg.join("z3/lib").exists());
    assert!(!fx.pkg.join("bin").exists());
    assert!(!fx.pkg.join("z3/include").exists());
}

#[test]
fn test_clean_is_a_no_op_without_staged_artifacts() {
    let fx = Fixture::passing();

    fx.cmd("clean").assert().success();
}
