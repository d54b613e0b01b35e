//! Shared testing harness for `samplegen` integration tests.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tool::FakeTool;

/// Isolated repository checkout with a fake scaffolding binary at `bin/fake-tool`.
pub(crate) struct TestContext {
    _root: TempDir,
    work_dir: PathBuf,
    tool: FakeTool,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let tool = FakeTool::install(&work_dir.join("bin"), &root.path().join("logs"));

        Self { _root: root, work_dir, tool }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn tool(&self) -> &FakeTool {
        &self.tool
    }

    /// Build a command invoking the compiled `samplegen` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("samplegen").expect("Failed to locate samplegen binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("FAKE_TOOL_FAIL_ON")
            .env_remove("FAKE_TOOL_FAIL_STREAM");
        cmd
    }

    /// Run `samplegen --binaryPath bin/fake-tool` and assert success.
    pub(crate) fn generate(&self) {
        self.cli().args(["--binaryPath", "bin/fake-tool"]).assert().success();
    }

    pub(crate) fn testdata(&self) -> PathBuf {
        self.work_dir.join("testdata")
    }

    /// `testdata/hybrid/<flavor>/memcached-operator`
    pub(crate) fn sample_dir(&self, flavor: &str) -> PathBuf {
        self.testdata().join("hybrid").join(flavor).join("memcached-operator")
    }

    pub(crate) fn read_sample_file(&self, flavor: &str, relative: &str) -> String {
        let path = self.sample_dir(flavor).join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}

/// Relative path → contents for every file under `dir`.
pub(crate) fn snapshot_tree(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).expect("Failed to read directory") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let relative = path.strip_prefix(base).expect("entry under base").to_path_buf();
                out.insert(relative, fs::read(&path).expect("Failed to read file"));
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(dir, dir, &mut out);
    out
}
