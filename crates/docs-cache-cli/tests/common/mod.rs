#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Content and cache roots for one test.
#[allow(dead_code)]
pub struct Workspace {
    pub content: TempDir,
    pub cache: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self {
            content: tempfile::tempdir().expect("failed to create content dir"),
            cache: tempfile::tempdir().expect("failed to create cache dir"),
        }
    }

    /// Write `body` to a content-root relative path, creating parents.
    pub fn write(&self, rel: &str, body: &str) {
        let path = self.content.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    /// Configured `docs-cache` command pointed at this workspace.
    pub fn cmd(&self) -> Command {
        docs_cache_cmd(self.content.path(), self.cache.path())
    }
}

/// Create a `docs-cache` command isolated from the user's configuration.
#[allow(dead_code)]
pub fn docs_cache_cmd(content: &Path, cache: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docs-cache"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("DOCS_CACHE_CONFIG", cache.join("missing-config.toml"));
    cmd.env_remove("DOCS_CACHE_CONTENT_DIR");
    cmd.env_remove("DOCS_CACHE_DIR");
    cmd.env("NO_COLOR", "1");
    cmd.arg("--content-dir").arg(content);
    cmd.arg("--cache-dir").arg(cache);
    cmd
}
