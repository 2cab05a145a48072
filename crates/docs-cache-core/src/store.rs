//! Read access to the documentation content store.
//!
//! The store is a directory tree whose top-level directories are version namespaces:
//!
//! ```text
//! <content_root>/
//!   10.x/
//!     documentation.md
//!     installation.md
//!     guide/
//!       routing.md
//!   11.x/
//!     ...
//! ```
//!
//! Paths handed out by a [`ContentStore`] are store-relative, joined with `/`, and always begin
//! with the version segment (`"10.x/guide/routing.md"`). The store is populated by a separate
//! ingestion step; nothing here writes to it.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Separator used in store-relative paths regardless of platform.
pub const PATH_SEPARATOR: char = '/';

/// Abstraction over the content store so orchestration can run against fakes.
pub trait ContentStore {
    /// Names of the version namespaces, in the order the store reports them.
    fn list_versions(&self) -> Result<Vec<String>>;

    /// Every file below `version`, recursively, as store-relative paths including the version
    /// prefix.
    fn list_files(&self, version: &str) -> Result<Vec<String>>;

    /// Whether a store-relative path names an existing file.
    fn exists(&self, path: &str) -> bool;

    /// Read a store-relative file as UTF-8.
    fn read_to_string(&self, path: &str) -> Result<String>;
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn list_versions(&self) -> Result<Vec<String>> {
        (**self).list_versions()
    }

    fn list_files(&self, version: &str) -> Result<Vec<String>> {
        (**self).list_files(version)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        (**self).read_to_string(path)
    }
}

/// Filesystem-backed content store.
///
/// Versions and files are returned sorted by name so repeated runs process content in the same
/// order. Hidden entries (names starting with `.`) are skipped.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    /// Create a store rooted at `root`. The directory does not need to exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in path.split(PATH_SEPARATOR) {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(Error::InvalidPath(path.to_string()));
            }
            resolved.push(segment);
        }
        Ok(resolved)
    }

    fn collect_files(dir: &Path, prefix: &str, out: &mut Vec<String>) -> Result<()> {
        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("Skipping non UTF-8 entry in {}", dir.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let relative = format!("{prefix}{PATH_SEPARATOR}{name}");
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                Self::collect_files(&entry.path(), &relative, out)?;
            } else if file_type.is_file() {
                out.push(relative);
            }
        }
        Ok(())
    }
}

impl ContentStore for FsContentStore {
    fn list_versions(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            debug!("Content root {} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    versions.push(name.to_string());
                }
            }
        }

        versions.sort();
        debug!("Discovered {} version(s) under {}", versions.len(), self.root.display());
        Ok(versions)
    }

    fn list_files(&self, version: &str) -> Result<Vec<String>> {
        let dir = self.resolve(version)?;
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("version namespace '{version}'")));
        }

        let mut files = Vec::new();
        Self::collect_files(&dir, version, &mut files)?;
        Ok(files)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_file())
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path)?;
        if !resolved.is_file() {
            return Err(Error::NotFound(path.to_string()));
        }
        Ok(fs::read_to_string(resolved)?)
    }
}
