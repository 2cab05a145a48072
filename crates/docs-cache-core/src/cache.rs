//! Rendered artifact cache.
//!
//! [`CacheService`] is the seam the warm loop drives. [`DocsCache`] is the filesystem
//! implementation: it reads markdown from a [`ContentStore`], substitutes the version
//! placeholder, parses the result and stores a JSON artifact.
//!
//! ## Storage Layout
//!
//! ```text
//! <cache_root>/
//!   <version>/
//!     .index.json          # Index artifact (table of contents + page links)
//!     installation.json    # One artifact per page
//!     guide/
//!       routing.json
//! ```
//!
//! An artifact is fresh when the checksum stored in it matches the current source. Anything
//! else (absent file, unreadable JSON, changed source) is rendered again.

use crate::config::PagesConfig;
use crate::pages::source_path;
use crate::parser::MarkdownParser;
use crate::store::{ContentStore, PATH_SEPARATOR};
use crate::types::{CacheStatus, IndexArtifact, PageArtifact};
use crate::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const INDEX_FILE_NAME: &str = ".index.json";

/// Ensures rendered artifacts exist. Both calls are idempotent.
pub trait CacheService {
    /// Compute and store the version-level index artifact unless a fresh one exists.
    fn ensure_index(&mut self, version: &str) -> Result<CacheStatus>;

    /// Compute and store the artifact for one page unless a fresh one exists.
    fn ensure_page(&mut self, version: &str, page: &str) -> Result<CacheStatus>;
}

impl<C: CacheService + ?Sized> CacheService for &mut C {
    fn ensure_index(&mut self, version: &str) -> Result<CacheStatus> {
        (**self).ensure_index(version)
    }

    fn ensure_page(&mut self, version: &str, page: &str) -> Result<CacheStatus> {
        (**self).ensure_page(version, page)
    }
}

/// Filesystem-backed [`CacheService`].
pub struct DocsCache<S> {
    store: S,
    root: PathBuf,
    pages: PagesConfig,
    parser: MarkdownParser,
}

impl<S: ContentStore> DocsCache<S> {
    /// Create a cache writing under `root`, reading sources from `store`.
    pub fn new(store: S, root: impl Into<PathBuf>, pages: PagesConfig) -> Result<Self> {
        Ok(Self {
            store,
            root: root.into(),
            pages,
            parser: MarkdownParser::new()?,
        })
    }

    /// Root directory of the cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the index artifact for `version`.
    pub fn index_path(&self, version: &str) -> Result<PathBuf> {
        Ok(self.version_dir(version)?.join(INDEX_FILE_NAME))
    }

    /// Path of the artifact for `(version, page)`.
    pub fn page_path(&self, version: &str, page: &str) -> Result<PathBuf> {
        let mut path = self.version_dir(version)?;
        let segments: Vec<&str> = page.split(PATH_SEPARATOR).collect();
        for segment in &segments {
            validate_segment(segment, page)?;
        }
        if let Some((last, parents)) = segments.split_last() {
            for parent in parents {
                path.push(parent);
            }
            path.push(format!("{last}.json"));
        }
        Ok(path)
    }

    /// Load a cached page artifact, if present and readable.
    pub fn load_page(&self, version: &str, page: &str) -> Result<Option<PageArtifact>> {
        let path = self.page_path(version, page)?;
        Ok(read_artifact(&path))
    }

    /// Load a cached index artifact, if present and readable.
    pub fn load_index(&self, version: &str) -> Result<Option<IndexArtifact>> {
        let path = self.index_path(version)?;
        Ok(read_artifact(&path))
    }

    fn version_dir(&self, version: &str) -> Result<PathBuf> {
        validate_segment(version, version)?;
        Ok(self.root.join(version))
    }

    fn substitute(&self, source: &str, version: &str) -> String {
        if self.pages.version_placeholder.is_empty() {
            return source.to_string();
        }
        source.replace(&self.pages.version_placeholder, version)
    }
}

impl<S: ContentStore> CacheService for DocsCache<S> {
    fn ensure_index(&mut self, version: &str) -> Result<CacheStatus> {
        let artifact_path = self.index_path(version)?;
        let source = source_path(version, &self.pages.index_page, &self.pages.extension);

        if !self.store.exists(&source) {
            warn!("No index source {source} for version {version}");
            return Ok(CacheStatus::Missing);
        }

        let raw = self.store.read_to_string(&source)?;
        let checksum = checksum(&raw);
        if let Some(cached) = read_artifact::<IndexArtifact>(&artifact_path) {
            if cached.checksum == checksum {
                debug!("Index for {version} is fresh");
                return Ok(CacheStatus::Hit);
            }
        }

        let markdown = self.substitute(&raw, version);
        let parsed = self.parser.parse(&markdown)?;
        let artifact = IndexArtifact {
            version: version.to_string(),
            toc: parsed.toc,
            links: parsed.links,
            checksum,
            rendered_at: Utc::now(),
        };
        write_artifact(&artifact_path, &artifact)?;
        debug!(
            "Rendered index for {version} ({} links)",
            artifact.links.len()
        );
        Ok(CacheStatus::Rendered)
    }

    fn ensure_page(&mut self, version: &str, page: &str) -> Result<CacheStatus> {
        let artifact_path = self.page_path(version, page)?;
        let source = source_path(version, page, &self.pages.extension);

        if !self.store.exists(&source) {
            warn!("No source {source} for page {page}");
            return Ok(CacheStatus::Missing);
        }

        let raw = self.store.read_to_string(&source)?;
        let checksum = checksum(&raw);
        if let Some(cached) = read_artifact::<PageArtifact>(&artifact_path) {
            if cached.checksum == checksum {
                debug!("Page {version}/{page} is fresh");
                return Ok(CacheStatus::Hit);
            }
        }

        let markdown = self.substitute(&raw, version);
        let parsed = self.parser.parse(&markdown)?;
        let artifact = PageArtifact {
            version: version.to_string(),
            page: page.to_string(),
            title: parsed.title,
            toc: parsed.toc,
            line_count: parsed.line_count,
            checksum,
            rendered_at: Utc::now(),
            markdown,
        };
        write_artifact(&artifact_path, &artifact)?;
        debug!("Rendered {version}/{page} ({} lines)", artifact.line_count);
        Ok(CacheStatus::Rendered)
    }
}

fn validate_segment(segment: &str, whole: &str) -> Result<()> {
    if segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains('\\')
        || segment.contains(PATH_SEPARATOR)
    {
        return Err(Error::InvalidPath(whole.to_string()));
    }
    Ok(())
}

fn checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    STANDARD.encode(hasher.finalize())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(artifact) => Some(artifact),
        Err(e) => {
            debug!("Ignoring unreadable artifact {}: {e}", path.display());
            None
        },
    }
}

fn write_artifact<T: Serialize>(path: &Path, artifact: &T) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Storage(format!("Invalid artifact path {}", path.display())))?;
    fs::create_dir_all(parent)
        .map_err(|e| Error::Storage(format!("Failed to create cache directory: {e}")))?;

    let json = serde_json::to_string_pretty(artifact)?;

    // Atomic write: temp file + rename
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .map_err(|e| Error::Storage(format!("Failed to write temp artifact: {e}")))?;

    // Handle Windows: remove target before rename
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| Error::Storage(format!("Failed to remove existing artifact: {e}")))?;
    }

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::Storage(format!("Failed to commit artifact: {e}")))?;
    Ok(())
}
