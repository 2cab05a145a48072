//! Configuration for the docs cache.
//!
//! Settings are stored in TOML. Every field has a default, so an absent file (or an absent
//! section) is valid and yields the built-in layout.
//!
//! ## File Location
//!
//! 1. An explicit path passed to [`Config::load`] (the CLI wires `--config` / `DOCS_CACHE_CONFIG`)
//! 2. `<config_dir>/config.toml` from [`directories::ProjectDirs`]
//!
//! ## Example Configuration File
//!
//! ```toml
//! [paths]
//! content_root = "/srv/docs/content"
//! cache_root = "/srv/docs/cache"
//!
//! [pages]
//! extension = "md"
//! index_page = "documentation"
//! version_placeholder = "{{version}}"
//! ```

use crate::{Error, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where content is read from and artifacts are written to.
    pub paths: PathsConfig,
    /// How page units are recognised and rendered.
    pub pages: PagesConfig,
}

/// Filesystem locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the content store. Each top-level directory is one version namespace.
    ///
    /// Default locations:
    /// - Linux: `~/.local/share/docs-cache/docs`
    /// - macOS: `~/Library/Application Support/dev.docs-cache.docs-cache/docs`
    pub content_root: PathBuf,

    /// Root of the rendered artifact cache.
    pub cache_root: PathBuf,
}

/// Page recognition and rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// File extension (without the dot) that marks a documentation source file.
    pub extension: String,

    /// Page identifier holding the version-level index (table of contents).
    pub index_page: String,

    /// Placeholder substituted with the version name before rendering.
    pub version_placeholder: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        project_dirs().map_or_else(
            || {
                let base = fallback_dir();
                Self {
                    content_root: base.join("docs"),
                    cache_root: base.join("cache"),
                }
            },
            |dirs| Self {
                content_root: dirs.data_dir().join("docs"),
                cache_root: dirs.cache_dir().to_path_buf(),
            },
        )
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            index_page: "documentation".to_string(),
            version_placeholder: "{{version}}".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing file yields [`Config::default`]. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Parse a configuration file that is known to exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the default configuration file, if the platform exposes a config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn validate(&self) -> Result<()> {
        let ext = &self.pages.extension;
        if ext.is_empty() || ext.contains('.') || ext.contains('/') {
            return Err(Error::Config(format!(
                "pages.extension must be a bare extension such as \"md\", got {ext:?}"
            )));
        }
        if self.pages.index_page.is_empty() {
            return Err(Error::Config("pages.index_page must not be empty".into()));
        }
        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "docs-cache", "docs-cache")
}

fn fallback_dir() -> PathBuf {
    BaseDirs::new().map_or_else(
        || PathBuf::from(".docs-cache"),
        |base| base.home_dir().join(".docs-cache"),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pages.extension, "md");
        assert_eq!(config.pages.index_page, "documentation");
        assert_eq!(config.pages.version_placeholder, "{{version}}");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [paths]
            content_root = "/srv/docs"

            [pages]
            index_page = "index"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.content_root, PathBuf::from("/srv/docs"));
        assert_eq!(config.paths.cache_root, PathsConfig::default().cache_root);
        assert_eq!(config.pages.index_page, "index");
        assert_eq!(config.pages.extension, "md");
    }

    #[test]
    fn rejects_dotted_extension() {
        let err = Config::from_toml("[pages]\nextension = \".md\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::from_toml("[paths\ncontent_root = 1").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn missing_explicit_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[paths]\ncache_root = \"/tmp/rendered\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.paths.cache_root, PathBuf::from("/tmp/rendered"));
    }
}
