//! Data types shared across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Entry in a document's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Headings from the top level down to this one.
    pub heading_path: Vec<String>,
    /// 1-based line where the heading starts.
    pub line: usize,
    /// Nested headings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

/// Markdown link found in an index document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexLink {
    /// Link text.
    pub title: String,
    /// Link target, after version substitution.
    pub target: String,
}

/// Rendered artifact for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageArtifact {
    /// Version namespace.
    pub version: String,
    /// Page identifier within the version.
    pub page: String,
    /// First heading of the page.
    pub title: Option<String>,
    /// Table of contents.
    pub toc: Vec<TocEntry>,
    /// Number of lines in the rendered markdown.
    pub line_count: usize,
    /// SHA-256 (base64) of the raw source the artifact was rendered from.
    pub checksum: String,
    /// When the artifact was produced.
    pub rendered_at: DateTime<Utc>,
    /// Markdown after version substitution.
    pub markdown: String,
}

/// Rendered artifact for a version's index document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexArtifact {
    /// Version namespace.
    pub version: String,
    /// Section headings of the index.
    pub toc: Vec<TocEntry>,
    /// Links to pages, in document order.
    pub links: Vec<IndexLink>,
    /// SHA-256 (base64) of the raw source the artifact was rendered from.
    pub checksum: String,
    /// When the artifact was produced.
    pub rendered_at: DateTime<Utc>,
}

/// What an `ensure_*` call found or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// A fresh artifact was already cached.
    Hit,
    /// The artifact was computed and stored.
    Rendered,
    /// The source does not exist; nothing was stored.
    Missing,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Rendered => "rendered",
            Self::Missing => "missing",
        })
    }
}

/// Timing for one warmed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTiming {
    /// Page identifier.
    pub page: String,
    /// Outcome of the cache call.
    pub status: CacheStatus,
    /// Wall time spent in the cache call, measured with a monotonic clock.
    pub elapsed: Duration,
}

/// Everything warmed for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    /// Version namespace.
    pub version: String,
    /// Outcome of the index call.
    pub index: CacheStatus,
    /// Per-page timings, in processing order.
    pub pages: Vec<PageTiming>,
}

impl VersionReport {
    /// Sum of page timings.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.pages.iter().map(|p| p.elapsed).sum()
    }

    /// Number of pages with the given status.
    #[must_use]
    pub fn count(&self, status: CacheStatus) -> usize {
        self.pages.iter().filter(|p| p.status == status).count()
    }
}

/// Summary of one warm run. Held in memory for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarmReport {
    /// One entry per processed version, in processing order.
    pub versions: Vec<VersionReport>,
}

impl WarmReport {
    /// Total pages processed across all versions.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.versions.iter().map(|v| v.pages.len()).sum()
    }

    /// Total time spent in page cache calls.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.versions.iter().map(VersionReport::elapsed).sum()
    }

    /// Pages with the given status across all versions.
    #[must_use]
    pub fn count(&self, status: CacheStatus) -> usize {
        self.versions.iter().map(|v| v.count(status)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(page: &str, status: CacheStatus, ms: u64) -> PageTiming {
        PageTiming {
            page: page.into(),
            status,
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn report_aggregates_across_versions() {
        let report = WarmReport {
            versions: vec![
                VersionReport {
                    version: "v1".into(),
                    index: CacheStatus::Rendered,
                    pages: vec![
                        timing("a", CacheStatus::Rendered, 12),
                        timing("b", CacheStatus::Hit, 1),
                    ],
                },
                VersionReport {
                    version: "v2".into(),
                    index: CacheStatus::Hit,
                    pages: vec![timing("a", CacheStatus::Hit, 2)],
                },
            ],
        };

        assert_eq!(report.page_count(), 3);
        assert_eq!(report.elapsed(), Duration::from_millis(15));
        assert_eq!(report.count(CacheStatus::Hit), 2);
        assert_eq!(report.count(CacheStatus::Rendered), 1);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CacheStatus::Rendered).unwrap_or_default();
        assert_eq!(json, "\"rendered\"");
        assert_eq!(CacheStatus::Missing.to_string(), "missing");
    }
}
