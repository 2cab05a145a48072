//! The warm loop.
//!
//! Walks the target versions in order, forces the index and every page into the cache, and
//! streams one progress line per page:
//!
//! ```text
//! 10.x... 3 pages
//!  1 - documentation 4ms
//!  2 - installation 11ms
//!  3 - guide/routing 9ms
//! ```
//!
//! Any error from the store or the cache service ends the run. Pages already warmed stay cached.

use crate::cache::CacheService;
use crate::pages::page_ids;
use crate::report::{Reporter, pad_left};
use crate::store::ContentStore;
use crate::types::{PageTiming, VersionReport, WarmReport};
use crate::Result;
use std::time::Instant;
use tracing::debug;

/// Width of the page index column.
const INDEX_WIDTH: usize = 2;

/// Warms versions against a store and cache, reporting progress as it goes.
pub struct Warmer<'a, S, C, R> {
    store: &'a S,
    cache: &'a mut C,
    reporter: &'a mut R,
    extension: &'a str,
}

impl<'a, S, C, R> Warmer<'a, S, C, R>
where
    S: ContentStore,
    C: CacheService,
    R: Reporter,
{
    /// Bundle the collaborators for one run. `extension` selects documentation sources.
    pub fn new(store: &'a S, cache: &'a mut C, reporter: &'a mut R, extension: &'a str) -> Self {
        Self {
            store,
            cache,
            reporter,
            extension,
        }
    }

    /// Warm every version in `targets`, in order.
    pub fn run(&mut self, targets: &[String]) -> Result<WarmReport> {
        let mut report = WarmReport::default();
        for version in targets {
            report.versions.push(self.warm_version(version)?);
        }
        Ok(report)
    }

    fn warm_version(&mut self, version: &str) -> Result<VersionReport> {
        self.reporter.write(&format!("{version}... "))?;
        let index = self.cache.ensure_index(version)?;
        debug!("Index for {version}: {index}");

        let files = self.store.list_files(version)?;
        let pages = page_ids(&files, self.extension);
        self.reporter.info(&format!("{} pages", pages.len()))?;

        let mut timings = Vec::with_capacity(pages.len());
        for (position, page) in pages.into_iter().enumerate() {
            self.reporter
                .write(&format!("{} - {page} ", pad_left(position + 1, INDEX_WIDTH)))?;

            let started = Instant::now();
            let status = self.cache.ensure_page(version, &page)?;
            let elapsed = started.elapsed();

            self.reporter.info(&format!("{}ms", elapsed.as_millis()))?;
            timings.push(PageTiming {
                page,
                status,
                elapsed,
            });
        }

        Ok(VersionReport {
            version: version.to_string(),
            index,
            pages: timings,
        })
    }
}

/// Warm `targets` with the default `md` extension.
pub fn warm<S, C, R>(targets: &[String], store: &S, cache: &mut C, reporter: &mut R) -> Result<WarmReport>
where
    S: ContentStore,
    C: CacheService,
    R: Reporter,
{
    Warmer::new(store, cache, reporter, "md").run(targets)
}
